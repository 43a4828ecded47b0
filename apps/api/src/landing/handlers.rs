//! Axum route handlers for the Landing Page API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::landing::{build_landing_page, LandingPage};
use crate::models::profile::ProfileRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FromTextRequest {
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub handle: String,
}

#[derive(Debug, Serialize)]
pub struct LandingResponse {
    pub profile: ProfileRecord,
    pub page: LandingPage,
}

/// POST /api/v1/landing
///
/// Builds a landing page from an already-structured profile record.
pub async fn handle_build(
    Json(profile): Json<ProfileRecord>,
) -> Result<Json<LandingResponse>, AppError> {
    let page = build_landing_page(&profile);
    Ok(Json(LandingResponse { profile, page }))
}

/// POST /api/v1/landing/from-text
///
/// Bulk-parses pasted profile text via the LLM, then builds the page.
pub async fn handle_from_text(
    State(state): State<AppState>,
    Json(request): Json<FromTextRequest>,
) -> Result<Json<LandingResponse>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }

    let profile = state
        .llm
        .parse_profile(&request.raw_text)
        .await
        .map_err(|e| AppError::Llm(format!("Profile parsing failed: {e}")))?;

    let page = build_landing_page(&profile);
    Ok(Json(LandingResponse { profile, page }))
}

/// POST /api/v1/landing/lookup
///
/// Fetches a profile by handle from the third-party lookup service, then
/// builds the page.
pub async fn handle_lookup(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Result<Json<LandingResponse>, AppError> {
    if request.handle.trim().is_empty() {
        return Err(AppError::Validation("handle cannot be empty".to_string()));
    }

    let profile = state.lookup.fetch(&request.handle).await?;
    let page = build_landing_page(&profile);
    Ok(Json(LandingResponse { profile, page }))
}
