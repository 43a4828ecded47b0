//! Axum route handlers for the Extraction API.
//!
//! Preview endpoints: each exposes one core function directly so a client can
//! inspect segmentation, traits, or stats without building a full page.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::segmenter::{segment, AboutSegments};
use crate::extraction::stats::{extract_stats, AchievementStat};
use crate::extraction::traits::derive_traits;
use crate::models::profile::ProfileRecord;

#[derive(Debug, Deserialize)]
pub struct SegmentRequest {
    pub about_text: String,
}

#[derive(Debug, Serialize)]
pub struct TraitsResponse {
    pub traits: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: Vec<AchievementStat>,
}

/// POST /api/v1/extract/about
///
/// Empty input is valid and yields all-empty segments — the segmenter is
/// total, so there is no validation error here.
pub async fn handle_segment_about(
    Json(request): Json<SegmentRequest>,
) -> Result<Json<AboutSegments>, AppError> {
    Ok(Json(segment(&request.about_text)))
}

/// POST /api/v1/extract/traits
pub async fn handle_derive_traits(
    Json(profile): Json<ProfileRecord>,
) -> Result<Json<TraitsResponse>, AppError> {
    let traits = derive_traits(&profile).into_iter().map(String::from).collect();
    Ok(Json(TraitsResponse { traits }))
}

/// POST /api/v1/extract/stats
pub async fn handle_extract_stats(
    Json(request): Json<StatsRequest>,
) -> Result<Json<StatsResponse>, AppError> {
    Ok(Json(StatsResponse {
        stats: extract_stats(&request.description),
    }))
}
