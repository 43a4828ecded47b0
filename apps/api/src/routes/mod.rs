pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::extraction::handlers as extraction;
use crate::landing::handlers as landing;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction previews
        .route(
            "/api/v1/extract/about",
            post(extraction::handle_segment_about),
        )
        .route(
            "/api/v1/extract/traits",
            post(extraction::handle_derive_traits),
        )
        .route(
            "/api/v1/extract/stats",
            post(extraction::handle_extract_stats),
        )
        // Landing page API
        .route("/api/v1/landing", post(landing::handle_build))
        .route("/api/v1/landing/from-text", post(landing::handle_from_text))
        .route("/api/v1/landing/lookup", post(landing::handle_lookup))
        .with_state(state)
}
