pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::eligibility::handlers as eligibility;
use crate::extraction::handlers as extraction;
use crate::recommend::handlers as recommend;
use crate::state::AppState;

/// Upper bound on a résumé upload.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé extraction
        .route(
            "/api/v1/resume/extract",
            post(extraction::handle_extract_pdf).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/api/v1/resume/extract-text",
            post(extraction::handle_extract_text),
        )
        // Eligibility
        .route("/api/v1/eligibility", post(eligibility::handle_eligibility))
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(recommend::handle_recommendations),
        )
        .route(
            "/api/v1/recommendations/translate",
            post(recommend::handle_translate_card),
        )
        .route("/api/v1/translate", post(recommend::handle_translate))
        .with_state(state)
}
