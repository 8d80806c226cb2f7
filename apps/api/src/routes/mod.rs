pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS analysis API
        .route("/api/v1/ats/analyze", post(analysis::handle_analyze))
        .route(
            "/api/v1/industries/:company/keywords",
            get(analysis::handle_industry_keywords),
        )
        // Suggestions API (webhook with local fallback)
        .route("/api/v1/suggestions", post(suggestions::handle_suggestions))
        .with_state(state)
}
