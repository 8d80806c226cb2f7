//! Axum route handlers for the Suggestions API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::industry::GENERAL;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;
use crate::suggestions::fallback::generate_fallback_suggestions;
use crate::suggestions::Suggestion;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestRequest {
    pub resume_data: ResumeRecord,
    pub selected_company: Option<String>,
    pub active_section: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
    /// True when the webhook was unavailable and the local fallback was
    /// used. Informational only — never an error.
    pub offline: bool,
}

/// POST /api/v1/suggestions
///
/// Proxies the AI-suggestion webhook; any failure (unreachable, non-2xx,
/// malformed or empty body, unconfigured) switches to the local fallback.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let company = request.selected_company.as_deref().unwrap_or(GENERAL);

    match state
        .suggestions
        .fetch(
            &request.resume_data,
            company,
            request.active_section.as_deref(),
        )
        .await
    {
        Ok(suggestions) => Ok(Json(SuggestResponse {
            suggestions,
            offline: false,
        })),
        Err(err) => {
            warn!("suggestion webhook unavailable, using fallback: {err}");
            Ok(Json(SuggestResponse {
                suggestions: generate_fallback_suggestions(&request.resume_data, company),
                offline: true,
            }))
        }
    }
}
