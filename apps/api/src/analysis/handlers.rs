//! Axum route handlers for the ATS analysis API.

use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::industry::{keywords_for, resolve_company, top_keywords_for, GENERAL};
use crate::analysis::report::{analyze_resume, AtsAnalysis};
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRequest {
    pub resume_data: ResumeRecord,
    pub job_description: Option<String>,
    pub selected_company: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryKeywordsResponse {
    pub company: String,
    pub keywords: Vec<String>,
    pub top_keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Scores the posted resume against the selected company profile and the
/// optional job description. Degraded input never fails; sparse resumes
/// simply score low.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AtsAnalysis>, AppError> {
    let company = request.selected_company.as_deref().unwrap_or(GENERAL);
    let analysis = analyze_resume(
        &request.resume_data,
        request.job_description.as_deref(),
        company,
    );

    Ok(Json(analysis))
}

/// GET /api/v1/industries/:company/keywords
///
/// Returns the keyword catalog for a company. Unknown identifiers resolve
/// to the general profile; the response echoes the resolved identifier.
pub async fn handle_industry_keywords(
    Path(company): Path<String>,
) -> Result<Json<IndustryKeywordsResponse>, AppError> {
    let resolved = resolve_company(&company);
    Ok(Json(IndustryKeywordsResponse {
        company: resolved.to_string(),
        keywords: keywords_for(resolved)
            .iter()
            .map(|kw| (*kw).to_string())
            .collect(),
        top_keywords: top_keywords_for(resolved)
            .iter()
            .map(|kw| (*kw).to_string())
            .collect(),
    }))
}
