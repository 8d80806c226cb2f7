/// Suggestion pipeline — the single point of entry for AI-suggestion calls.
///
/// ARCHITECTURAL RULE: no other module may call the suggestion webhook
/// directly. All outbound suggestion traffic goes through this module, and
/// every failure path degrades to the deterministic local fallback
/// (`fallback::generate_fallback_suggestions`) rather than surfacing an
/// error to the UI.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::resume::ResumeRecord;

pub mod fallback;
pub mod handlers;

const WEBHOOK_TIMEOUT_SECS: u64 = 10;

/// Suggestion category, mirrored from the webhook contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Improvement,
    Warning,
    Tip,
}

/// Resume section a suggestion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSection {
    Summary,
    Experience,
    Education,
    Skills,
    General,
}

/// One actionable suggestion, webhook-shaped: the local fallback produces
/// the same structure so the UI renders both identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub section: SuggestionSection,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook returned status {0}")]
    Status(u16),

    #[error("webhook returned an empty suggestion list")]
    Empty,

    #[error("no webhook URL configured")]
    NotConfigured,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookRequest<'a> {
    resume_data: &'a ResumeRecord,
    selected_company: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_section: Option<&'a str>,
}

/// The suggestion backend seam. Carried in `AppState` as
/// `Arc<dyn SuggestionProvider>` so backends can be swapped without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn fetch(
        &self,
        resume: &ResumeRecord,
        company: &str,
        active_section: Option<&str>,
    ) -> Result<Vec<Suggestion>, SuggestionError>;
}

/// Default backend: a single POST to the configured webhook. No retries —
/// the caller's fallback is the recovery path.
pub struct WebhookSuggestionClient {
    client: Client,
    url: Option<String>,
}

impl WebhookSuggestionClient {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(WEBHOOK_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }
}

#[async_trait]
impl SuggestionProvider for WebhookSuggestionClient {
    async fn fetch(
        &self,
        resume: &ResumeRecord,
        company: &str,
        active_section: Option<&str>,
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        let url = self.url.as_deref().ok_or(SuggestionError::NotConfigured)?;

        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(&WebhookRequest {
                resume_data: resume,
                selected_company: company,
                active_section,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestionError::Status(status.as_u16()));
        }

        let suggestions: Vec<Suggestion> = response.json().await?;
        if suggestions.is_empty() {
            return Err(SuggestionError::Empty);
        }

        debug!(count = suggestions.len(), "webhook suggestions received");
        Ok(suggestions)
    }
}
