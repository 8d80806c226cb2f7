use std::sync::Arc;

use crate::config::Config;
use crate::suggestions::SuggestionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable suggestion backend. Default: WebhookSuggestionClient; every
    /// failure degrades to the local fallback in the handler.
    pub suggestions: Arc<dyn SuggestionProvider>,
}
