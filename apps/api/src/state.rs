use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::lookup::ProfileSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable profile source. Default: the hosted lookup API client.
    pub lookup: Arc<dyn ProfileSource>,
    #[allow(dead_code)]
    pub config: Config,
}
