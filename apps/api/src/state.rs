use std::sync::Arc;

use crate::candidates::store::CandidateStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable candidate storage. Default: `InMemoryCandidateStore`.
    pub store: Arc<dyn CandidateStore>,
}
