use std::sync::Arc;

use crate::config::Config;
use crate::screening::scorer::RelevanceScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; nothing computed by a screening run is retained.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable relevance scorer. Default: TfidfScorer.
    pub scorer: Arc<dyn RelevanceScorer>,
}
