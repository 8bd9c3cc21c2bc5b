use std::sync::Arc;

use crate::config::Config;
use crate::screening::pipeline::Screener;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the embedding model, loaded once at startup and read-only afterwards.
    pub screener: Arc<Screener>,
}
