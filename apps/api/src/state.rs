use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Caps concurrent assemblies across all in-flight batch requests.
    pub batch_limiter: Arc<Semaphore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let batch_limiter = Arc::new(Semaphore::new(config.batch_concurrency));
        Self {
            config,
            batch_limiter,
        }
    }
}
