//! Application state for shared services

use std::sync::Arc;

use crate::domain::cache::Cache;
use crate::infrastructure::services::AdviceService;

/// Shared handles injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub advice_service: Arc<AdviceService>,
    /// Storage behind the advice cache, exposed for health reporting
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    pub fn new(advice_service: Arc<AdviceService>, cache: Arc<dyn Cache>) -> Self {
        Self {
            advice_service,
            cache,
        }
    }
}
