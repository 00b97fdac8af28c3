use std::sync::Arc;

use crate::assessment::analyst::ImpactAnalyst;
use crate::master_list::MasterList;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analysis backend. Production: `LlmImpactAnalyst` over the
    /// completion API; tests swap in mocks.
    pub analyst: Arc<dyn ImpactAnalyst>,
    /// Master document list, read-only after startup.
    pub master_list: Arc<MasterList>,
}
