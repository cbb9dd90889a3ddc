use std::sync::Arc;

use crate::config::Config;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read path for resumes. Default: `PgResumeStore`.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
}
