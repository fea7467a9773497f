use std::sync::Arc;

use crate::pathway::context::PathwayContext;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Reference data and embedding collaborators, loaded once at startup.
    pub pathway: Arc<PathwayContext>,
}
