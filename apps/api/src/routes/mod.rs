pub mod health;

use axum::{routing::get, Router};

use crate::pathway::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/jobs", get(handlers::handle_list_jobs))
        .route("/pathway/:current/:target", get(handlers::handle_get_pathway))
        .with_state(state)
}
