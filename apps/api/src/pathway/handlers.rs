//! Axum route handlers for the Pathway API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info_span;
use uuid::Uuid;

use crate::errors::AppError;
use crate::pathway::export::PathwayExport;
use crate::pathway::pipeline::build_pathway;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<String>,
    pub count: usize,
}

/// GET /jobs
///
/// Every occupation title a pathway can start or end at, in catalog order.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobsResponse> {
    let jobs: Vec<String> = state
        .pathway
        .data
        .occupations
        .titles()
        .into_iter()
        .map(str::to_string)
        .collect();
    let count = jobs.len();
    Json(JobsResponse { jobs, count })
}

/// GET /pathway/:current/:target
///
/// Synthesizes the skill tree leading from the current occupation to the target one.
/// The computation is CPU/IO bound and runs on the blocking pool, one worker per request.
pub async fn handle_get_pathway(
    State(state): State<AppState>,
    Path((current, target)): Path<(String, String)>,
) -> Result<Json<PathwayExport>, AppError> {
    if current.trim().is_empty() || target.trim().is_empty() {
        return Err(AppError::Validation(
            "Both current and target job titles are required".to_string(),
        ));
    }

    let ctx = Arc::clone(&state.pathway);
    let span = info_span!("pathway", request_id = %Uuid::new_v4(), %current, %target);

    let export = tokio::task::spawn_blocking(move || {
        let _guard = span.enter();
        build_pathway(&ctx, &current, &target)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("pathway worker failed: {e}")))??;

    Ok(Json(export))
}
