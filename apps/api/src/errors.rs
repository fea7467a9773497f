use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pathway::error::PathwayError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Pathway(#[from] PathwayError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Pathway(PathwayError::NotFound(title)) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Job title not found: {title}"),
            ),
            AppError::Pathway(e @ PathwayError::EmptyTier { .. }) => {
                tracing::warn!("Pathway rejected: {e}");
                (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_TIER", e.to_string())
            }
            AppError::Pathway(PathwayError::UpstreamUnavailable(msg)) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_UNAVAILABLE",
                    "The embedding service is unavailable".to_string(),
                )
            }
            AppError::Pathway(e) => {
                tracing::error!("Pathway error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathway::tiers::Tier;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::from(PathwayError::NotFound("Astronauts".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_empty_tier_maps_to_422() {
        let err = PathwayError::EmptyTier {
            tier: Tier::Foundational,
            dependent: Tier::Medium,
        };
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_upstream_maps_to_502() {
        let err = PathwayError::UpstreamUnavailable("connection refused".to_string());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("empty title".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
