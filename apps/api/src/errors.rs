use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::models::plan::ActionItemStatus;

/// Conditions the engine signals to its caller. Remote-service failures are
/// not in here: they are absorbed by the narrative pipeline's fallback.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Invalid grid coordinate ({x}, {y}): both axes must be 1, 2 or 3")]
    InvalidCoordinate { x: i64, y: i64 },

    #[error("Action item cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        from: ActionItemStatus,
        to: ActionItemStatus,
    },

    #[error("Action item {0} not found in plan")]
    ActionItemNotFound(Uuid),

    #[error("An analysis is already running for employee {0}")]
    AnalysisInFlight(Uuid),

    #[error("Analysis for employee {0} was cancelled")]
    AnalysisCancelled(Uuid),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Engine(e) => match e {
                EngineError::InvalidCoordinate { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_COORDINATE", e.to_string())
                }
                EngineError::InvalidTransition { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_TRANSITION",
                    e.to_string(),
                ),
                EngineError::ActionItemNotFound(_) => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", e.to_string())
                }
                EngineError::AnalysisInFlight(_) => {
                    (StatusCode::CONFLICT, "ANALYSIS_IN_FLIGHT", e.to_string())
                }
                EngineError::AnalysisCancelled(_) => {
                    tracing::info!("{e}");
                    (StatusCode::CONFLICT, "ANALYSIS_CANCELLED", e.to_string())
                }
            },
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

    #[test]
    fn test_invalid_coordinate_maps_to_bad_request() {
        let response =
            AppError::from(EngineError::InvalidCoordinate { x: 4, y: 1 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_in_flight_maps_to_conflict() {
        let response =
            AppError::from(EngineError::AnalysisInFlight(Uuid::new_v4())).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_hides_details() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
