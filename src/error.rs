use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub const SIMULATED_ERROR_MESSAGE: &str =
    "Error simulation is enabled for canary rollback testing";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Simulated Error")]
    SimulatedError,

    #[error("Missing vote field in submission")]
    MalformedSubmission,

    #[error("Queue unavailable: {0}")]
    QueueUnavailable(#[from] redis::RedisError),

    #[error("Internal error: {0}")]
    Internal(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::SimulatedError => {
                error!("SIMULATED ERROR: error simulation is ON");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Simulated Error",
                        "message": SIMULATED_ERROR_MESSAGE,
                    })),
                )
                    .into_response()
            }

            AppError::MalformedSubmission => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }

            err @ (AppError::QueueUnavailable(_) | AppError::Internal(_)) => {
                error!("{err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
