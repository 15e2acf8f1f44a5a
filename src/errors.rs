use crate::response::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, warn};

/// Caller errors raised by the engine. Everything else resolves to a defined default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Team size must be at least 1, got {0}")]
    InvalidTeamSize(i64),

    #[error("Project topic must not be blank")]
    BlankTopic,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String), // 400
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        warn!("Rejecting request due to engine error: {}", err);
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(message) => {
                debug!("Responding with 400 Bad Request: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
        };

        let body = ApiResponse::<()> {
            status_code: status.as_u16(),
            status_message: error_message,
            data: None,
        };

        (status, body).into_response()
    }
}
