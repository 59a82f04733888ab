use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::models::TodoId;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            Self::Persistence(cause) => {
                tracing::error!(%cause, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to persist todos".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
