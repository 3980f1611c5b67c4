use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request validation failures. Both kinds are reported to the caller as a
/// 400 with the display text as a plain-text body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A submitted item is missing one or more required fields.
    #[error("invalid parameters")]
    InvalidItem,

    /// The `row` value is missing, not a number, or outside the inventory.
    #[error("invalid row number")]
    InvalidRow,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidItem | AppError::InvalidRow => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
