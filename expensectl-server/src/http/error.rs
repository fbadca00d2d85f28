//! API error types with IntoResponse
//!
//! Every failure becomes `{"message": "..."}` with a 400, 404 or 500 status.
//! This is the only place a failure kind is mapped to a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::{ExpenseId, ValidationError};

/// Message returned for any lookup or update of a missing expense
pub const NOT_FOUND_MESSAGE: &str = "expenses not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body, invalid field or bad route id (400)
    Validation(ValidationError),

    /// No row with this id (404)
    NotFound { id: ExpenseId },

    /// Store failure (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { id } => {
                tracing::debug!(id, "expense not found");
                NOT_FOUND_MESSAGE.to_owned()
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                e.to_string()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                message
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id } => Self::NotFound { id },
            _ => Self::Database(e),
        }
    }
}
