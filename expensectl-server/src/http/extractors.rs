//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{ExpenseDraft, ExpenseId, ValidationError};

/// Extract and parse an expense id from the path
pub struct ExpenseIdPath(pub ExpenseId);

impl<S> FromRequestParts<S> for ExpenseIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ValidationError::InvalidId { value: e.body_text() })?;

        let id = raw
            .parse::<ExpenseId>()
            .map_err(|_| ValidationError::InvalidId { value: raw })?;

        Ok(Self(id))
    }
}

/// Extract the request body as a validated expense candidate.
///
/// The body is read as raw bytes so decode failures come back as
/// `{"message": ...}` 400s instead of axum's plain-text JSON rejections.
pub struct ValidExpense(pub ExpenseDraft);

impl<S> FromRequest<S> for ValidExpense
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ValidationError::Malformed { reason: e.body_text() })?;

        Ok(Self(ExpenseDraft::from_json(&body)?))
    }
}
