//! HTTP error mapping.
//!
//! Only two outcomes reach a client: 404 for a missing id and 400 for
//! everything else. Malformed input and internal faults are not told apart
//! in the status code; the body text is the only difference.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_core::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Like `From<StoreError>`, but create failures report internal faults
    /// with the bare message and no `Internal error: ` prefix.
    pub fn from_create(err: StoreError) -> Self {
        match err {
            StoreError::Poisoned => ApiError::BadRequest(err.to_string()),
            other => other.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "request failed");
        (status, self.to_string()).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::Validation(msg) => ApiError::BadRequest(msg),
            StoreError::Poisoned => ApiError::BadRequest(format!("Internal error: {err}")),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
