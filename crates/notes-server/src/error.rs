//! API error types.
//!
//! Every failure the API reports is a `400 Bad Request` with an empty body,
//! whether the request was malformed or the note does not exist. The variants
//! stay distinct so logs can tell the two apart.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_core::NoteId;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body or path failed validation.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Target note does not exist.
    #[error("note not found: {0}")]
    NotFound(NoteId),

    /// Store rejected the operation.
    #[error("storage error: {0}")]
    Store(#[from] notes_store::StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::NotFound(_) => StatusCode::BAD_REQUEST,
            Self::Store(e) => match e {
                notes_store::StoreError::EmptyContent => StatusCode::BAD_REQUEST,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), error = %self, "Request rejected");
        self.status_code().into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
