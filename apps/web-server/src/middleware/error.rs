//! Error handling - RFC 7807 shaped responses.
//!
//! There is deliberately no finer taxonomy: malformed uploads map to 400,
//! everything else (blob failures, table I/O, session serialization) to a
//! generic 500. Nothing is retried.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use focal_core::error::StoreError;
use focal_core::ports::{BlobError, ImageError};
use focal_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => AppError::BadRequest(msg),
            other => {
                tracing::error!("Record store error: {}", other);
                AppError::Internal("record store failure".to_string())
            }
        }
    }
}

impl From<BlobError> for AppError {
    fn from(err: BlobError) -> Self {
        tracing::error!("Blob store error: {}", err);
        AppError::Internal("blob store failure".to_string())
    }
}

impl From<ImageError> for AppError {
    fn from(err: ImageError) -> Self {
        // An upload the decoder cannot read is the client's problem
        AppError::BadRequest(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
