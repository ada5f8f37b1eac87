//! Error types for the station API
//!
//! Provides unified HTTP error handling using thiserror. Error bodies are
//! plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::resolver::ResolveError;

// == App Error Enum ==
/// Unified error type for the HTTP surface.
#[derive(Error, Debug)]
pub enum AppError {
    /// Station id failed validation
    #[error("Invalid station ID")]
    InvalidIdentifier,

    /// Invalid listing query
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Departure data could not be fetched
    #[error("An error occurred")]
    UpstreamUnavailable,
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::InvalidIdentifier(_) => AppError::InvalidIdentifier,
            ResolveError::UpstreamUnavailable(_) => AppError::UpstreamUnavailable,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidIdentifier | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
