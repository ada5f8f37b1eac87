//! Upstream error types.

/// Errors from the stationboard HTTP client.
///
/// The variants exist for logging. Callers of the resolver only ever see a
/// single "upstream unavailable" failure.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Request failed before a response arrived (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not a stationboard
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
