//! Request DTOs for the station API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query string of the listing endpoint (GET /?page=&limit=)
///
/// # Fields
/// - `page`: 1-based page number (defaults to 1)
/// - `limit`: Page size (defaults to the configured page size)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.page == Some(0) {
            return Some("page must be at least 1".to_string());
        }
        if self.limit == Some(0) {
            return Some("limit must be at least 1".to_string());
        }
        None
    }
}
