use thiserror::Error;

use crate::api::ApiError;

/// Custom error type for client-related operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl ClientError {
    /// True when the underlying cause is backend unavailability rather
    /// than a rejection of the request itself.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClientError::Api(e) if e.is_unavailable())
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
