use thiserror::Error;

use crate::api::ApiError;

/// Custom error type for asset-related operations
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl AssetError {
    /// True when the underlying cause is backend unavailability rather
    /// than a rejection of the request itself.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AssetError::Api(e) if e.is_unavailable())
    }
}

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;
