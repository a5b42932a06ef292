use thiserror::Error;

/// Custom error type for HTTP API operations
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parsing error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Whether the error means the backend could not serve the request at
    /// all, as opposed to serving it and rejecting the input. Network
    /// failures, unreadable responses and 5xx statuses qualify; 4xx
    /// rejections and auth failures carry meaning for the caller.
    pub fn is_unavailable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Parse(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
            ApiError::Unauthorized => false,
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
