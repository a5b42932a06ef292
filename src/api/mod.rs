pub(crate) mod api_client;
pub(crate) mod api_config;
pub(crate) mod api_errors;
pub(crate) mod session;

// Re-export the public interface
pub use api_client::ApiClient;
pub use api_config::ApiConfig;
pub use session::Session;

// Re-export error types for convenience
pub use api_errors::{ApiError, Result};
