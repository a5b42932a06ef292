pub(crate) mod clients_errors;
pub(crate) mod clients_model;
pub(crate) mod clients_service;
pub(crate) mod clients_traits;

// Re-export the public interface
pub use clients_model::{
    Address, Client, ClientDto, ClientStatus, ClientUpdate, ClientWithAssets, ExperienceLevel,
    InvestmentProfile, NewClient, DEFAULT_RISK_TOLERANCE,
};
pub use clients_service::ClientService;
pub use clients_traits::ClientServiceTrait;

// Re-export error types for convenience
pub use clients_errors::{ClientError, Result};
