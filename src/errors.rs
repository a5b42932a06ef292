use thiserror::Error;

use crate::allocations::AllocationError;
use crate::api::ApiError;
use crate::assets::AssetError;
use crate::clients::ClientError;
use crate::movements::MovementError;
use crate::stats::StatsError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application core
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Client operation failed: {0}")]
    Client(#[from] ClientError),

    #[error("Asset operation failed: {0}")]
    Asset(#[from] AssetError),

    #[error("Allocation operation failed: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Movement operation failed: {0}")]
    Movement(#[from] MovementError),

    #[error("Statistics computation failed: {0}")]
    Stats(#[from] StatsError),
}
