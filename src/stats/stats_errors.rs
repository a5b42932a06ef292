use thiserror::Error;

use crate::allocations::AllocationError;
use crate::movements::MovementError;

/// Custom error type for statistics aggregation
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Allocation error: {0}")]
    Allocation(#[from] AllocationError),
    #[error("Movement error: {0}")]
    Movement(#[from] MovementError),
}

/// Result type for statistics operations
pub type Result<T> = std::result::Result<T, StatsError>;
