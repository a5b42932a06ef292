pub(crate) mod movements_errors;
pub(crate) mod movements_model;
pub(crate) mod movements_service;
pub(crate) mod movements_traits;

// Re-export the public interface
pub use movements_model::{
    BankDetails, ClientBalance, Movement, MovementDto, MovementStatus, MovementType,
    MovementUpdate, NewMovement,
};
pub use movements_service::MovementService;
pub use movements_traits::MovementServiceTrait;

// Re-export error types for convenience
pub use movements_errors::{MovementError, Result};
