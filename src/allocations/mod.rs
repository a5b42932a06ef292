pub(crate) mod allocations_errors;
pub(crate) mod allocations_model;
pub(crate) mod allocations_service;
pub(crate) mod allocations_traits;

// Re-export the public interface
pub use allocations_model::{Allocation, AllocationDto, AllocationUpdate, NewAllocation};
pub use allocations_service::AllocationService;
pub use allocations_traits::AllocationServiceTrait;

// Re-export error types for convenience
pub use allocations_errors::{AllocationError, Result};
