pub(crate) mod availability;
pub(crate) mod mock_data;
pub(crate) mod mock_service;
pub(crate) mod resilient_service;

// Re-export the public interface
pub use availability::{Availability, AvailabilityGate, HealthProbe};
pub use mock_service::{
    MockAllocationService, MockAssetService, MockClientService, MockMovementService,
};
pub use resilient_service::{
    ResilientAllocationService, ResilientAssetService, ResilientClientService,
    ResilientMovementService,
};
