use super::allocations_errors::Result;
use super::allocations_model::{Allocation, AllocationUpdate, NewAllocation};

/// Trait defining the contract for allocation service operations.
#[async_trait::async_trait]
pub trait AllocationServiceTrait: Send + Sync {
    async fn get_allocations(&self) -> Result<Vec<Allocation>>;
    async fn get_client_allocations(&self, client_id: &str) -> Result<Vec<Allocation>>;
    async fn create_allocation(&self, new_allocation: NewAllocation) -> Result<Allocation>;
    async fn update_allocation(
        &self,
        allocation_id: &str,
        update: AllocationUpdate,
    ) -> Result<Allocation>;
    async fn delete_allocation(&self, allocation_id: &str) -> Result<()>;
}
