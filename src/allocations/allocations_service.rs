use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::api::{ApiClient, ApiError};

use super::allocations_errors::{AllocationError, Result};
use super::allocations_model::{
    Allocation, AllocationDto, AllocationUpdate, NewAllocation, NewAllocationDto,
};
use super::allocations_traits::AllocationServiceTrait;

/// Live allocation service backed by the HTTP API
pub struct AllocationService {
    api: Arc<ApiClient>,
}

impl AllocationService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn map_not_found(allocation_id: &str, err: ApiError) -> AllocationError {
        match err {
            ApiError::Http { status: 404, .. } => {
                AllocationError::NotFound(allocation_id.to_string())
            }
            other => AllocationError::Api(other),
        }
    }
}

#[async_trait]
impl AllocationServiceTrait for AllocationService {
    async fn get_allocations(&self) -> Result<Vec<Allocation>> {
        let dtos: Vec<AllocationDto> = self.api.get("/allocations").await?;
        Ok(dtos.into_iter().map(Allocation::from).collect())
    }

    async fn get_client_allocations(&self, client_id: &str) -> Result<Vec<Allocation>> {
        let dtos: Vec<AllocationDto> = self
            .api
            .get(&format!("/allocations/client/{}", client_id))
            .await?;
        Ok(dtos.into_iter().map(Allocation::from).collect())
    }

    async fn create_allocation(&self, new_allocation: NewAllocation) -> Result<Allocation> {
        new_allocation.validate()?;
        let payload = NewAllocationDto::from(&new_allocation);
        let dto: AllocationDto = self.api.post("/allocations", &payload).await?;
        debug!(
            "Created allocation {} for client {}",
            dto.id, new_allocation.client_id
        );
        Ok(Allocation::from(dto))
    }

    async fn update_allocation(
        &self,
        allocation_id: &str,
        update: AllocationUpdate,
    ) -> Result<Allocation> {
        let dto: AllocationDto = self
            .api
            .put(&format!("/allocations/{}", allocation_id), &update)
            .await
            .map_err(|e| Self::map_not_found(allocation_id, e))?;
        Ok(Allocation::from(dto))
    }

    async fn delete_allocation(&self, allocation_id: &str) -> Result<()> {
        self.api
            .delete(&format!("/allocations/{}", allocation_id))
            .await
            .map_err(|e| Self::map_not_found(allocation_id, e))
    }
}
