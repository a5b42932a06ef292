use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::api::{ApiClient, ApiError};

use super::movements_errors::{MovementError, Result};
use super::movements_model::{
    ClientBalance, ClientBalanceDto, Movement, MovementDto, MovementUpdate, NewMovement,
    NewMovementDto,
};
use super::movements_traits::MovementServiceTrait;

/// Live movement service backed by the HTTP API
pub struct MovementService {
    api: Arc<ApiClient>,
}

impl MovementService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn map_not_found(id: &str, err: ApiError) -> MovementError {
        match err {
            ApiError::Http { status: 404, .. } => MovementError::NotFound(id.to_string()),
            other => MovementError::Api(other),
        }
    }
}

#[async_trait]
impl MovementServiceTrait for MovementService {
    async fn get_movements(&self) -> Result<Vec<Movement>> {
        let dtos: Vec<MovementDto> = self.api.get("/movements").await?;
        Ok(dtos.into_iter().map(Movement::from).collect())
    }

    async fn get_client_movements(&self, client_id: &str, limit: usize) -> Result<Vec<Movement>> {
        let dtos: Vec<MovementDto> = self
            .api
            .get(&format!("/clients/{}/movements?limit={}", client_id, limit))
            .await?;
        Ok(dtos.into_iter().map(Movement::from).collect())
    }

    async fn create_movement(&self, new_movement: NewMovement) -> Result<Movement> {
        new_movement.validate()?;
        let payload = NewMovementDto::from(&new_movement);
        let dto: MovementDto = self.api.post("/movements", &payload).await?;
        debug!(
            "Created {} movement {} for client {}",
            new_movement.movement_type.as_str(),
            dto.id,
            new_movement.client_id
        );
        Ok(Movement::from(dto))
    }

    async fn update_movement(&self, movement_id: &str, update: MovementUpdate) -> Result<Movement> {
        let dto: MovementDto = self
            .api
            .put(&format!("/movements/{}", movement_id), &update)
            .await
            .map_err(|e| Self::map_not_found(movement_id, e))?;
        Ok(Movement::from(dto))
    }

    async fn delete_movement(&self, movement_id: &str) -> Result<()> {
        self.api
            .delete(&format!("/movements/{}", movement_id))
            .await
            .map_err(|e| Self::map_not_found(movement_id, e))
    }

    async fn get_client_balance(&self, client_id: &str) -> Result<ClientBalance> {
        let dto: ClientBalanceDto = self
            .api
            .get(&format!("/clients/{}/balance", client_id))
            .await
            .map_err(|e| Self::map_not_found(client_id, e))?;
        Ok(ClientBalance::from(dto))
    }
}
