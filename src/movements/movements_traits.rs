use super::movements_errors::Result;
use super::movements_model::{ClientBalance, Movement, MovementUpdate, NewMovement};

/// Trait defining the contract for movement service operations.
#[async_trait::async_trait]
pub trait MovementServiceTrait: Send + Sync {
    async fn get_movements(&self) -> Result<Vec<Movement>>;
    async fn get_client_movements(&self, client_id: &str, limit: usize) -> Result<Vec<Movement>>;
    async fn create_movement(&self, new_movement: NewMovement) -> Result<Movement>;
    async fn update_movement(&self, movement_id: &str, update: MovementUpdate) -> Result<Movement>;
    async fn delete_movement(&self, movement_id: &str) -> Result<()>;
    async fn get_client_balance(&self, client_id: &str) -> Result<ClientBalance>;
}
