use super::clients_model::{Client, ClientUpdate, ClientWithAssets, NewClient};
use super::clients_errors::Result;

/// Trait defining the contract for client service operations.
#[async_trait::async_trait]
pub trait ClientServiceTrait: Send + Sync {
    async fn get_clients(&self) -> Result<Vec<Client>>;
    async fn get_client(&self, client_id: &str) -> Result<Client>;
    async fn get_client_with_assets(&self, client_id: &str) -> Result<ClientWithAssets>;
    async fn create_client(&self, new_client: NewClient) -> Result<Client>;
    async fn update_client(&self, client_id: &str, update: ClientUpdate) -> Result<Client>;
    async fn delete_client(&self, client_id: &str) -> Result<()>;
}
