use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::allocations::{Allocation, AllocationDto};
use crate::api::{ApiClient, ApiError};

use super::clients_errors::{ClientError, Result};
use super::clients_model::{
    Client, ClientDto, ClientUpdate, ClientWithAssets, NewClient, NewClientDto,
};
use super::clients_traits::ClientServiceTrait;

/// Live client service backed by the HTTP API
pub struct ClientService {
    api: Arc<ApiClient>,
}

impl ClientService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn map_not_found(client_id: &str, err: ApiError) -> ClientError {
        match err {
            ApiError::Http { status: 404, .. } => ClientError::NotFound(client_id.to_string()),
            other => ClientError::Api(other),
        }
    }
}

#[async_trait]
impl ClientServiceTrait for ClientService {
    async fn get_clients(&self) -> Result<Vec<Client>> {
        let dtos: Vec<ClientDto> = self.api.get("/clients").await?;
        Ok(dtos.into_iter().map(Client::from).collect())
    }

    async fn get_client(&self, client_id: &str) -> Result<Client> {
        let dto: ClientDto = self
            .api
            .get(&format!("/clients/{}", client_id))
            .await
            .map_err(|e| Self::map_not_found(client_id, e))?;
        Ok(Client::from(dto))
    }

    async fn get_client_with_assets(&self, client_id: &str) -> Result<ClientWithAssets> {
        let client = self.get_client(client_id).await?;
        let dtos: Vec<AllocationDto> = self
            .api
            .get(&format!("/allocations/client/{}", client_id))
            .await?;
        let allocations = dtos.into_iter().map(Allocation::from).collect();
        Ok(ClientWithAssets {
            client,
            allocations,
        })
    }

    async fn create_client(&self, new_client: NewClient) -> Result<Client> {
        new_client.validate()?;
        let payload = NewClientDto::from(&new_client);
        let dto: ClientDto = self.api.post("/clients", &payload).await?;
        debug!("Created client {}", dto.id);
        Ok(Client::from(dto))
    }

    async fn update_client(&self, client_id: &str, update: ClientUpdate) -> Result<Client> {
        let dto: ClientDto = self
            .api
            .put(&format!("/clients/{}", client_id), &update)
            .await
            .map_err(|e| Self::map_not_found(client_id, e))?;
        Ok(Client::from(dto))
    }

    async fn delete_client(&self, client_id: &str) -> Result<()> {
        self.api
            .delete(&format!("/clients/{}", client_id))
            .await
            .map_err(|e| Self::map_not_found(client_id, e))
    }
}
