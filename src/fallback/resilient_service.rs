//! Entity services that degrade gracefully: try the live backend while the
//! availability gate allows it, downgrade on unavailability and serve the
//! demo implementation instead. Only transport-class failures are absorbed;
//! validation rejections, auth failures and mock-side errors (e.g.
//! NotFound) still reach the caller.

use async_trait::async_trait;
use log::warn;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use crate::allocations::{
    Allocation, AllocationError, AllocationServiceTrait, AllocationUpdate, NewAllocation,
};
use crate::assets::{
    Asset, AssetError, AssetServiceTrait, AssetUpdate, NewAsset, SymbolSearchResult,
};
use crate::clients::{
    Client, ClientError, ClientServiceTrait, ClientUpdate, ClientWithAssets, NewClient,
};
use crate::movements::{
    ClientBalance, Movement, MovementError, MovementServiceTrait, MovementUpdate, NewMovement,
};

use super::availability::AvailabilityGate;

/// Service error that can tell backend unavailability apart from a
/// meaningful rejection of the request.
pub(crate) trait FallbackError: Display {
    fn is_unavailable(&self) -> bool;
}

impl FallbackError for ClientError {
    fn is_unavailable(&self) -> bool {
        ClientError::is_unavailable(self)
    }
}

impl FallbackError for AssetError {
    fn is_unavailable(&self) -> bool {
        AssetError::is_unavailable(self)
    }
}

impl FallbackError for AllocationError {
    fn is_unavailable(&self) -> bool {
        AllocationError::is_unavailable(self)
    }
}

impl FallbackError for MovementError {
    fn is_unavailable(&self) -> bool {
        MovementError::is_unavailable(self)
    }
}

/// Runs the live future while the gate allows it. Unavailability errors
/// downgrade the gate and fall through to the mock future; any other live
/// error (validation rejections, not-found, auth) propagates unchanged.
async fn try_with_fallback<T, E, L, M>(
    gate: &AvailabilityGate,
    operation: &str,
    live: L,
    mock: M,
) -> Result<T, E>
where
    E: FallbackError,
    L: Future<Output = Result<T, E>>,
    M: Future<Output = Result<T, E>>,
{
    if gate.ensure().await {
        match live.await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_unavailable() => {
                warn!("{} failed on live backend, serving demo data: {}", operation, e);
                gate.downgrade().await;
            }
            Err(e) => return Err(e),
        }
    }
    mock.await
}

pub struct ResilientClientService {
    live: Arc<dyn ClientServiceTrait>,
    mock: Arc<dyn ClientServiceTrait>,
    gate: Arc<AvailabilityGate>,
}

impl ResilientClientService {
    pub fn new(
        live: Arc<dyn ClientServiceTrait>,
        mock: Arc<dyn ClientServiceTrait>,
        gate: Arc<AvailabilityGate>,
    ) -> Self {
        Self { live, mock, gate }
    }

    pub async fn is_demo_mode(&self) -> bool {
        self.gate.is_demo_mode().await
    }
}

#[async_trait]
impl ClientServiceTrait for ResilientClientService {
    async fn get_clients(&self) -> Result<Vec<Client>, ClientError> {
        try_with_fallback(
            &self.gate,
            "get_clients",
            self.live.get_clients(),
            self.mock.get_clients(),
        )
        .await
    }

    async fn get_client(&self, client_id: &str) -> Result<Client, ClientError> {
        try_with_fallback(
            &self.gate,
            "get_client",
            self.live.get_client(client_id),
            self.mock.get_client(client_id),
        )
        .await
    }

    async fn get_client_with_assets(
        &self,
        client_id: &str,
    ) -> Result<ClientWithAssets, ClientError> {
        try_with_fallback(
            &self.gate,
            "get_client_with_assets",
            self.live.get_client_with_assets(client_id),
            self.mock.get_client_with_assets(client_id),
        )
        .await
    }

    async fn create_client(&self, new_client: NewClient) -> Result<Client, ClientError> {
        try_with_fallback(
            &self.gate,
            "create_client",
            self.live.create_client(new_client.clone()),
            self.mock.create_client(new_client),
        )
        .await
    }

    async fn update_client(
        &self,
        client_id: &str,
        update: ClientUpdate,
    ) -> Result<Client, ClientError> {
        try_with_fallback(
            &self.gate,
            "update_client",
            self.live.update_client(client_id, update.clone()),
            self.mock.update_client(client_id, update),
        )
        .await
    }

    async fn delete_client(&self, client_id: &str) -> Result<(), ClientError> {
        try_with_fallback(
            &self.gate,
            "delete_client",
            self.live.delete_client(client_id),
            self.mock.delete_client(client_id),
        )
        .await
    }
}

pub struct ResilientAssetService {
    live: Arc<dyn AssetServiceTrait>,
    mock: Arc<dyn AssetServiceTrait>,
    gate: Arc<AvailabilityGate>,
}

impl ResilientAssetService {
    pub fn new(
        live: Arc<dyn AssetServiceTrait>,
        mock: Arc<dyn AssetServiceTrait>,
        gate: Arc<AvailabilityGate>,
    ) -> Self {
        Self { live, mock, gate }
    }

    pub async fn is_demo_mode(&self) -> bool {
        self.gate.is_demo_mode().await
    }
}

#[async_trait]
impl AssetServiceTrait for ResilientAssetService {
    async fn get_assets(&self) -> Result<Vec<Asset>, AssetError> {
        try_with_fallback(
            &self.gate,
            "get_assets",
            self.live.get_assets(),
            self.mock.get_assets(),
        )
        .await
    }

    async fn get_asset(&self, asset_id: &str) -> Result<Asset, AssetError> {
        try_with_fallback(
            &self.gate,
            "get_asset",
            self.live.get_asset(asset_id),
            self.mock.get_asset(asset_id),
        )
        .await
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset, AssetError> {
        try_with_fallback(
            &self.gate,
            "create_asset",
            self.live.create_asset(new_asset.clone()),
            self.mock.create_asset(new_asset),
        )
        .await
    }

    async fn update_asset(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset, AssetError> {
        try_with_fallback(
            &self.gate,
            "update_asset",
            self.live.update_asset(asset_id, update.clone()),
            self.mock.update_asset(asset_id, update),
        )
        .await
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<(), AssetError> {
        try_with_fallback(
            &self.gate,
            "delete_asset",
            self.live.delete_asset(asset_id),
            self.mock.delete_asset(asset_id),
        )
        .await
    }

    async fn search_yahoo(&self, symbol: &str) -> Result<Vec<SymbolSearchResult>, AssetError> {
        try_with_fallback(
            &self.gate,
            "search_yahoo",
            self.live.search_yahoo(symbol),
            self.mock.search_yahoo(symbol),
        )
        .await
    }

    async fn create_from_yahoo(&self, symbol: &str) -> Result<Asset, AssetError> {
        try_with_fallback(
            &self.gate,
            "create_from_yahoo",
            self.live.create_from_yahoo(symbol),
            self.mock.create_from_yahoo(symbol),
        )
        .await
    }
}

pub struct ResilientAllocationService {
    live: Arc<dyn AllocationServiceTrait>,
    mock: Arc<dyn AllocationServiceTrait>,
    gate: Arc<AvailabilityGate>,
}

impl ResilientAllocationService {
    pub fn new(
        live: Arc<dyn AllocationServiceTrait>,
        mock: Arc<dyn AllocationServiceTrait>,
        gate: Arc<AvailabilityGate>,
    ) -> Self {
        Self { live, mock, gate }
    }

    pub async fn is_demo_mode(&self) -> bool {
        self.gate.is_demo_mode().await
    }
}

#[async_trait]
impl AllocationServiceTrait for ResilientAllocationService {
    async fn get_allocations(&self) -> Result<Vec<Allocation>, AllocationError> {
        try_with_fallback(
            &self.gate,
            "get_allocations",
            self.live.get_allocations(),
            self.mock.get_allocations(),
        )
        .await
    }

    async fn get_client_allocations(
        &self,
        client_id: &str,
    ) -> Result<Vec<Allocation>, AllocationError> {
        try_with_fallback(
            &self.gate,
            "get_client_allocations",
            self.live.get_client_allocations(client_id),
            self.mock.get_client_allocations(client_id),
        )
        .await
    }

    async fn create_allocation(
        &self,
        new_allocation: NewAllocation,
    ) -> Result<Allocation, AllocationError> {
        try_with_fallback(
            &self.gate,
            "create_allocation",
            self.live.create_allocation(new_allocation.clone()),
            self.mock.create_allocation(new_allocation),
        )
        .await
    }

    async fn update_allocation(
        &self,
        allocation_id: &str,
        update: AllocationUpdate,
    ) -> Result<Allocation, AllocationError> {
        try_with_fallback(
            &self.gate,
            "update_allocation",
            self.live.update_allocation(allocation_id, update.clone()),
            self.mock.update_allocation(allocation_id, update),
        )
        .await
    }

    async fn delete_allocation(&self, allocation_id: &str) -> Result<(), AllocationError> {
        try_with_fallback(
            &self.gate,
            "delete_allocation",
            self.live.delete_allocation(allocation_id),
            self.mock.delete_allocation(allocation_id),
        )
        .await
    }
}

pub struct ResilientMovementService {
    live: Arc<dyn MovementServiceTrait>,
    mock: Arc<dyn MovementServiceTrait>,
    gate: Arc<AvailabilityGate>,
}

impl ResilientMovementService {
    pub fn new(
        live: Arc<dyn MovementServiceTrait>,
        mock: Arc<dyn MovementServiceTrait>,
        gate: Arc<AvailabilityGate>,
    ) -> Self {
        Self { live, mock, gate }
    }

    pub async fn is_demo_mode(&self) -> bool {
        self.gate.is_demo_mode().await
    }
}

#[async_trait]
impl MovementServiceTrait for ResilientMovementService {
    async fn get_movements(&self) -> Result<Vec<Movement>, MovementError> {
        try_with_fallback(
            &self.gate,
            "get_movements",
            self.live.get_movements(),
            self.mock.get_movements(),
        )
        .await
    }

    async fn get_client_movements(
        &self,
        client_id: &str,
        limit: usize,
    ) -> Result<Vec<Movement>, MovementError> {
        try_with_fallback(
            &self.gate,
            "get_client_movements",
            self.live.get_client_movements(client_id, limit),
            self.mock.get_client_movements(client_id, limit),
        )
        .await
    }

    async fn create_movement(&self, new_movement: NewMovement) -> Result<Movement, MovementError> {
        try_with_fallback(
            &self.gate,
            "create_movement",
            self.live.create_movement(new_movement.clone()),
            self.mock.create_movement(new_movement),
        )
        .await
    }

    async fn update_movement(
        &self,
        movement_id: &str,
        update: MovementUpdate,
    ) -> Result<Movement, MovementError> {
        try_with_fallback(
            &self.gate,
            "update_movement",
            self.live.update_movement(movement_id, update.clone()),
            self.mock.update_movement(movement_id, update),
        )
        .await
    }

    async fn delete_movement(&self, movement_id: &str) -> Result<(), MovementError> {
        try_with_fallback(
            &self.gate,
            "delete_movement",
            self.live.delete_movement(movement_id),
            self.mock.delete_movement(movement_id),
        )
        .await
    }

    async fn get_client_balance(&self, client_id: &str) -> Result<ClientBalance, MovementError> {
        try_with_fallback(
            &self.gate,
            "get_client_balance",
            self.live.get_client_balance(client_id),
            self.mock.get_client_balance(client_id),
        )
        .await
    }
}
