//! In-memory implementations of the entity service traits, seeded from the
//! demo datasets. They honor the same contracts as the live services so the
//! resilient wrappers can swap them in transparently.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::allocations::{
    Allocation, AllocationError, AllocationServiceTrait, AllocationUpdate, NewAllocation,
};
use crate::assets::{
    Asset, AssetError, AssetServiceTrait, AssetType, AssetUpdate, NewAsset, SymbolSearchResult,
};
use crate::clients::{
    Client, ClientError, ClientServiceTrait, ClientStatus, ClientUpdate, ClientWithAssets,
    ExperienceLevel, InvestmentProfile, NewClient, DEFAULT_RISK_TOLERANCE,
};
use crate::movements::{
    ClientBalance, Movement, MovementError, MovementServiceTrait, MovementStatus, MovementType,
    MovementUpdate, NewMovement,
};
use crate::utils::parsers::{parse_date, parse_decimal};

use super::mock_data;

fn mint_id() -> String {
    Uuid::new_v4().to_string()
}

pub struct MockClientService {
    clients: RwLock<Vec<Client>>,
    allocations: RwLock<Vec<Allocation>>,
}

impl MockClientService {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(mock_data::mock_clients()),
            allocations: RwLock::new(mock_data::mock_allocations()),
        }
    }
}

impl Default for MockClientService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientServiceTrait for MockClientService {
    async fn get_clients(&self) -> Result<Vec<Client>, ClientError> {
        Ok(self.clients.read().await.clone())
    }

    async fn get_client(&self, client_id: &str) -> Result<Client, ClientError> {
        self.clients
            .read()
            .await
            .iter()
            .find(|c| c.id == client_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(client_id.to_string()))
    }

    async fn get_client_with_assets(
        &self,
        client_id: &str,
    ) -> Result<ClientWithAssets, ClientError> {
        let client = self.get_client(client_id).await?;
        let allocations = self
            .allocations
            .read()
            .await
            .iter()
            .filter(|a| a.client_id == client_id)
            .cloned()
            .collect();
        Ok(ClientWithAssets {
            client,
            allocations,
        })
    }

    async fn create_client(&self, new_client: NewClient) -> Result<Client, ClientError> {
        new_client.validate()?;
        let now = Utc::now();
        let client = Client {
            id: mint_id(),
            name: new_client.name,
            cpf: new_client.cpf,
            email: new_client.email,
            phone: new_client.phone.unwrap_or_default(),
            mobile: new_client.mobile.unwrap_or_default(),
            whatsapp: new_client.whatsapp.unwrap_or_default(),
            address: new_client.address.unwrap_or_default(),
            investment_profile: new_client.investment_profile,
            risk_tolerance: new_client.risk_tolerance.unwrap_or(DEFAULT_RISK_TOLERANCE),
            experience_level: new_client.experience_level,
            monthly_income: new_client.monthly_income.unwrap_or_default(),
            net_worth: new_client.net_worth.unwrap_or_default(),
            tags: new_client.tags,
            notes: new_client.notes.unwrap_or_default(),
            status: new_client.status,
            created_at: Some(now),
            updated_at: Some(now),
            created_by: "demo".to_string(),
            last_contact_date: None,
        };
        self.clients.write().await.push(client.clone());
        Ok(client)
    }

    async fn update_client(
        &self,
        client_id: &str,
        update: ClientUpdate,
    ) -> Result<Client, ClientError> {
        let mut clients = self.clients.write().await;
        let client = clients
            .iter_mut()
            .find(|c| c.id == client_id)
            .ok_or_else(|| ClientError::NotFound(client_id.to_string()))?;
        if let Some(name) = update.name {
            client.name = name;
        }
        if let Some(cpf) = update.cpf {
            client.cpf = cpf;
        }
        if let Some(email) = update.email {
            client.email = email;
        }
        if let Some(phone) = update.phone {
            client.phone = phone;
        }
        if let Some(mobile) = update.mobile {
            client.mobile = mobile;
        }
        if let Some(whatsapp) = update.whatsapp {
            client.whatsapp = whatsapp;
        }
        if let Some(profile) = update.investment_profile.as_deref() {
            client.investment_profile = InvestmentProfile::from(profile);
        }
        if let Some(risk) = update.risk_tolerance {
            client.risk_tolerance = risk;
        }
        if let Some(level) = update.experience_level.as_deref() {
            client.experience_level = ExperienceLevel::from(level);
        }
        if update.monthly_income.is_some() {
            client.monthly_income = parse_decimal(update.monthly_income.as_deref());
        }
        if update.net_worth.is_some() {
            client.net_worth = parse_decimal(update.net_worth.as_deref());
        }
        if let Some(tags) = update.tags {
            client.tags = tags;
        }
        if let Some(notes) = update.notes {
            client.notes = notes;
        }
        if let Some(status) = update.status.as_deref() {
            client.status = ClientStatus::from(status);
        }
        if update.last_contact_date.is_some() {
            client.last_contact_date = parse_date(update.last_contact_date.as_deref());
        }
        client.updated_at = Some(Utc::now());
        Ok(client.clone())
    }

    async fn delete_client(&self, client_id: &str) -> Result<(), ClientError> {
        let mut clients = self.clients.write().await;
        let before = clients.len();
        clients.retain(|c| c.id != client_id);
        if clients.len() == before {
            return Err(ClientError::NotFound(client_id.to_string()));
        }
        Ok(())
    }
}

pub struct MockAssetService {
    assets: RwLock<Vec<Asset>>,
}

impl MockAssetService {
    pub fn new() -> Self {
        Self {
            assets: RwLock::new(mock_data::mock_assets()),
        }
    }
}

impl Default for MockAssetService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetServiceTrait for MockAssetService {
    async fn get_assets(&self) -> Result<Vec<Asset>, AssetError> {
        Ok(self.assets.read().await.clone())
    }

    async fn get_asset(&self, asset_id: &str) -> Result<Asset, AssetError> {
        self.assets
            .read()
            .await
            .iter()
            .find(|a| a.id == asset_id)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(asset_id.to_string()))
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset, AssetError> {
        new_asset.validate()?;
        let now = Utc::now();
        let asset = Asset {
            id: mint_id(),
            symbol: new_asset.symbol,
            name: new_asset.name,
            asset_type: new_asset.asset_type,
            currency: new_asset.currency,
            current_price: None,
            market_cap: None,
            dividend_yield: None,
            sector: new_asset.sector.unwrap_or_default(),
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.assets.write().await.push(asset.clone());
        Ok(asset)
    }

    async fn update_asset(
        &self,
        asset_id: &str,
        update: AssetUpdate,
    ) -> Result<Asset, AssetError> {
        let mut assets = self.assets.write().await;
        let asset = assets
            .iter_mut()
            .find(|a| a.id == asset_id)
            .ok_or_else(|| AssetError::NotFound(asset_id.to_string()))?;
        if let Some(symbol) = update.symbol {
            asset.symbol = symbol;
        }
        if let Some(name) = update.name {
            asset.name = name;
        }
        if let Some(kind) = update.asset_type.as_deref() {
            asset.asset_type = AssetType::from(kind);
        }
        if let Some(currency) = update.currency {
            asset.currency = currency;
        }
        if update.current_price.is_some() {
            asset.current_price = Some(parse_decimal(update.current_price.as_deref()));
        }
        if let Some(sector) = update.sector {
            asset.sector = sector;
        }
        asset.updated_at = Some(Utc::now());
        Ok(asset.clone())
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<(), AssetError> {
        let mut assets = self.assets.write().await;
        let before = assets.len();
        assets.retain(|a| a.id != asset_id);
        if assets.len() == before {
            return Err(AssetError::NotFound(asset_id.to_string()));
        }
        Ok(())
    }

    async fn search_yahoo(&self, symbol: &str) -> Result<Vec<SymbolSearchResult>, AssetError> {
        let query = symbol.trim().to_uppercase();
        let matches: Vec<SymbolSearchResult> = self
            .assets
            .read()
            .await
            .iter()
            .filter(|a| a.symbol.to_uppercase().starts_with(&query))
            .map(|a| SymbolSearchResult {
                symbol: a.symbol.clone(),
                name: a.name.clone(),
                asset_type: a.asset_type,
                currency: a.currency.clone(),
                exchange: "DEMO".to_string(),
            })
            .collect();
        if !matches.is_empty() {
            return Ok(matches);
        }
        // Deterministic synthetic row so the search page always has content
        Ok(vec![SymbolSearchResult {
            symbol: query.clone(),
            name: format!("{} (demo)", query),
            asset_type: AssetType::Stock,
            currency: "BRL".to_string(),
            exchange: "DEMO".to_string(),
        }])
    }

    async fn create_from_yahoo(&self, symbol: &str) -> Result<Asset, AssetError> {
        let query = symbol.trim().to_uppercase();
        if let Some(existing) = self
            .assets
            .read()
            .await
            .iter()
            .find(|a| a.symbol.to_uppercase() == query)
        {
            return Ok(existing.clone());
        }
        self.create_asset(NewAsset {
            symbol: query.clone(),
            name: format!("{} (demo)", query),
            asset_type: AssetType::Stock,
            currency: "BRL".to_string(),
            sector: None,
        })
        .await
    }
}

pub struct MockAllocationService {
    allocations: RwLock<Vec<Allocation>>,
}

impl MockAllocationService {
    pub fn new() -> Self {
        Self {
            allocations: RwLock::new(mock_data::mock_allocations()),
        }
    }
}

impl Default for MockAllocationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AllocationServiceTrait for MockAllocationService {
    async fn get_allocations(&self) -> Result<Vec<Allocation>, AllocationError> {
        Ok(self.allocations.read().await.clone())
    }

    async fn get_client_allocations(
        &self,
        client_id: &str,
    ) -> Result<Vec<Allocation>, AllocationError> {
        Ok(self
            .allocations
            .read()
            .await
            .iter()
            .filter(|a| a.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn create_allocation(
        &self,
        new_allocation: NewAllocation,
    ) -> Result<Allocation, AllocationError> {
        let allocation = Allocation {
            id: mint_id(),
            client_id: new_allocation.client_id.clone(),
            asset_id: new_allocation.asset_id.clone(),
            quantity: new_allocation.quantity,
            buy_price: new_allocation.buy_price,
            buy_date: new_allocation.buy_date,
            total_invested: new_allocation.quantity * new_allocation.buy_price,
            asset: None,
        };
        self.allocations.write().await.push(allocation.clone());
        Ok(allocation)
    }

    async fn update_allocation(
        &self,
        allocation_id: &str,
        update: AllocationUpdate,
    ) -> Result<Allocation, AllocationError> {
        let mut allocations = self.allocations.write().await;
        let allocation = allocations
            .iter_mut()
            .find(|a| a.id == allocation_id)
            .ok_or_else(|| AllocationError::NotFound(allocation_id.to_string()))?;
        if update.quantity.is_some() {
            allocation.quantity = parse_decimal(update.quantity.as_deref());
        }
        if update.buy_price.is_some() {
            allocation.buy_price = parse_decimal(update.buy_price.as_deref());
        }
        if update.buy_date.is_some() {
            allocation.buy_date = parse_date(update.buy_date.as_deref());
        }
        allocation.total_invested = allocation.quantity * allocation.buy_price;
        Ok(allocation.clone())
    }

    async fn delete_allocation(&self, allocation_id: &str) -> Result<(), AllocationError> {
        let mut allocations = self.allocations.write().await;
        let before = allocations.len();
        allocations.retain(|a| a.id != allocation_id);
        if allocations.len() == before {
            return Err(AllocationError::NotFound(allocation_id.to_string()));
        }
        Ok(())
    }
}

pub struct MockMovementService {
    movements: RwLock<Vec<Movement>>,
}

impl MockMovementService {
    pub fn new() -> Self {
        Self {
            movements: RwLock::new(mock_data::mock_movements()),
        }
    }

    fn is_inflow(movement_type: MovementType) -> bool {
        matches!(
            movement_type,
            MovementType::Deposit
                | MovementType::Dividend
                | MovementType::Interest
                | MovementType::Bonus
        )
    }
}

impl Default for MockMovementService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovementServiceTrait for MockMovementService {
    async fn get_movements(&self) -> Result<Vec<Movement>, MovementError> {
        Ok(self.movements.read().await.clone())
    }

    async fn get_client_movements(
        &self,
        client_id: &str,
        limit: usize,
    ) -> Result<Vec<Movement>, MovementError> {
        Ok(self
            .movements
            .read()
            .await
            .iter()
            .filter(|m| m.client_id == client_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create_movement(&self, new_movement: NewMovement) -> Result<Movement, MovementError> {
        new_movement.validate()?;
        let now = Utc::now();
        let movement = Movement {
            id: mint_id(),
            client_id: new_movement.client_id,
            movement_type: new_movement.movement_type,
            amount: new_movement.amount,
            currency: new_movement.currency.unwrap_or_else(|| "BRL".to_string()),
            status: MovementStatus::Pending,
            description: new_movement.description.unwrap_or_default(),
            bank_details: new_movement.bank_details,
            approved_by: String::new(),
            approved_at: None,
            occurred_at: Some(now),
            created_at: Some(now),
        };
        self.movements.write().await.push(movement.clone());
        Ok(movement)
    }

    async fn update_movement(
        &self,
        movement_id: &str,
        update: MovementUpdate,
    ) -> Result<Movement, MovementError> {
        let mut movements = self.movements.write().await;
        let movement = movements
            .iter_mut()
            .find(|m| m.id == movement_id)
            .ok_or_else(|| MovementError::NotFound(movement_id.to_string()))?;
        if let Some(kind) = update.movement_type.as_deref() {
            movement.movement_type = MovementType::from(kind);
        }
        if update.amount.is_some() {
            movement.amount = parse_decimal(update.amount.as_deref());
        }
        if let Some(status) = update.status.as_deref() {
            movement.status = MovementStatus::from(status);
        }
        if let Some(description) = update.description {
            movement.description = description;
        }
        if let Some(approved_by) = update.approved_by {
            movement.approved_by = approved_by;
            movement.approved_at = Some(Utc::now());
        }
        Ok(movement.clone())
    }

    async fn delete_movement(&self, movement_id: &str) -> Result<(), MovementError> {
        let mut movements = self.movements.write().await;
        let before = movements.len();
        movements.retain(|m| m.id != movement_id);
        if movements.len() == before {
            return Err(MovementError::NotFound(movement_id.to_string()));
        }
        Ok(())
    }

    async fn get_client_balance(&self, client_id: &str) -> Result<ClientBalance, MovementError> {
        let movements = self.movements.read().await;
        let mut total_deposited = Decimal::ZERO;
        let mut total_withdrawn = Decimal::ZERO;
        let mut total_balance = Decimal::ZERO;
        for movement in movements
            .iter()
            .filter(|m| m.client_id == client_id && m.status == MovementStatus::Completed)
        {
            if Self::is_inflow(movement.movement_type) {
                total_balance += movement.amount;
                if movement.movement_type == MovementType::Deposit {
                    total_deposited += movement.amount;
                }
            } else {
                total_balance -= movement.amount;
                total_withdrawn += movement.amount;
            }
        }
        Ok(ClientBalance {
            client_id: client_id.to_string(),
            total_balance,
            total_deposited,
            total_withdrawn,
            as_of: Some(Utc::now().date_naive()),
        })
    }
}
