use super::assets_errors::Result;
use super::assets_model::{Asset, AssetUpdate, NewAsset, SymbolSearchResult};

/// Trait defining the contract for asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    async fn get_assets(&self) -> Result<Vec<Asset>>;
    async fn get_asset(&self, asset_id: &str) -> Result<Asset>;
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset>;
    async fn delete_asset(&self, asset_id: &str) -> Result<()>;
    async fn search_yahoo(&self, symbol: &str) -> Result<Vec<SymbolSearchResult>>;
    async fn create_from_yahoo(&self, symbol: &str) -> Result<Asset>;
}
