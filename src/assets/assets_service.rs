use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::api::{ApiClient, ApiError};

use super::assets_errors::{AssetError, Result};
use super::assets_model::{
    Asset, AssetDto, AssetUpdate, NewAsset, NewAssetDto, SymbolSearchDto, SymbolSearchResult,
};
use super::assets_traits::AssetServiceTrait;

/// Live asset service backed by the HTTP API
pub struct AssetService {
    api: Arc<ApiClient>,
}

impl AssetService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn map_not_found(asset_id: &str, err: ApiError) -> AssetError {
        match err {
            ApiError::Http { status: 404, .. } => AssetError::NotFound(asset_id.to_string()),
            other => AssetError::Api(other),
        }
    }
}

#[async_trait]
impl AssetServiceTrait for AssetService {
    async fn get_assets(&self) -> Result<Vec<Asset>> {
        let dtos: Vec<AssetDto> = self.api.get("/assets").await?;
        Ok(dtos.into_iter().map(Asset::from).collect())
    }

    async fn get_asset(&self, asset_id: &str) -> Result<Asset> {
        let dto: AssetDto = self
            .api
            .get(&format!("/assets/{}", asset_id))
            .await
            .map_err(|e| Self::map_not_found(asset_id, e))?;
        Ok(Asset::from(dto))
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        let payload = NewAssetDto::from(&new_asset);
        let dto: AssetDto = self.api.post("/assets", &payload).await?;
        debug!("Created asset {} ({})", dto.id, new_asset.symbol);
        Ok(Asset::from(dto))
    }

    async fn update_asset(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset> {
        let dto: AssetDto = self
            .api
            .put(&format!("/assets/{}", asset_id), &update)
            .await
            .map_err(|e| Self::map_not_found(asset_id, e))?;
        Ok(Asset::from(dto))
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<()> {
        self.api
            .delete(&format!("/assets/{}", asset_id))
            .await
            .map_err(|e| Self::map_not_found(asset_id, e))
    }

    async fn search_yahoo(&self, symbol: &str) -> Result<Vec<SymbolSearchResult>> {
        let dtos: Vec<SymbolSearchDto> = self
            .api
            .get(&format!("/assets/search-yahoo/{}", symbol))
            .await?;
        Ok(dtos.into_iter().map(SymbolSearchResult::from).collect())
    }

    async fn create_from_yahoo(&self, symbol: &str) -> Result<Asset> {
        let dto: AssetDto = self
            .api
            .post(&format!("/assets/from-yahoo/{}", symbol), &())
            .await?;
        debug!("Created asset {} from Yahoo symbol {}", dto.id, symbol);
        Ok(Asset::from(dto))
    }
}
