use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::parsers::{parse_datetime, parse_decimal_opt};

use super::assets_errors::{AssetError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Stock,
    Bond,
    RealEstateFund,
    Etf,
    InvestmentFund,
    Crypto,
    #[default]
    Other,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Bond => "bond",
            AssetType::RealEstateFund => "real_estate_fund",
            AssetType::Etf => "etf",
            AssetType::InvestmentFund => "investment_fund",
            AssetType::Crypto => "crypto",
            AssetType::Other => "other",
        }
    }
}

impl From<&str> for AssetType {
    fn from(value: &str) -> Self {
        match value {
            "stock" => AssetType::Stock,
            "bond" => AssetType::Bond,
            "real_estate_fund" => AssetType::RealEstateFund,
            "etf" => AssetType::Etf,
            "investment_fund" => AssetType::InvestmentFund,
            "crypto" => AssetType::Crypto,
            _ => AssetType::Other,
        }
    }
}

/// Domain model representing a financial asset.
///
/// Market analytics (price, cap, yield) are optional because the backend may
/// not have synced them yet; absence is normal, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetType,
    pub currency: String,
    pub current_price: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub dividend_yield: Option<Decimal>,
    pub sector: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Backend wire shape for an asset record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetDto {
    pub id: i64,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub asset_type: Option<String>,
    pub currency: Option<String>,
    pub current_price: Option<String>,
    pub market_cap: Option<String>,
    pub dividend_yield: Option<String>,
    pub sector: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<AssetDto> for Asset {
    fn from(dto: AssetDto) -> Self {
        Self {
            id: dto.id.to_string(),
            symbol: dto.symbol.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            asset_type: dto.asset_type.as_deref().map(AssetType::from).unwrap_or_default(),
            currency: dto.currency.unwrap_or_else(|| "BRL".to_string()),
            current_price: parse_decimal_opt(dto.current_price.as_deref()),
            market_cap: parse_decimal_opt(dto.market_cap.as_deref()),
            dividend_yield: parse_decimal_opt(dto.dividend_yield.as_deref()),
            sector: dto.sector.unwrap_or_default(),
            created_at: parse_datetime(dto.created_at.as_deref()),
            updated_at: parse_datetime(dto.updated_at.as_deref()),
        }
    }
}

/// Input model for creating a new asset
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetType,
    pub currency: String,
    pub sector: Option<String>,
}

impl NewAsset {
    /// Validates the new asset data
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Asset symbol cannot be empty".to_string(),
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Currency cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Create payload in the backend wire shape
#[derive(Debug, Clone, Serialize)]
pub struct NewAssetDto {
    pub symbol: String,
    pub name: String,
    pub asset_type: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

impl From<&NewAsset> for NewAssetDto {
    fn from(asset: &NewAsset) -> Self {
        Self {
            symbol: asset.symbol.clone(),
            name: asset.name.clone(),
            asset_type: asset.asset_type.as_str().to_string(),
            currency: asset.currency.clone(),
            sector: asset.sector.clone(),
        }
    }
}

/// Partial update payload, already in the backend wire shape
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

/// One row returned by the Yahoo symbol search proxy
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSearchResult {
    pub symbol: String,
    pub name: String,
    pub asset_type: AssetType,
    pub currency: String,
    pub exchange: String,
}

/// Wire shape for one Yahoo search row
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolSearchDto {
    pub symbol: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
}

impl From<SymbolSearchDto> for SymbolSearchResult {
    fn from(dto: SymbolSearchDto) -> Self {
        Self {
            symbol: dto.symbol.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            asset_type: dto.kind.as_deref().map(AssetType::from).unwrap_or_default(),
            currency: dto.currency.unwrap_or_else(|| "BRL".to_string()),
            exchange: dto.exchange.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn maps_analytics_as_optional() {
        let dto = AssetDto {
            id: 7,
            symbol: Some("PETR4".to_string()),
            name: Some("Petrobras PN".to_string()),
            asset_type: Some("stock".to_string()),
            currency: Some("BRL".to_string()),
            current_price: Some("38.42".to_string()),
            dividend_yield: Some("0.12".to_string()),
            ..Default::default()
        };
        let asset = Asset::from(dto);
        assert_eq!(asset.id, "7");
        assert_eq!(asset.asset_type, AssetType::Stock);
        assert_eq!(asset.current_price, Some(dec!(38.42)));
        assert_eq!(asset.dividend_yield, Some(dec!(0.12)));
        assert_eq!(asset.market_cap, None);
    }

    #[test]
    fn absent_analytics_do_not_error() {
        let asset = Asset::from(AssetDto {
            id: 1,
            ..Default::default()
        });
        assert_eq!(asset.current_price, None);
        assert_eq!(asset.market_cap, None);
        assert_eq!(asset.dividend_yield, None);
        assert_eq!(asset.currency, "BRL");
        assert_eq!(asset.asset_type, AssetType::Other);
    }

    #[test]
    fn malformed_price_becomes_absent() {
        let asset = Asset::from(AssetDto {
            id: 2,
            current_price: Some("n/a".to_string()),
            ..Default::default()
        });
        assert_eq!(asset.current_price, None);
    }

    #[test]
    fn unknown_asset_type_is_other() {
        assert_eq!(AssetType::from("meme_coin"), AssetType::Other);
        assert_eq!(AssetType::from("real_estate_fund"), AssetType::RealEstateFund);
    }

    #[test]
    fn outbound_payload_survives_the_wire_round_trip() {
        let input = NewAsset {
            symbol: "HGLG11".to_string(),
            name: "CSHG Logística".to_string(),
            asset_type: AssetType::RealEstateFund,
            currency: "BRL".to_string(),
            sector: Some("Logistics".to_string()),
        };

        let mut wire = serde_json::to_value(NewAssetDto::from(&input)).unwrap();
        wire["id"] = serde_json::json!(7);
        let asset = Asset::from(serde_json::from_value::<AssetDto>(wire).unwrap());

        assert_eq!(asset.symbol, input.symbol);
        assert_eq!(asset.name, input.name);
        assert_eq!(asset.asset_type, input.asset_type);
        assert_eq!(asset.currency, input.currency);
        assert_eq!(asset.sector, "Logistics");
    }

    #[test]
    fn update_emits_only_set_keys() {
        let update = AssetUpdate {
            current_price: Some("40.00".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["current_price"]);
    }
}
