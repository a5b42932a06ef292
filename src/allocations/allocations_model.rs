use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{Asset, AssetDto};
use crate::utils::parsers::{parse_date, parse_decimal, parse_decimal_opt};

use super::allocations_errors::{AllocationError, Result};

/// Domain model tying one client to one asset position.
///
/// `total_invested` comes from the backend when present; older backends omit
/// it and it is derived as `quantity * buy_price`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: String,
    pub client_id: String,
    pub asset_id: String,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub buy_date: Option<NaiveDate>,
    pub total_invested: Decimal,
    pub asset: Option<Asset>,
}

/// Backend wire shape for an allocation record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AllocationDto {
    pub id: i64,
    pub client_id: i64,
    pub asset_id: i64,
    pub quantity: Option<String>,
    pub buy_price: Option<String>,
    pub buy_date: Option<String>,
    pub total_invested: Option<String>,
    pub asset: Option<AssetDto>,
}

impl From<AllocationDto> for Allocation {
    fn from(dto: AllocationDto) -> Self {
        let quantity = parse_decimal(dto.quantity.as_deref());
        let buy_price = parse_decimal(dto.buy_price.as_deref());
        let total_invested = parse_decimal_opt(dto.total_invested.as_deref())
            .unwrap_or_else(|| quantity * buy_price);
        Self {
            id: dto.id.to_string(),
            client_id: dto.client_id.to_string(),
            asset_id: dto.asset_id.to_string(),
            quantity,
            buy_price,
            buy_date: parse_date(dto.buy_date.as_deref()),
            total_invested,
            asset: dto.asset.map(Asset::from),
        }
    }
}

/// Input model for creating a new allocation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewAllocation {
    pub client_id: String,
    pub asset_id: String,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub buy_date: Option<NaiveDate>,
}

impl NewAllocation {
    /// Validates the new allocation data
    pub fn validate(&self) -> Result<()> {
        if self.client_id.parse::<i64>().is_err() {
            return Err(AllocationError::InvalidData(format!(
                "Invalid client id: {}",
                self.client_id
            )));
        }
        if self.asset_id.parse::<i64>().is_err() {
            return Err(AllocationError::InvalidData(format!(
                "Invalid asset id: {}",
                self.asset_id
            )));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(AllocationError::InvalidData(
                "Quantity must be positive".to_string(),
            ));
        }
        if self.buy_price < Decimal::ZERO {
            return Err(AllocationError::InvalidData(
                "Buy price cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Create payload in the backend wire shape
#[derive(Debug, Clone, Serialize)]
pub struct NewAllocationDto {
    pub client_id: i64,
    pub asset_id: i64,
    pub quantity: String,
    pub buy_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_date: Option<String>,
}

impl From<&NewAllocation> for NewAllocationDto {
    fn from(allocation: &NewAllocation) -> Self {
        Self {
            client_id: allocation.client_id.parse().unwrap_or_default(),
            asset_id: allocation.asset_id.parse().unwrap_or_default(),
            quantity: allocation.quantity.to_string(),
            buy_price: allocation.buy_price.to_string(),
            buy_date: allocation.buy_date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Partial update payload, already in the backend wire shape
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AllocationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn derives_total_invested_when_backend_omits_it() {
        let dto = AllocationDto {
            id: 1,
            client_id: 10,
            asset_id: 20,
            quantity: Some("100".to_string()),
            buy_price: Some("38.50".to_string()),
            total_invested: None,
            ..Default::default()
        };
        let allocation = Allocation::from(dto);
        assert_eq!(allocation.total_invested, dec!(3850.00));
    }

    #[test]
    fn prefers_backend_total_when_present() {
        let dto = AllocationDto {
            id: 1,
            client_id: 10,
            asset_id: 20,
            quantity: Some("100".to_string()),
            buy_price: Some("38.50".to_string()),
            total_invested: Some("3900.00".to_string()),
            ..Default::default()
        };
        let allocation = Allocation::from(dto);
        assert_eq!(allocation.total_invested, dec!(3900.00));
    }

    #[test]
    fn empty_record_maps_to_zeroes() {
        let allocation = Allocation::from(AllocationDto {
            id: 3,
            client_id: 1,
            asset_id: 2,
            ..Default::default()
        });
        assert_eq!(allocation.quantity, Decimal::ZERO);
        assert_eq!(allocation.buy_price, Decimal::ZERO);
        assert_eq!(allocation.total_invested, Decimal::ZERO);
        assert_eq!(allocation.buy_date, None);
        assert!(allocation.asset.is_none());
    }

    #[test]
    fn outbound_payload_survives_the_wire_round_trip() {
        let input = NewAllocation {
            client_id: "10".to_string(),
            asset_id: "20".to_string(),
            quantity: dec!(100),
            buy_price: dec!(38.50),
            buy_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        };

        let mut wire = serde_json::to_value(NewAllocationDto::from(&input)).unwrap();
        wire["id"] = serde_json::json!(5);
        let allocation = Allocation::from(serde_json::from_value::<AllocationDto>(wire).unwrap());

        assert_eq!(allocation.client_id, input.client_id);
        assert_eq!(allocation.asset_id, input.asset_id);
        assert_eq!(allocation.quantity, input.quantity);
        assert_eq!(allocation.buy_price, input.buy_price);
        assert_eq!(allocation.buy_date, input.buy_date);
        assert_eq!(allocation.total_invested, dec!(3850.00));
    }

    #[test]
    fn validate_rejects_non_numeric_ids_and_bad_amounts() {
        let allocation = NewAllocation {
            client_id: "abc".to_string(),
            asset_id: "2".to_string(),
            quantity: dec!(10),
            buy_price: dec!(5),
            buy_date: None,
        };
        assert!(allocation.validate().is_err());

        let allocation = NewAllocation {
            client_id: "1".to_string(),
            asset_id: "2".to_string(),
            quantity: Decimal::ZERO,
            buy_price: dec!(5),
            buy_date: None,
        };
        assert!(allocation.validate().is_err());
    }
}
