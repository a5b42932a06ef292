use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::parsers::{parse_date, parse_datetime, parse_decimal};

use super::movements_errors::{MovementError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Deposit,
    Withdrawal,
    Transfer,
    Fee,
    Dividend,
    Interest,
    Bonus,
    /// Catch-all for movement kinds introduced by newer backends.
    #[default]
    Other,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Deposit => "deposit",
            MovementType::Withdrawal => "withdrawal",
            MovementType::Transfer => "transfer",
            MovementType::Fee => "fee",
            MovementType::Dividend => "dividend",
            MovementType::Interest => "interest",
            MovementType::Bonus => "bonus",
            MovementType::Other => "other",
        }
    }
}

impl From<&str> for MovementType {
    fn from(value: &str) -> Self {
        match value {
            "deposit" => MovementType::Deposit,
            "withdrawal" => MovementType::Withdrawal,
            "transfer" => MovementType::Transfer,
            "fee" => MovementType::Fee,
            "dividend" => MovementType::Dividend,
            "interest" => MovementType::Interest,
            "bonus" => MovementType::Bonus,
            _ => MovementType::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MovementStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
    Failed,
}

impl MovementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementStatus::Pending => "pending",
            MovementStatus::Processing => "processing",
            MovementStatus::Completed => "completed",
            MovementStatus::Cancelled => "cancelled",
            MovementStatus::Failed => "failed",
        }
    }
}

impl From<&str> for MovementStatus {
    fn from(value: &str) -> Self {
        match value {
            "processing" => MovementStatus::Processing,
            "completed" => MovementStatus::Completed,
            "cancelled" => MovementStatus::Cancelled,
            "failed" => MovementStatus::Failed,
            _ => MovementStatus::Pending,
        }
    }
}

/// Payment routing details attached to a movement
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub method: String,
    pub bank_name: String,
    pub account_number: String,
    pub pix_key: String,
}

/// Domain model representing one cash movement in a client's ledger
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: String,
    pub client_id: String,
    pub movement_type: MovementType,
    pub amount: Decimal,
    pub currency: String,
    pub status: MovementStatus,
    pub description: String,
    pub bank_details: Option<BankDetails>,
    pub approved_by: String,
    pub approved_at: Option<DateTime<Utc>>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Backend wire shape for a movement record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MovementDto {
    pub id: i64,
    pub client_id: i64,
    #[serde(rename = "type")]
    pub movement_type: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub payment_method: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub pix_key: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<String>,
    pub occurred_at: Option<String>,
    pub created_at: Option<String>,
}

impl From<MovementDto> for Movement {
    fn from(dto: MovementDto) -> Self {
        // The bank sub-record only exists when the backend filled any of it
        let has_bank_details = dto.payment_method.is_some()
            || dto.bank_name.is_some()
            || dto.account_number.is_some()
            || dto.pix_key.is_some();
        let bank_details = has_bank_details.then(|| BankDetails {
            method: dto.payment_method.clone().unwrap_or_default(),
            bank_name: dto.bank_name.clone().unwrap_or_default(),
            account_number: dto.account_number.clone().unwrap_or_default(),
            pix_key: dto.pix_key.clone().unwrap_or_default(),
        });
        Self {
            id: dto.id.to_string(),
            client_id: dto.client_id.to_string(),
            movement_type: dto
                .movement_type
                .as_deref()
                .map(MovementType::from)
                .unwrap_or_default(),
            amount: parse_decimal(dto.amount.as_deref()),
            currency: dto.currency.unwrap_or_else(|| "BRL".to_string()),
            status: dto.status.as_deref().map(MovementStatus::from).unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            bank_details,
            approved_by: dto.approved_by.unwrap_or_default(),
            approved_at: parse_datetime(dto.approved_at.as_deref()),
            occurred_at: parse_datetime(dto.occurred_at.as_deref()),
            created_at: parse_datetime(dto.created_at.as_deref()),
        }
    }
}

/// Input model for creating a new movement
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub client_id: String,
    pub movement_type: MovementType,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub bank_details: Option<BankDetails>,
}

impl NewMovement {
    /// Validates the new movement data
    pub fn validate(&self) -> Result<()> {
        if self.client_id.parse::<i64>().is_err() {
            return Err(MovementError::InvalidData(format!(
                "Invalid client id: {}",
                self.client_id
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(MovementError::InvalidData(
                "Amount must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Create payload in the backend wire shape
#[derive(Debug, Clone, Serialize)]
pub struct NewMovementDto {
    pub client_id: i64,
    #[serde(rename = "type")]
    pub movement_type: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_key: Option<String>,
}

impl From<&NewMovement> for NewMovementDto {
    fn from(movement: &NewMovement) -> Self {
        let bank = movement.bank_details.clone();
        Self {
            client_id: movement.client_id.parse().unwrap_or_default(),
            movement_type: movement.movement_type.as_str().to_string(),
            amount: movement.amount.to_string(),
            currency: movement.currency.clone(),
            description: movement.description.clone(),
            payment_method: bank.as_ref().map(|b| b.method.clone()),
            bank_name: bank.as_ref().map(|b| b.bank_name.clone()),
            account_number: bank.as_ref().map(|b| b.account_number.clone()),
            pix_key: bank.as_ref().map(|b| b.pix_key.clone()),
        }
    }
}

/// Partial update payload, already in the backend wire shape
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MovementUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub movement_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

/// Balance summary returned by `GET /clients/{id}/balance`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientBalance {
    pub client_id: String,
    pub total_balance: Decimal,
    pub total_deposited: Decimal,
    pub total_withdrawn: Decimal,
    pub as_of: Option<NaiveDate>,
}

/// Backend wire shape for the balance summary
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientBalanceDto {
    pub client_id: i64,
    pub total_balance: Option<String>,
    pub total_deposited: Option<String>,
    pub total_withdrawn: Option<String>,
    pub as_of: Option<String>,
}

impl From<ClientBalanceDto> for ClientBalance {
    fn from(dto: ClientBalanceDto) -> Self {
        Self {
            client_id: dto.client_id.to_string(),
            total_balance: parse_decimal(dto.total_balance.as_deref()),
            total_deposited: parse_decimal(dto.total_deposited.as_deref()),
            total_withdrawn: parse_decimal(dto.total_withdrawn.as_deref()),
            as_of: parse_date(dto.as_of.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn maps_full_movement() {
        let dto = MovementDto {
            id: 5,
            client_id: 1,
            movement_type: Some("deposit".to_string()),
            amount: Some("1500.00".to_string()),
            status: Some("completed".to_string()),
            payment_method: Some("pix".to_string()),
            pix_key: Some("maria@example.com".to_string()),
            occurred_at: Some("2024-02-10T09:00:00Z".to_string()),
            ..Default::default()
        };
        let movement = Movement::from(dto);
        assert_eq!(movement.movement_type, MovementType::Deposit);
        assert_eq!(movement.status, MovementStatus::Completed);
        assert_eq!(movement.amount, dec!(1500.00));
        let bank = movement.bank_details.expect("bank details");
        assert_eq!(bank.method, "pix");
        assert_eq!(bank.bank_name, "");
    }

    #[test]
    fn absent_bank_fields_mean_no_sub_record() {
        let movement = Movement::from(MovementDto {
            id: 1,
            client_id: 1,
            ..Default::default()
        });
        assert!(movement.bank_details.is_none());
        assert_eq!(movement.movement_type, MovementType::Other);
        assert_eq!(movement.status, MovementStatus::Pending);
        assert_eq!(movement.amount, Decimal::ZERO);
    }

    #[test]
    fn unknown_type_and_status_parse_leniently() {
        assert_eq!(MovementType::from("chargeback"), MovementType::Other);
        assert_eq!(MovementStatus::from("on-hold"), MovementStatus::Pending);
    }

    #[test]
    fn balance_defaults_to_zero() {
        let balance = ClientBalance::from(ClientBalanceDto {
            client_id: 9,
            total_balance: Some("oops".to_string()),
            ..Default::default()
        });
        assert_eq!(balance.client_id, "9");
        assert_eq!(balance.total_balance, Decimal::ZERO);
        assert_eq!(balance.as_of, None);
    }

    #[test]
    fn create_payload_round_trips_core_fields() {
        let new_movement = NewMovement {
            client_id: "3".to_string(),
            movement_type: MovementType::Withdrawal,
            amount: dec!(250.75),
            currency: Some("BRL".to_string()),
            description: None,
            bank_details: None,
        };
        let dto = NewMovementDto::from(&new_movement);
        assert_eq!(dto.client_id, 3);
        assert_eq!(dto.movement_type, "withdrawal");
        assert_eq!(dto.amount, "250.75");

        let value = serde_json::to_value(&dto).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("type"));
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("payment_method"));
    }

    #[test]
    fn outbound_payload_survives_the_wire_round_trip() {
        let input = NewMovement {
            client_id: "3".to_string(),
            movement_type: MovementType::Deposit,
            amount: dec!(1500.00),
            currency: Some("BRL".to_string()),
            description: Some("Monthly contribution".to_string()),
            bank_details: Some(BankDetails {
                method: "pix".to_string(),
                bank_name: "Banco X".to_string(),
                account_number: "".to_string(),
                pix_key: "maria@example.com".to_string(),
            }),
        };

        let mut wire = serde_json::to_value(NewMovementDto::from(&input)).unwrap();
        wire["id"] = serde_json::json!(5);
        let movement = Movement::from(serde_json::from_value::<MovementDto>(wire).unwrap());

        assert_eq!(movement.client_id, input.client_id);
        assert_eq!(movement.movement_type, input.movement_type);
        assert_eq!(movement.amount, input.amount);
        assert_eq!(movement.currency, "BRL");
        assert_eq!(movement.description, "Monthly contribution");
        let bank = movement.bank_details.expect("bank details");
        assert_eq!(bank.method, "pix");
        assert_eq!(bank.pix_key, "maria@example.com");
    }
}
