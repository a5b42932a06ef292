use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocations::Allocation;
use crate::utils::parsers::{parse_date, parse_datetime, parse_decimal};

use super::clients_errors::{ClientError, Result};

/// Risk tolerance applied when the backend does not provide one.
pub const DEFAULT_RISK_TOLERANCE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentProfile {
    Conservative,
    Moderate,
    Aggressive,
    #[default]
    Undefined,
}

impl InvestmentProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentProfile::Conservative => "conservative",
            InvestmentProfile::Moderate => "moderate",
            InvestmentProfile::Aggressive => "aggressive",
            InvestmentProfile::Undefined => "undefined",
        }
    }
}

impl From<&str> for InvestmentProfile {
    fn from(value: &str) -> Self {
        match value {
            "conservative" => InvestmentProfile::Conservative,
            "moderate" => InvestmentProfile::Moderate,
            "aggressive" => InvestmentProfile::Aggressive,
            _ => InvestmentProfile::Undefined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
            ExperienceLevel::Professional => "professional",
        }
    }
}

impl From<&str> for ExperienceLevel {
    fn from(value: &str) -> Self {
        match value {
            "intermediate" => ExperienceLevel::Intermediate,
            "advanced" => ExperienceLevel::Advanced,
            "professional" => ExperienceLevel::Professional,
            _ => ExperienceLevel::Beginner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Prospect,
    Suspended,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Prospect => "prospect",
            ClientStatus::Suspended => "suspended",
        }
    }
}

impl From<&str> for ClientStatus {
    fn from(value: &str) -> Self {
        match value {
            "inactive" => ClientStatus::Inactive,
            "prospect" => ClientStatus::Prospect,
            "suspended" => ClientStatus::Suspended,
            _ => ClientStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Domain model representing a client of the advisory office
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub mobile: String,
    pub whatsapp: String,
    pub address: Address,
    pub investment_profile: InvestmentProfile,
    pub risk_tolerance: u8,
    pub experience_level: ExperienceLevel,
    pub monthly_income: Decimal,
    pub net_worth: Decimal,
    pub tags: Vec<String>,
    pub notes: String,
    pub status: ClientStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: String,
    pub last_contact_date: Option<NaiveDate>,
}

/// Backend wire shape for a client record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub id: i64,
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub whatsapp: Option<String>,
    pub address_street: Option<String>,
    pub address_number: Option<String>,
    pub address_complement: Option<String>,
    pub address_neighborhood: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip_code: Option<String>,
    pub address_country: Option<String>,
    pub investment_profile: Option<String>,
    pub risk_tolerance: Option<u8>,
    pub experience_level: Option<String>,
    pub monthly_income: Option<String>,
    pub net_worth: Option<String>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_by: Option<String>,
    pub last_contact_date: Option<String>,
}

impl From<ClientDto> for Client {
    fn from(dto: ClientDto) -> Self {
        Self {
            id: dto.id.to_string(),
            name: dto.name.unwrap_or_default(),
            cpf: dto.cpf.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            mobile: dto.mobile.unwrap_or_default(),
            whatsapp: dto.whatsapp.unwrap_or_default(),
            address: Address {
                street: dto.address_street.unwrap_or_default(),
                number: dto.address_number.unwrap_or_default(),
                complement: dto.address_complement.unwrap_or_default(),
                neighborhood: dto.address_neighborhood.unwrap_or_default(),
                city: dto.address_city.unwrap_or_default(),
                state: dto.address_state.unwrap_or_default(),
                zip_code: dto.address_zip_code.unwrap_or_default(),
                country: dto.address_country.unwrap_or_default(),
            },
            investment_profile: dto
                .investment_profile
                .as_deref()
                .map(InvestmentProfile::from)
                .unwrap_or_default(),
            risk_tolerance: dto.risk_tolerance.unwrap_or(DEFAULT_RISK_TOLERANCE),
            experience_level: dto
                .experience_level
                .as_deref()
                .map(ExperienceLevel::from)
                .unwrap_or_default(),
            monthly_income: parse_decimal(dto.monthly_income.as_deref()),
            net_worth: parse_decimal(dto.net_worth.as_deref()),
            tags: dto.tags.unwrap_or_default(),
            notes: dto.notes.unwrap_or_default(),
            status: dto.status.as_deref().map(ClientStatus::from).unwrap_or_default(),
            created_at: parse_datetime(dto.created_at.as_deref()),
            updated_at: parse_datetime(dto.updated_at.as_deref()),
            created_by: dto.created_by.unwrap_or_default(),
            last_contact_date: parse_date(dto.last_contact_date.as_deref()),
        }
    }
}

/// Input model for creating a new client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<Address>,
    pub investment_profile: InvestmentProfile,
    pub risk_tolerance: Option<u8>,
    pub experience_level: ExperienceLevel,
    pub monthly_income: Option<Decimal>,
    pub net_worth: Option<Decimal>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub status: ClientStatus,
}

impl NewClient {
    /// Validates the new client data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ClientError::InvalidData(
                "Client name cannot be empty".to_string(),
            ));
        }
        if self.cpf.trim().is_empty() {
            return Err(ClientError::InvalidData(
                "Client CPF cannot be empty".to_string(),
            ));
        }
        if let Some(risk) = self.risk_tolerance {
            if !(1..=10).contains(&risk) {
                return Err(ClientError::InvalidData(format!(
                    "Risk tolerance must be between 1 and 10, got {}",
                    risk
                )));
            }
        }
        Ok(())
    }
}

/// Create payload in the backend wire shape
#[derive(Debug, Clone, Serialize)]
pub struct NewClientDto {
    pub name: String,
    pub cpf: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    pub investment_profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<u8>,
    pub experience_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_worth: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: String,
}

impl From<&NewClient> for NewClientDto {
    fn from(client: &NewClient) -> Self {
        let address = client.address.clone().unwrap_or_default();
        let has_address = client.address.is_some();
        let field = |value: String| if has_address { Some(value) } else { None };
        Self {
            name: client.name.clone(),
            cpf: client.cpf.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            mobile: client.mobile.clone(),
            whatsapp: client.whatsapp.clone(),
            address_street: field(address.street),
            address_number: field(address.number),
            address_complement: field(address.complement),
            address_neighborhood: field(address.neighborhood),
            address_city: field(address.city),
            address_state: field(address.state),
            address_zip_code: field(address.zip_code),
            address_country: field(address.country),
            investment_profile: client.investment_profile.as_str().to_string(),
            risk_tolerance: client.risk_tolerance,
            experience_level: client.experience_level.as_str().to_string(),
            monthly_income: client.monthly_income.map(|d| d.to_string()),
            net_worth: client.net_worth.map(|d| d.to_string()),
            tags: client.tags.clone(),
            notes: client.notes.clone(),
            status: client.status.as_str().to_string(),
        }
    }
}

/// Partial update payload, already in the backend wire shape.
///
/// Every field is optional and skipped when unset so a partial edit never
/// nulls untouched columns server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_worth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact_date: Option<String>,
}

/// A client together with its current allocations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientWithAssets {
    pub client: Client,
    pub allocations: Vec<Allocation>,
}
