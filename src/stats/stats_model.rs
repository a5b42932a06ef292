use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-client investment summary derived from allocations and movements.
///
/// Computed on demand for the dashboard; never persisted or cached beyond
/// the current page view.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientInvestmentStats {
    pub client_id: String,
    pub allocation_count: usize,
    pub total_invested: Decimal,
    pub net_balance: Decimal,
    pub last_investment_date: Option<NaiveDate>,
}

impl ClientInvestmentStats {
    /// The record used when a client's data cannot be fetched.
    pub fn zeroed(client_id: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            ..Default::default()
        }
    }
}
