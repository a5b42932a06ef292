//! Deterministic demo datasets served when the backend is unreachable.
//!
//! Hand-authored and intentionally small: enough for every page to render
//! and for manual testing, not a model of backend constraints.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::allocations::Allocation;
use crate::assets::{Asset, AssetType};
use crate::clients::{
    Address, Client, ClientStatus, ExperienceLevel, InvestmentProfile,
};
use crate::movements::{Movement, MovementStatus, MovementType};

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn datetime(year: i32, month: u32, day: u32) -> Option<chrono::DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single()
}

pub fn mock_clients() -> Vec<Client> {
    vec![
        Client {
            id: "1".to_string(),
            name: "Maria Oliveira".to_string(),
            cpf: "12345678900".to_string(),
            email: "maria.oliveira@example.com".to_string(),
            phone: "11 3456-7890".to_string(),
            mobile: "11 98765-4321".to_string(),
            whatsapp: "11 98765-4321".to_string(),
            address: Address {
                street: "Av. Paulista".to_string(),
                number: "1578".to_string(),
                complement: "cj 1203".to_string(),
                neighborhood: "Bela Vista".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                zip_code: "01310-200".to_string(),
                country: "Brasil".to_string(),
            },
            investment_profile: InvestmentProfile::Moderate,
            risk_tolerance: 6,
            experience_level: ExperienceLevel::Intermediate,
            monthly_income: dec!(18500.00),
            net_worth: dec!(420000.00),
            tags: vec!["vip".to_string()],
            notes: "Prefere contato por WhatsApp.".to_string(),
            status: ClientStatus::Active,
            created_at: datetime(2023, 11, 5),
            updated_at: datetime(2024, 2, 1),
            created_by: "demo".to_string(),
            last_contact_date: date(2024, 2, 1),
        },
        Client {
            id: "2".to_string(),
            name: "João Santos".to_string(),
            cpf: "98765432100".to_string(),
            email: "joao.santos@example.com".to_string(),
            phone: String::new(),
            mobile: "21 99123-4567".to_string(),
            whatsapp: String::new(),
            address: Address {
                street: "Rua do Catete".to_string(),
                number: "90".to_string(),
                complement: String::new(),
                neighborhood: "Catete".to_string(),
                city: "Rio de Janeiro".to_string(),
                state: "RJ".to_string(),
                zip_code: "22220-000".to_string(),
                country: "Brasil".to_string(),
            },
            investment_profile: InvestmentProfile::Conservative,
            risk_tolerance: 3,
            experience_level: ExperienceLevel::Beginner,
            monthly_income: dec!(9200.00),
            net_worth: dec!(150000.00),
            tags: vec![],
            notes: String::new(),
            status: ClientStatus::Prospect,
            created_at: datetime(2024, 1, 20),
            updated_at: datetime(2024, 1, 20),
            created_by: "demo".to_string(),
            last_contact_date: None,
        },
    ]
}

pub fn mock_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "1".to_string(),
            symbol: "PETR4".to_string(),
            name: "Petrobras PN".to_string(),
            asset_type: AssetType::Stock,
            currency: "BRL".to_string(),
            current_price: Some(dec!(38.42)),
            market_cap: Some(dec!(501000000000)),
            dividend_yield: Some(dec!(0.1230)),
            sector: "Energia".to_string(),
            created_at: datetime(2023, 10, 1),
            updated_at: datetime(2024, 2, 1),
        },
        Asset {
            id: "2".to_string(),
            symbol: "HGLG11".to_string(),
            name: "CSHG Logística FII".to_string(),
            asset_type: AssetType::RealEstateFund,
            currency: "BRL".to_string(),
            current_price: Some(dec!(160.10)),
            market_cap: None,
            dividend_yield: Some(dec!(0.0085)),
            sector: "Imobiliário".to_string(),
            created_at: datetime(2023, 10, 1),
            updated_at: datetime(2024, 2, 1),
        },
    ]
}

pub fn mock_allocations() -> Vec<Allocation> {
    let assets = mock_assets();
    vec![
        Allocation {
            id: "1".to_string(),
            client_id: "1".to_string(),
            asset_id: "1".to_string(),
            quantity: dec!(200),
            buy_price: dec!(32.50),
            buy_date: date(2024, 1, 15),
            total_invested: dec!(6500.00),
            asset: assets.first().cloned(),
        },
        Allocation {
            id: "2".to_string(),
            client_id: "2".to_string(),
            asset_id: "2".to_string(),
            quantity: dec!(40),
            buy_price: dec!(155.00),
            buy_date: date(2024, 2, 5),
            total_invested: dec!(6200.00),
            asset: assets.get(1).cloned(),
        },
    ]
}

pub fn mock_movements() -> Vec<Movement> {
    vec![
        Movement {
            id: "1".to_string(),
            client_id: "1".to_string(),
            movement_type: MovementType::Deposit,
            amount: dec!(10000.00),
            currency: "BRL".to_string(),
            status: MovementStatus::Completed,
            description: "Aporte inicial".to_string(),
            bank_details: None,
            approved_by: "demo".to_string(),
            approved_at: datetime(2024, 1, 10),
            occurred_at: datetime(2024, 1, 10),
            created_at: datetime(2024, 1, 10),
        },
        Movement {
            id: "2".to_string(),
            client_id: "1".to_string(),
            movement_type: MovementType::Withdrawal,
            amount: dec!(1200.00),
            currency: "BRL".to_string(),
            status: MovementStatus::Pending,
            description: "Resgate parcial".to_string(),
            bank_details: None,
            approved_by: String::new(),
            approved_at: None,
            occurred_at: datetime(2024, 2, 12),
            created_at: datetime(2024, 2, 12),
        },
        Movement {
            id: "3".to_string(),
            client_id: "2".to_string(),
            movement_type: MovementType::Deposit,
            amount: dec!(7500.00),
            currency: "BRL".to_string(),
            status: MovementStatus::Completed,
            description: "Transferência TED".to_string(),
            bank_details: None,
            approved_by: "demo".to_string(),
            approved_at: datetime(2024, 2, 5),
            occurred_at: datetime(2024, 2, 5),
            created_at: datetime(2024, 2, 5),
        },
        Movement {
            id: "4".to_string(),
            client_id: "2".to_string(),
            movement_type: MovementType::Dividend,
            amount: dec!(34.00),
            currency: "BRL".to_string(),
            status: MovementStatus::Completed,
            description: "Rendimento HGLG11".to_string(),
            bank_details: None,
            approved_by: "demo".to_string(),
            approved_at: datetime(2024, 2, 28),
            occurred_at: datetime(2024, 2, 28),
            created_at: datetime(2024, 2, 28),
        },
    ]
}
