use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use investdesk_core::allocations::{
    Allocation, AllocationError, AllocationServiceTrait, AllocationUpdate, NewAllocation,
};
use investdesk_core::fallback::{MockAllocationService, MockMovementService};
use investdesk_core::movements::{
    ClientBalance, Movement, MovementError, MovementServiceTrait, MovementStatus, MovementType,
    MovementUpdate, NewMovement,
};
use investdesk_core::stats::InvestmentStatsService;
use rust_decimal::Decimal;

fn movement(client_id: &str, kind: MovementType, amount: Decimal, status: MovementStatus) -> Movement {
    Movement {
        id: format!("m-{}", amount),
        client_id: client_id.to_string(),
        movement_type: kind,
        amount,
        currency: "BRL".to_string(),
        status,
        ..Default::default()
    }
}

fn allocation(client_id: &str, buy_date: Option<NaiveDate>) -> Allocation {
    Allocation {
        id: "a-1".to_string(),
        client_id: client_id.to_string(),
        asset_id: "1".to_string(),
        quantity: dec!(10),
        buy_price: dec!(5),
        buy_date,
        total_invested: dec!(50),
        asset: None,
    }
}

/// Allocation stub keyed by client id.
struct StubAllocations {
    by_client: HashMap<String, Vec<Allocation>>,
}

#[async_trait]
impl AllocationServiceTrait for StubAllocations {
    async fn get_allocations(&self) -> Result<Vec<Allocation>, AllocationError> {
        Ok(self.by_client.values().flatten().cloned().collect())
    }
    async fn get_client_allocations(
        &self,
        client_id: &str,
    ) -> Result<Vec<Allocation>, AllocationError> {
        Ok(self.by_client.get(client_id).cloned().unwrap_or_default())
    }
    async fn create_allocation(&self, _n: NewAllocation) -> Result<Allocation, AllocationError> {
        Err(AllocationError::InvalidData("read-only stub".to_string()))
    }
    async fn update_allocation(
        &self,
        id: &str,
        _u: AllocationUpdate,
    ) -> Result<Allocation, AllocationError> {
        Err(AllocationError::NotFound(id.to_string()))
    }
    async fn delete_allocation(&self, id: &str) -> Result<(), AllocationError> {
        Err(AllocationError::NotFound(id.to_string()))
    }
}

/// Movement stub; any client id listed in `failing` errors on every call.
struct StubMovements {
    by_client: HashMap<String, Vec<Movement>>,
    balances: HashMap<String, Decimal>,
    failing: Vec<String>,
}

impl StubMovements {
    fn check(&self, client_id: &str) -> Result<(), MovementError> {
        if self.failing.iter().any(|id| id == client_id) {
            return Err(MovementError::NotFound(client_id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MovementServiceTrait for StubMovements {
    async fn get_movements(&self) -> Result<Vec<Movement>, MovementError> {
        Ok(self.by_client.values().flatten().cloned().collect())
    }
    async fn get_client_movements(
        &self,
        client_id: &str,
        limit: usize,
    ) -> Result<Vec<Movement>, MovementError> {
        self.check(client_id)?;
        Ok(self
            .by_client
            .get(client_id)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .take(limit)
            .collect())
    }
    async fn create_movement(&self, _n: NewMovement) -> Result<Movement, MovementError> {
        Err(MovementError::InvalidData("read-only stub".to_string()))
    }
    async fn update_movement(
        &self,
        id: &str,
        _u: MovementUpdate,
    ) -> Result<Movement, MovementError> {
        Err(MovementError::NotFound(id.to_string()))
    }
    async fn delete_movement(&self, id: &str) -> Result<(), MovementError> {
        Err(MovementError::NotFound(id.to_string()))
    }
    async fn get_client_balance(&self, client_id: &str) -> Result<ClientBalance, MovementError> {
        self.check(client_id)?;
        Ok(ClientBalance {
            client_id: client_id.to_string(),
            total_balance: self.balances.get(client_id).copied().unwrap_or_default(),
            total_deposited: Decimal::ZERO,
            total_withdrawn: Decimal::ZERO,
            as_of: None,
        })
    }
}

fn service_for(
    clients: &[&str],
    failing: &[&str],
) -> InvestmentStatsService {
    let mut allocations = HashMap::new();
    let mut movements = HashMap::new();
    let mut balances = HashMap::new();
    for client_id in clients {
        let buy_date = NaiveDate::from_ymd_opt(2024, 1, 15);
        allocations.insert(client_id.to_string(), vec![allocation(client_id, buy_date)]);
        movements.insert(
            client_id.to_string(),
            vec![movement(
                client_id,
                MovementType::Deposit,
                dec!(100),
                MovementStatus::Completed,
            )],
        );
        balances.insert(client_id.to_string(), dec!(100));
    }
    InvestmentStatsService::new(
        Arc::new(StubAllocations {
            by_client: allocations,
        }),
        Arc::new(StubMovements {
            by_client: movements,
            balances,
            failing: failing.iter().map(|id| id.to_string()).collect(),
        }),
    )
}

#[tokio::test]
async fn pending_deposits_are_excluded_from_total_invested() {
    let movements = vec![
        movement("1", MovementType::Deposit, dec!(100.00), MovementStatus::Completed),
        movement("1", MovementType::Deposit, dec!(50.00), MovementStatus::Completed),
        movement("1", MovementType::Deposit, dec!(9999.00), MovementStatus::Pending),
        movement("1", MovementType::Withdrawal, dec!(30.00), MovementStatus::Completed),
    ];
    let service = InvestmentStatsService::new(
        Arc::new(StubAllocations {
            by_client: HashMap::new(),
        }),
        Arc::new(StubMovements {
            by_client: HashMap::from([("1".to_string(), movements)]),
            balances: HashMap::from([("1".to_string(), dec!(120.00))]),
            failing: vec![],
        }),
    );

    let stats = service.get_client_investment_stats("1").await;
    assert_eq!(stats.total_invested, dec!(150.00));
    assert_eq!(stats.net_balance, dec!(120.00));
    assert_eq!(stats.allocation_count, 0);
    assert_eq!(stats.last_investment_date, None);
}

#[tokio::test]
async fn batch_covers_every_requested_id_exactly_once() {
    for n in [0usize, 1, 5, 6, 23] {
        let ids: Vec<String> = (0..n).map(|i| format!("c{}", i)).collect();
        let id_refs: Vec<&str> = ids.iter().map(|s| s.as_str()).collect();
        let service = service_for(&id_refs, &[]);

        let results = service.get_multiple_client_investment_stats(&ids).await;
        assert_eq!(results.len(), n, "input size {}", n);
        for id in &ids {
            let stats = results.get(id).expect("every id present");
            assert_eq!(stats.client_id, *id);
            assert_eq!(stats.total_invested, dec!(100));
            assert_eq!(stats.allocation_count, 1);
        }
    }
}

#[tokio::test]
async fn failing_client_gets_zeroed_record_without_poisoning_batch() {
    let ids: Vec<String> = (0..7).map(|i| format!("c{}", i)).collect();
    let id_refs: Vec<&str> = ids.iter().map(|s| s.as_str()).collect();
    let service = service_for(&id_refs, &["c3"]);

    let results = service.get_multiple_client_investment_stats(&ids).await;
    assert_eq!(results.len(), 7);

    let failed = results.get("c3").expect("zeroed record present");
    assert_eq!(failed.total_invested, Decimal::ZERO);
    assert_eq!(failed.allocation_count, 0);
    assert_eq!(failed.last_investment_date, None);

    for id in ids.iter().filter(|id| *id != "c3") {
        assert_eq!(results.get(id).unwrap().total_invested, dec!(100));
    }
}

#[tokio::test]
async fn duplicate_ids_collapse_to_one_entry() {
    let ids = vec!["1".to_string(), "1".to_string(), "2".to_string()];
    let service = service_for(&["1", "2"], &[]);

    let results = service.get_multiple_client_investment_stats(&ids).await;
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn computes_over_demo_datasets() {
    let service = InvestmentStatsService::new(
        Arc::new(MockAllocationService::new()),
        Arc::new(MockMovementService::new()),
    );

    let stats = service.get_client_investment_stats("1").await;
    assert_eq!(stats.allocation_count, 1);
    // Only the completed deposit counts; the pending withdrawal does not
    assert_eq!(stats.total_invested, dec!(10000.00));
    assert_eq!(stats.net_balance, dec!(10000.00));
    assert_eq!(
        stats.last_investment_date,
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );

    let stats = service.get_client_investment_stats("2").await;
    assert_eq!(stats.total_invested, dec!(7500.00));
    // Deposit plus dividend, both completed
    assert_eq!(stats.net_balance, dec!(7534.00));
}
