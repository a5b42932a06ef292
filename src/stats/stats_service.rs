use futures::future::join_all;
use log::warn;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::allocations::AllocationServiceTrait;
use crate::constants::{MOVEMENTS_PAGE_LIMIT, STATS_BATCH_SIZE};
use crate::movements::{MovementServiceTrait, MovementStatus, MovementType};

use super::stats_errors::Result;
use super::stats_model::ClientInvestmentStats;

/// Computes per-client investment statistics that no single backend
/// endpoint returns directly.
///
/// Works over the service traits, so it behaves identically whether the
/// underlying services are live, mock or resilient.
pub struct InvestmentStatsService {
    allocations: Arc<dyn AllocationServiceTrait>,
    movements: Arc<dyn MovementServiceTrait>,
}

impl InvestmentStatsService {
    pub fn new(
        allocations: Arc<dyn AllocationServiceTrait>,
        movements: Arc<dyn MovementServiceTrait>,
    ) -> Self {
        Self {
            allocations,
            movements,
        }
    }

    async fn compute(&self, client_id: &str) -> Result<ClientInvestmentStats> {
        let allocations = self.allocations.get_client_allocations(client_id).await?;
        let balance = self.movements.get_client_balance(client_id).await?;
        let movements = self
            .movements
            .get_client_movements(client_id, MOVEMENTS_PAGE_LIMIT)
            .await?;

        let total_invested: Decimal = movements
            .iter()
            .filter(|m| {
                m.movement_type == MovementType::Deposit && m.status == MovementStatus::Completed
            })
            .map(|m| m.amount)
            .sum();
        let last_investment_date = allocations.iter().filter_map(|a| a.buy_date).max();

        Ok(ClientInvestmentStats {
            client_id: client_id.to_string(),
            allocation_count: allocations.len(),
            total_invested,
            net_balance: balance.total_balance,
            last_investment_date,
        })
    }

    /// Computes the statistics record for one client. Any failure along the
    /// way is absorbed into a zeroed record so dashboard rendering never
    /// breaks on a single bad client.
    pub async fn get_client_investment_stats(&self, client_id: &str) -> ClientInvestmentStats {
        match self.compute(client_id).await {
            Ok(stats) => stats,
            Err(e) => {
                warn!("Failed to compute stats for client {}: {}", client_id, e);
                ClientInvestmentStats::zeroed(client_id)
            }
        }
    }

    /// Computes statistics for many clients in batches of
    /// [`STATS_BATCH_SIZE`], each batch running concurrently and batches
    /// running strictly one after another to bound in-flight requests.
    ///
    /// The returned map covers every distinct requested id exactly once.
    pub async fn get_multiple_client_investment_stats(
        &self,
        client_ids: &[String],
    ) -> HashMap<String, ClientInvestmentStats> {
        let mut seen = HashSet::new();
        let distinct: Vec<&String> = client_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .collect();

        let mut results = HashMap::with_capacity(distinct.len());
        for batch in distinct.chunks(STATS_BATCH_SIZE) {
            let futures: Vec<_> = batch
                .iter()
                .map(|id| self.get_client_investment_stats(id))
                .collect();
            for stats in join_all(futures).await {
                results.insert(stats.client_id.clone(), stats);
            }
        }
        results
    }
}
