pub(crate) mod stats_errors;
pub(crate) mod stats_model;
pub(crate) mod stats_service;

// Re-export the public interface
pub use stats_model::ClientInvestmentStats;
pub use stats_service::InvestmentStatsService;

// Re-export error types for convenience
pub use stats_errors::{Result, StatsError};
