pub mod balance_calculator;
pub mod report_builder;
pub mod settlement_optimizer;

pub use balance_calculator::BalanceCalculator;
pub use report_builder::{ReportError, SettlementReportBuilder};
pub use settlement_optimizer::{ParticipantCounts, SettlementOptimizer};
