#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    AmountOverflow, BalanceAccumulator, Bill, BillId, BillItem, Member, MemberId, Money,
    MoneyConversionError, PaymentEntry, SETTLEMENT_SLACK, Settlement, SettlementReport, Standing,
    TransactionSummary, UserBalance,
};
pub use services::{
    BalanceCalculator, ParticipantCounts, ReportError, SettlementOptimizer,
    SettlementReportBuilder,
};
