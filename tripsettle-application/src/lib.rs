#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod records;
pub mod settlement_service;

pub use error::{RecordError, RepositoryError, SettlementServiceError};
pub use model::{TripId, TripSettlement};
pub use ports::{MemberDirectory, TripRepository};
pub use records::{BillItemRecord, BillRecord, MemberRecord, PaymentRecord};
pub use settlement_service::SettlementService;
