#![warn(clippy::uninlined_format_args)]

pub mod amount;
pub mod error_presenter;
pub mod export;
pub mod settlement_presenter;
pub mod text_table;

pub use amount::{format_cents, format_signed_cents};
pub use error_presenter::format_service_error;
pub use export::ReportExport;
pub use settlement_presenter::{SettlementPresenter, SettlementView};
