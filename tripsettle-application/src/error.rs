use thiserror::Error;
use tripsettle_domain::{MoneyConversionError, ReportError};

use crate::model::TripId;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("trip '{0}' not found")]
    TripNotFound(TripId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("member record at position {position} has no id")]
    MissingMemberId { position: usize },
    #[error("bill record at position {position} has no id")]
    MissingBillId { position: usize },
    #[error("bill '{bill}' is missing `{field}`")]
    MissingField { bill: String, field: &'static str },
    #[error("bill '{bill}' has an invalid `{field}`: {source}")]
    InvalidAmount {
        bill: String,
        field: &'static str,
        #[source]
        source: MoneyConversionError,
    },
}

#[derive(Debug, Error)]
pub enum SettlementServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    InvalidRecord(#[from] RecordError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
