use tripsettle_application::{RepositoryError, SettlementServiceError};
use tripsettle_domain::ReportError;
use tripsettle_i18n as i18n;

pub fn format_service_error(error: &SettlementServiceError) -> String {
    match error {
        SettlementServiceError::Repository(RepositoryError::TripNotFound(trip_id)) => {
            i18n::trip_not_found(trip_id)
        }
        SettlementServiceError::InvalidRecord(record_error) => {
            i18n::invalid_record(record_error)
        }
        SettlementServiceError::Report(ReportError::NoBills) => i18n::NO_BILLS_FOUND.to_owned(),
        SettlementServiceError::Report(ReportError::Overflow(_)) => {
            i18n::AMOUNT_OVERFLOW.to_owned()
        }
    }
}
