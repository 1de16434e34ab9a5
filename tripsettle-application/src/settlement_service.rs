use crate::{
    error::SettlementServiceError,
    model::{TripId, TripSettlement},
    ports::TripRepository,
};
use std::collections::HashSet;
use tripsettle_domain::{Bill, Member, MemberId, SettlementReportBuilder};

#[derive(Clone, Copy)]
pub struct SettlementService<'a> {
    repository: &'a dyn TripRepository,
}

impl<'a> SettlementService<'a> {
    pub fn new(repository: &'a dyn TripRepository) -> Self {
        Self { repository }
    }

    /// Loads a trip, coerces its records and computes the settlement report.
    pub fn generate_report(
        &self,
        trip_id: &TripId,
    ) -> Result<TripSettlement, SettlementServiceError> {
        let members = self
            .repository
            .members(trip_id)?
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_member(position))
            .collect::<Result<Vec<_>, _>>()?;
        let bills = self
            .repository
            .bills(trip_id)?
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_bill(position))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Loaded trip {} with {} members and {} bills",
            trip_id,
            members.len(),
            bills.len()
        );
        log_data_quality(&bills, &members);

        let report = SettlementReportBuilder.generate_settlement_report(&bills, &members)?;
        tracing::info!(
            "Settled trip {}: {} transfers instead of {}",
            trip_id,
            report.summary.total_transactions,
            report.summary.max_transactions_without_optimisation
        );

        Ok(TripSettlement {
            trip_id: trip_id.clone(),
            members,
            report,
        })
    }
}

fn log_data_quality(bills: &[Bill], members: &[Member]) {
    let known: HashSet<&MemberId> = members.iter().map(|member| &member.id).collect();

    for bill in bills {
        for item in bill.unattributed_items() {
            tracing::warn!(
                "Item '{}' on bill {} has no consumers and is left out of the settlement",
                item.name,
                bill.id
            );
        }

        let unknown = bill
            .payments
            .iter()
            .map(|payment| &payment.payer)
            .chain(bill.items.iter().flat_map(|item| &item.consumers))
            .filter(|id| !known.contains(id));
        for id in unknown {
            tracing::debug!("Bill {} references unknown member {}", bill.id, id);
        }
    }
}
