use thiserror::Error;

use crate::{
    model::{AmountOverflow, Bill, Member, Money, SettlementReport, TransactionSummary},
    services::{BalanceCalculator, SettlementOptimizer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The caller supplied no bills; a report would be vacuous.
    #[error("no bills found")]
    NoBills,
    #[error(transparent)]
    Overflow(#[from] AmountOverflow),
}

/// Builds the full settlement report for one set of bills.
pub struct SettlementReportBuilder;

impl SettlementReportBuilder {
    pub fn generate_settlement_report(
        &self,
        bills: &[Bill],
        members: &[Member],
    ) -> Result<SettlementReport, ReportError> {
        if bills.is_empty() {
            return Err(ReportError::NoBills);
        }

        let optimizer = SettlementOptimizer;
        let balances = BalanceCalculator.calculate_user_balances(bills, members)?;
        let settlements = optimizer.optimise_settlements(&balances);

        let max_possible_transactions = optimizer.count_participants(&balances).max_transactions();
        let summary = TransactionSummary {
            total_transactions: settlements.len(),
            max_transactions_without_optimisation: max_possible_transactions,
            optimisation_savings: max_possible_transactions.saturating_sub(settlements.len()),
        };

        let total_expenses = Money::checked_sum(
            bills
                .iter()
                .flat_map(|bill| &bill.items)
                .filter(|item| item.is_attributable())
                .map(|item| item.price),
        )?;
        let unattributed_items: usize = bills
            .iter()
            .map(|bill| bill.unattributed_items().count())
            .sum();
        let residual_imbalance = Money::checked_sum(
            optimizer
                .apply_settlements(&balances, &settlements)
                .into_iter()
                .map(|(_, net)| net.abs()),
        )?;

        Ok(SettlementReport {
            balances,
            settlements,
            total_expenses,
            summary,
            unattributed_items,
            residual_imbalance,
        })
    }
}
