//! JSON-friendly view of a settlement report.
//!
//! Amounts are decimal strings so consumers never round-trip cents through
//! floating point.

use crate::{amount::format_cents, settlement_presenter::format_member_label};
use serde::Serialize;
use tripsettle_application::MemberDirectory;
use tripsettle_domain::SettlementReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExport {
    pub balances: Vec<BalanceExport>,
    pub settlements: Vec<SettlementExport>,
    pub total_expenses: String,
    pub summary: SummaryExport,
    pub unattributed_items: usize,
    pub residual_imbalance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceExport {
    pub member_id: String,
    pub name: String,
    pub total_paid: String,
    pub total_owed: String,
    pub net_balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementExport {
    pub from: String,
    pub from_name: String,
    pub to: String,
    pub to_name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryExport {
    pub total_transactions: usize,
    pub max_transactions_without_optimisation: usize,
    pub optimisation_savings: usize,
}

impl ReportExport {
    pub fn from_report(report: &SettlementReport, member_directory: &dyn MemberDirectory) -> Self {
        let balances = report
            .balances
            .iter()
            .map(|balance| BalanceExport {
                member_id: balance.member.to_string(),
                name: format_member_label(&balance.member, member_directory).into_owned(),
                total_paid: format_cents(balance.total_paid),
                total_owed: format_cents(balance.total_owed),
                net_balance: format_cents(balance.net_balance),
            })
            .collect();
        let settlements = report
            .settlements
            .iter()
            .map(|settlement| SettlementExport {
                from: settlement.from.to_string(),
                from_name: format_member_label(&settlement.from, member_directory).into_owned(),
                to: settlement.to.to_string(),
                to_name: format_member_label(&settlement.to, member_directory).into_owned(),
                amount: format_cents(settlement.amount),
            })
            .collect();

        Self {
            balances,
            settlements,
            total_expenses: format_cents(report.total_expenses),
            summary: SummaryExport {
                total_transactions: report.summary.total_transactions,
                max_transactions_without_optimisation: report
                    .summary
                    .max_transactions_without_optimisation,
                optimisation_savings: report.summary.optimisation_savings,
            },
            unattributed_items: report.unattributed_items,
            residual_imbalance: format_cents(report.residual_imbalance),
        }
    }
}
