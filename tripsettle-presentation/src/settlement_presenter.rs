use crate::{
    amount::{format_cents, format_signed_cents},
    text_table::{Alignment, TextTableBuilder},
};
use std::{borrow::Cow, fmt};
use tripsettle_application::MemberDirectory;
use tripsettle_domain::{MemberId, Money, Settlement, SettlementReport, UserBalance};
use tripsettle_i18n as i18n;

pub struct SettlementPresenter;

pub struct SettlementView {
    pub balance_table: String,
    pub settlement_table: Option<String>,
    pub summary_lines: Vec<String>,
}

impl SettlementPresenter {
    pub fn render(report: &SettlementReport) -> SettlementView {
        let empty_directory = EmptyMemberDirectory;
        Self::render_with_members(report, &empty_directory)
    }

    pub fn render_with_members(
        report: &SettlementReport,
        member_directory: &dyn MemberDirectory,
    ) -> SettlementView {
        let balance_table = Self::build_balance_table(&report.balances, member_directory);
        let settlement_table = (!report.settlements.is_empty())
            .then(|| Self::build_settlement_table(&report.settlements, member_directory));

        SettlementView {
            balance_table,
            settlement_table,
            summary_lines: Self::summary_lines(report),
        }
    }

    pub fn build_balance_table(
        balances: &[UserBalance],
        member_directory: &dyn MemberDirectory,
    ) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::PAID),
                Cow::Borrowed(i18n::OWED),
                Cow::Borrowed(i18n::BALANCE),
            ]);

        for balance in balances {
            builder = builder.row([
                format_member_label(&balance.member, member_directory),
                Cow::Owned(format_cents(balance.total_paid)),
                Cow::Owned(format_cents(balance.total_owed)),
                Cow::Owned(format_signed_cents(balance.net_balance)),
            ]);
        }

        builder.build()
    }

    pub fn build_settlement_table(
        settlements: &[Settlement],
        member_directory: &dyn MemberDirectory,
    ) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ]);

        for settlement in settlements {
            builder = builder.row([
                format_member_label(&settlement.from, member_directory),
                format_member_label(&settlement.to, member_directory),
                Cow::Owned(format_cents(settlement.amount)),
            ]);
        }

        builder.build()
    }

    fn summary_lines(report: &SettlementReport) -> Vec<String> {
        let summary = &report.summary;
        let mut lines = vec![format!(
            "{}: {}",
            i18n::TOTAL_EXPENSES,
            format_cents(report.total_expenses)
        )];

        if report.settlements.is_empty() {
            lines.push(i18n::ALL_SETTLED.to_owned());
        } else {
            lines.push(i18n::transaction_summary(
                summary.total_transactions,
                summary.max_transactions_without_optimisation,
                summary.optimisation_savings,
            ));
        }
        if report.unattributed_items > 0 {
            lines.push(i18n::unattributed_items(report.unattributed_items));
        }
        if report.residual_imbalance > Money::ZERO {
            lines.push(i18n::residual_imbalance(format_cents(
                report.residual_imbalance,
            )));
        }

        lines
    }
}

impl fmt::Display for SettlementView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", i18n::BALANCES)?;
        writeln!(f, "{}", self.balance_table)?;
        if let Some(table) = &self.settlement_table {
            writeln!(f, "{}", i18n::SETTLEMENTS)?;
            writeln!(f, "{table}")?;
        }
        for line in &self.summary_lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

struct EmptyMemberDirectory;

impl MemberDirectory for EmptyMemberDirectory {
    fn display_name(&self, _member_id: &MemberId) -> Option<&str> {
        None
    }
}

pub(crate) fn format_member_label<'a>(
    member_id: &'a MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match member_directory.display_name(member_id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Borrowed(member_id.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tripsettle_domain::{Member, TransactionSummary};

    fn balance(id: &str, paid: i64, owed: i64) -> UserBalance {
        UserBalance {
            member: MemberId::from(id),
            total_paid: Money::from_cents(paid),
            total_owed: Money::from_cents(owed),
            net_balance: Money::from_cents(paid - owed),
        }
    }

    fn sample_report() -> SettlementReport {
        SettlementReport {
            balances: vec![balance("a", 2000, 1000), balance("b", 0, 1000)],
            settlements: vec![Settlement {
                from: MemberId::from("b"),
                to: MemberId::from("a"),
                amount: Money::from_cents(1000),
            }],
            total_expenses: Money::from_cents(2000),
            summary: TransactionSummary {
                total_transactions: 1,
                max_transactions_without_optimisation: 1,
                optimisation_savings: 0,
            },
            unattributed_items: 0,
            residual_imbalance: Money::ZERO,
        }
    }

    #[test]
    fn render_uses_display_name_when_available() {
        let members = vec![Member::new("a", "Alice"), Member::new("b", "Bob")];

        let view = SettlementPresenter::render_with_members(&sample_report(), &members);

        assert!(view.balance_table.contains("Alice"));
        assert!(view.balance_table.contains("+10.00"));
        assert!(view.balance_table.contains("-10.00"));
        let settlement_table = view.settlement_table.as_ref().expect("settlement table");
        assert!(settlement_table.contains("Bob"));
        assert!(settlement_table.contains("10.00"));
    }

    #[test]
    fn render_falls_back_to_member_ids_when_missing() {
        let directory: HashMap<MemberId, String> = HashMap::new();

        let view = SettlementPresenter::render_with_members(&sample_report(), &directory);

        let first_row = view.balance_table.lines().nth(2).expect("balance row");
        assert!(first_row.starts_with("a "));
    }

    #[test]
    fn settled_report_has_no_settlement_table() {
        let report = SettlementReport {
            balances: vec![balance("a", 500, 500)],
            settlements: vec![],
            summary: TransactionSummary::default(),
            total_expenses: Money::from_cents(500),
            ..sample_report()
        };

        let view = SettlementPresenter::render(&report);

        assert!(view.settlement_table.is_none());
        assert!(view.summary_lines.iter().any(|line| line == i18n::ALL_SETTLED));
    }

    #[test]
    fn summary_mentions_skipped_items_and_remainder() {
        let report = SettlementReport {
            unattributed_items: 2,
            residual_imbalance: Money::from_cents(1),
            ..sample_report()
        };

        let view = SettlementPresenter::render(&report);

        assert_eq!(
            view.summary_lines,
            vec![
                format!("{}: 20.00", i18n::TOTAL_EXPENSES),
                i18n::transaction_summary(1, 1, 0),
                i18n::unattributed_items(2),
                i18n::residual_imbalance("0.01"),
            ]
        );
    }

    #[test]
    fn display_joins_sections() {
        let text = SettlementPresenter::render(&sample_report()).to_string();

        let balances_at = text.find(i18n::BALANCES).expect("balances heading");
        let settlements_at = text.find(i18n::SETTLEMENTS).expect("settlements heading");
        assert!(balances_at < settlements_at);
        assert!(text.contains(i18n::TOTAL_EXPENSES));
    }
}
