use crate::model::{MemberId, Money, SETTLEMENT_SLACK, Settlement, Standing, UserBalance};

/// Greedy largest-remaining-first matching of debtors to creditors.
pub struct SettlementOptimizer;

/// Working copy of one side of an open balance; `remaining` is always positive.
struct Outstanding<'a> {
    member: &'a MemberId,
    remaining: Money,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParticipantCounts {
    pub creditors: usize,
    pub debtors: usize,
}

impl ParticipantCounts {
    /// Payments needed if every creditor settled individually with every debtor.
    pub fn max_transactions(self) -> usize {
        self.creditors * self.debtors
    }
}

impl SettlementOptimizer {
    pub fn optimise_settlements(&self, balances: &[UserBalance]) -> Vec<Settlement> {
        let mut creditors: Vec<Outstanding<'_>> = Vec::new();
        let mut debtors: Vec<Outstanding<'_>> = Vec::new();
        for balance in balances {
            let side = match balance.standing() {
                Standing::Creditor => &mut creditors,
                Standing::Debtor => &mut debtors,
                Standing::Settled => continue,
            };
            side.push(Outstanding {
                member: &balance.member,
                remaining: balance.net_balance.abs(),
            });
        }

        // Stable sorts keep input order among equal amounts.
        creditors.sort_by(|lhs, rhs| rhs.remaining.cmp(&lhs.remaining));
        debtors.sort_by(|lhs, rhs| rhs.remaining.cmp(&lhs.remaining));

        let mut settlements = Vec::with_capacity(creditors.len() + debtors.len());
        let (mut creditor_idx, mut debtor_idx) = (0, 0);

        while creditor_idx < creditors.len() && debtor_idx < debtors.len() {
            let creditor = &mut creditors[creditor_idx];
            let debtor = &mut debtors[debtor_idx];
            let amount = creditor.remaining.min(debtor.remaining);

            if amount > SETTLEMENT_SLACK {
                settlements.push(Settlement {
                    from: debtor.member.clone(),
                    to: creditor.member.clone(),
                    amount,
                });
            }

            creditor.remaining -= amount;
            debtor.remaining -= amount;

            if creditor.remaining <= SETTLEMENT_SLACK {
                creditor_idx += 1;
            }
            if debtor.remaining <= SETTLEMENT_SLACK {
                debtor_idx += 1;
            }
        }

        settlements
    }

    pub fn count_participants(&self, balances: &[UserBalance]) -> ParticipantCounts {
        balances
            .iter()
            .fold(ParticipantCounts::default(), |mut counts, balance| {
                match balance.standing() {
                    Standing::Creditor => counts.creditors += 1,
                    Standing::Debtor => counts.debtors += 1,
                    Standing::Settled => {}
                }
                counts
            })
    }

    /// Net balances after every settlement is paid, in balance order.
    pub fn apply_settlements(
        &self,
        balances: &[UserBalance],
        settlements: &[Settlement],
    ) -> Vec<(MemberId, Money)> {
        let mut remaining: Vec<(MemberId, Money)> = balances
            .iter()
            .map(|balance| (balance.member.clone(), balance.net_balance))
            .collect();

        for settlement in settlements {
            if let Some((_, net)) = remaining.iter_mut().find(|(id, _)| *id == settlement.from) {
                *net += settlement.amount;
            }
            if let Some((_, net)) = remaining.iter_mut().find(|(id, _)| *id == settlement.to) {
                *net -= settlement.amount;
            }
        }

        remaining
    }
}
