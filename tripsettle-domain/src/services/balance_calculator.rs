use crate::model::{AmountOverflow, BalanceAccumulator, Bill, Member, UserBalance};

/// Aggregates bills into per-member paid, owed and net totals.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Returns one balance per member, in the order of `members`.
    ///
    /// Payments and consumptions referencing ids outside `members` are
    /// ignored, as are items nobody consumed. Totals that leave the range of
    /// integer cents are an error.
    pub fn calculate_user_balances(
        &self,
        bills: &[Bill],
        members: &[Member],
    ) -> Result<Vec<UserBalance>, AmountOverflow> {
        let mut accumulator = BalanceAccumulator::new(members);
        for bill in bills {
            accumulator.apply(bill)?;
        }
        accumulator.into_balances()
    }
}
