use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use fxhash::FxHashMap;
use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive, prelude::ToPrimitive};
use thiserror::Error;

/// Monetary amount in integer cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyConversionError {
    #[error("amount is not a finite number")]
    NonFinite,
    #[error("amount does not fit into integer cents")]
    OutOfRange,
}

/// A sum of amounts left the range of integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("amounts overflow integer cents")]
pub struct AmountOverflow;

const CENT_SCALE: u32 = 2;

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts a decimal amount in major units (e.g. `12.345` dollars) into
    /// cents, rounding half away from zero.
    pub fn from_major_units(amount: f64) -> Result<Self, MoneyConversionError> {
        if !amount.is_finite() {
            return Err(MoneyConversionError::NonFinite);
        }
        let decimal = Decimal::from_f64(amount).ok_or(MoneyConversionError::OutOfRange)?;
        Self::from_decimal(decimal)
    }

    pub fn from_decimal(amount: Decimal) -> Result<Self, MoneyConversionError> {
        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_i64())
            .filter(|cents| *cents != i64::MIN)
            .map(Self)
            .ok_or(MoneyConversionError::OutOfRange)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    /// Two-decimal representation, e.g. `-0.05` or `12.30`.
    pub fn as_decimal(self) -> Decimal {
        Decimal::new(self.0, CENT_SCALE)
    }

    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, AmountOverflow> {
        self.0.checked_add(rhs.0).map(Self).ok_or(AmountOverflow)
    }

    /// Fails on overflow and on `i64::MIN`, whose magnitude has no `Money`.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, AmountOverflow> {
        self.0
            .checked_sub(rhs.0)
            .filter(|cents| *cents != i64::MIN)
            .map(Self)
            .ok_or(AmountOverflow)
    }

    pub fn checked_sum<I>(amounts: I) -> Result<Self, AmountOverflow>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |total, amount| total.checked_add(amount))
    }

    /// Splits the amount into `parts` equal shares, rounding each share to the
    /// nearest cent (half away from zero). Returns `None` when `parts` is zero.
    pub fn split_evenly(self, parts: usize) -> Option<Self> {
        let parts = i64::try_from(parts).ok().filter(|parts| *parts > 0)?;
        let quotient = self.0 / parts;
        let remainder = self.0 % parts;
        let share = if remainder.abs() * 2 >= parts {
            quotient + self.0.signum()
        } else {
            quotient
        };
        Some(Self(share))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BillId(pub String);

impl From<&str> for BillId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for BillId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}

impl Member {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillItem {
    pub name: String,
    pub price: Money,
    pub consumers: Vec<MemberId>,
    /// Precomputed share stored alongside the item, if any.
    pub cost_per_consumer: Option<Money>,
}

impl BillItem {
    pub fn new<I, M>(name: impl Into<String>, price: Money, consumers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<MemberId>,
    {
        Self {
            name: name.into(),
            price,
            consumers: consumers.into_iter().map(Into::into).collect(),
            cost_per_consumer: None,
        }
    }

    pub fn with_cost_per_consumer(mut self, cost: Money) -> Self {
        self.cost_per_consumer = Some(cost);
        self
    }

    /// Items without consumers cannot be costed and are left unattributed.
    pub fn is_attributable(&self) -> bool {
        !self.consumers.is_empty()
    }

    pub fn cost_per_consumer(&self) -> Option<Money> {
        if !self.is_attributable() {
            return None;
        }
        self.cost_per_consumer
            .or_else(|| self.price.split_evenly(self.consumers.len()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentEntry {
    pub payer: MemberId,
    pub amount: Money,
}

impl PaymentEntry {
    pub fn new(payer: impl Into<MemberId>, amount: Money) -> Self {
        Self {
            payer: payer.into(),
            amount,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bill {
    pub id: BillId,
    pub items: Vec<BillItem>,
    pub payments: Vec<PaymentEntry>,
}

impl Bill {
    pub fn new(id: impl Into<BillId>, items: Vec<BillItem>, payments: Vec<PaymentEntry>) -> Self {
        Self {
            id: id.into(),
            items,
            payments,
        }
    }

    pub fn unattributed_items(&self) -> impl Iterator<Item = &BillItem> + '_ {
        self.items.iter().filter(|item| !item.is_attributable())
    }
}

/// Balances within this many cents of zero count as settled.
pub const SETTLEMENT_SLACK: Money = Money::from_cents(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standing {
    Creditor,
    Debtor,
    Settled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserBalance {
    pub member: MemberId,
    pub total_paid: Money,
    pub total_owed: Money,
    pub net_balance: Money,
}

impl UserBalance {
    pub fn zero(member: MemberId) -> Self {
        Self {
            member,
            total_paid: Money::ZERO,
            total_owed: Money::ZERO,
            net_balance: Money::ZERO,
        }
    }

    pub fn standing(&self) -> Standing {
        if self.net_balance > SETTLEMENT_SLACK {
            Standing::Creditor
        } else if self.net_balance < -SETTLEMENT_SLACK {
            Standing::Debtor
        } else {
            Standing::Settled
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransactionSummary {
    pub total_transactions: usize,
    pub max_transactions_without_optimisation: usize,
    pub optimisation_savings: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementReport {
    pub balances: Vec<UserBalance>,
    pub settlements: Vec<Settlement>,
    pub total_expenses: Money,
    pub summary: TransactionSummary,
    /// Items skipped because nobody consumed them.
    pub unattributed_items: usize,
    /// Sum of absolute balances left over once every settlement is applied.
    pub residual_imbalance: Money,
}

/// Accumulates paid and owed totals per member, in member input order.
pub struct BalanceAccumulator<'a> {
    members: &'a [Member],
    index: FxHashMap<&'a MemberId, usize>,
    paid: Vec<Money>,
    owed: Vec<Money>,
}

impl<'a> BalanceAccumulator<'a> {
    pub fn new(members: &'a [Member]) -> Self {
        let mut index = FxHashMap::default();
        for (idx, member) in members.iter().enumerate() {
            // Duplicate ids accumulate into their first occurrence.
            index.entry(&member.id).or_insert(idx);
        }

        Self {
            members,
            index,
            paid: vec![Money::ZERO; members.len()],
            owed: vec![Money::ZERO; members.len()],
        }
    }

    pub fn apply(&mut self, bill: &Bill) -> Result<(), AmountOverflow> {
        for payment in &bill.payments {
            if let Some(&idx) = self.index.get(&payment.payer) {
                self.paid[idx] = self.paid[idx].checked_add(payment.amount)?;
            }
        }

        for item in &bill.items {
            let Some(share) = item.cost_per_consumer() else {
                continue;
            };
            for consumer in &item.consumers {
                if let Some(&idx) = self.index.get(consumer) {
                    self.owed[idx] = self.owed[idx].checked_add(share)?;
                }
            }
        }

        Ok(())
    }

    pub fn into_balances(self) -> Result<Vec<UserBalance>, AmountOverflow> {
        self.members
            .iter()
            .zip(self.paid)
            .zip(self.owed)
            .map(|((member, total_paid), total_owed)| {
                Ok(UserBalance {
                    member: member.id.clone(),
                    total_paid,
                    total_owed,
                    net_balance: total_paid.checked_sub(total_owed)?,
                })
            })
            .collect()
    }
}
