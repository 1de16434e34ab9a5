//! Loosely-typed trip documents as they come out of storage.
//!
//! Every field is optional and amounts are decimal major units. Records are
//! coerced once into strict domain types; nothing downstream sees an `Option`
//! that storage happened to leave empty.

use serde::{Deserialize, Serialize};
use tripsettle_domain::{Bill, BillItem, Member, MemberId, Money, PaymentEntry};

use crate::error::RecordError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItemRecord {
    pub name: Option<String>,
    pub price: Option<f64>,
    /// Ids of the members who consumed the item.
    #[serde(default, alias = "consumers")]
    pub members: Vec<String>,
    pub cost_per_member: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub member_id: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<BillItemRecord>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
}

impl MemberRecord {
    /// Members without a name fall back to their id for display.
    pub fn into_member(self, position: usize) -> Result<Member, RecordError> {
        let id = non_blank(self.id).ok_or(RecordError::MissingMemberId { position })?;
        let name = non_blank(self.name).unwrap_or_else(|| id.clone());
        Ok(Member::new(id, name))
    }
}

impl BillRecord {
    pub fn into_bill(self, position: usize) -> Result<Bill, RecordError> {
        let id = non_blank(self.id).ok_or(RecordError::MissingBillId { position })?;

        let items = self
            .items
            .into_iter()
            .map(|item| item.into_item(&id))
            .collect::<Result<Vec<_>, _>>()?;
        let payments = self
            .payments
            .into_iter()
            .map(|payment| payment.into_entry(&id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Bill::new(id, items, payments))
    }
}

impl BillItemRecord {
    fn into_item(self, bill: &str) -> Result<BillItem, RecordError> {
        let price = to_money(bill, "items.price", self.price)?;
        let consumers = self
            .members
            .into_iter()
            .filter_map(|id| non_blank(Some(id)))
            .map(MemberId::from);
        let item = BillItem::new(self.name.unwrap_or_default(), price, consumers);

        match self.cost_per_member {
            Some(cost) => Ok(item.with_cost_per_consumer(to_money(
                bill,
                "items.costPerMember",
                Some(cost),
            )?)),
            None => Ok(item),
        }
    }
}

impl PaymentRecord {
    fn into_entry(self, bill: &str) -> Result<PaymentEntry, RecordError> {
        let payer = non_blank(self.member_id).ok_or_else(|| RecordError::MissingField {
            bill: bill.to_owned(),
            field: "payments.memberId",
        })?;
        let amount = to_money(bill, "payments.amount", self.amount)?;
        Ok(PaymentEntry::new(payer, amount))
    }
}

fn to_money(bill: &str, field: &'static str, value: Option<f64>) -> Result<Money, RecordError> {
    let value = value.ok_or_else(|| RecordError::MissingField {
        bill: bill.to_owned(),
        field,
    })?;
    Money::from_major_units(value).map_err(|source| RecordError::InvalidAmount {
        bill: bill.to_owned(),
        field,
        source,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
