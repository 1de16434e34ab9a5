use std::fmt;

use tripsettle_domain::{Member, SettlementReport};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TripId(pub String);

impl TripId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TripId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A computed report together with the members it was computed for.
#[derive(Debug)]
pub struct TripSettlement {
    pub trip_id: TripId,
    pub members: Vec<Member>,
    pub report: SettlementReport,
}
