use crate::{
    error::RepositoryError,
    model::TripId,
    records::{BillRecord, MemberRecord},
};
use std::collections::HashMap;
use tripsettle_domain::{Member, MemberId};

pub trait TripRepository: Send + Sync {
    fn members(&self, trip_id: &TripId) -> Result<Vec<MemberRecord>, RepositoryError>;

    /// Every bill of the trip, across all of its events.
    fn bills(&self, trip_id: &TripId) -> Result<Vec<BillRecord>, RepositoryError>;
}

pub trait MemberDirectory: Send + Sync {
    fn display_name(&self, member_id: &MemberId) -> Option<&str>;
}

impl MemberDirectory for HashMap<MemberId, String> {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.get(member_id).map(String::as_str)
    }
}

impl MemberDirectory for Vec<Member> {
    fn display_name(&self, member_id: &MemberId) -> Option<&str> {
        self.iter()
            .find(|member| member.id == *member_id)
            .map(|member| member.name.as_str())
    }
}
