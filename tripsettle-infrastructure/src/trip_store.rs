use indexmap::IndexMap;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tripsettle_application::{BillRecord, MemberRecord, RepositoryError, TripId, TripRepository};

#[derive(Debug, Error)]
pub enum TripStoreError {
    #[error("failed to read trip export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed trip export: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("trip '{0}' appears more than once in the export")]
    DuplicateTrip(String),
}

#[derive(Deserialize)]
struct ExportDocument {
    #[serde(default)]
    trips: Vec<TripDocument>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripDocument {
    id: String,
    name: Option<String>,
    #[serde(default)]
    members: Vec<MemberRecord>,
    #[serde(default)]
    events: Vec<EventDocument>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventDocument {
    #[serde(default)]
    bills: Vec<BillRecord>,
}

struct StoredTrip {
    name: Option<String>,
    members: Vec<MemberRecord>,
    bills: Vec<BillRecord>,
}

/// Read-only repository over a JSON trip export, keeping trips in file order.
pub struct JsonTripStore {
    trips: IndexMap<TripId, StoredTrip>,
}

impl JsonTripStore {
    pub fn from_json_str(content: &str) -> Result<Self, TripStoreError> {
        let document: ExportDocument = serde_json::from_str(content)?;

        let mut trips = IndexMap::with_capacity(document.trips.len());
        for trip in document.trips {
            let id = TripId(trip.id);
            if trips.contains_key(&id) {
                return Err(TripStoreError::DuplicateTrip(id.0));
            }
            let bills = trip
                .events
                .into_iter()
                .flat_map(|event| event.bills)
                .collect();
            trips.insert(
                id,
                StoredTrip {
                    name: trip.name,
                    members: trip.members,
                    bills,
                },
            );
        }

        tracing::debug!("Loaded {} trips from export", trips.len());
        Ok(Self { trips })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, TripStoreError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TripStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn first_trip_id(&self) -> Option<&TripId> {
        self.trips.keys().next()
    }

    pub fn trip_name(&self, trip_id: &TripId) -> Option<&str> {
        self.trips.get(trip_id)?.name.as_deref()
    }

    fn trip(&self, trip_id: &TripId) -> Result<&StoredTrip, RepositoryError> {
        self.trips
            .get(trip_id)
            .ok_or_else(|| RepositoryError::TripNotFound(trip_id.clone()))
    }
}

impl TripRepository for JsonTripStore {
    fn members(&self, trip_id: &TripId) -> Result<Vec<MemberRecord>, RepositoryError> {
        Ok(self.trip(trip_id)?.members.clone())
    }

    fn bills(&self, trip_id: &TripId) -> Result<Vec<BillRecord>, RepositoryError> {
        Ok(self.trip(trip_id)?.bills.clone())
    }
}
