#![warn(clippy::uninlined_format_args)]

pub mod trip_store;

pub use trip_store::{JsonTripStore, TripStoreError};
