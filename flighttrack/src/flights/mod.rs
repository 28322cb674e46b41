//! Flight data pipeline: fetch raw records from the AviationStack
//! flights endpoint, then map them into typed [`FlightRecord`]s.

pub mod fetcher;
pub mod mapper;
pub mod types;

pub use fetcher::FlightFetcher;
pub use mapper::{map_flight, map_flights};
pub use types::FlightRecord;
