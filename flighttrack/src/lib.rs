//! Real-time flight lookup against the AviationStack API.
//!
//! One bounded fetch per invocation: the fetcher pulls a page of raw
//! flight records, the mapper turns each record into a [`FlightRecord`],
//! and the caller consumes the result.

pub mod config;
pub mod error;
pub mod flights;
pub mod logging;

pub use error::{FetchError, MapError};
pub use flights::{FlightFetcher, FlightRecord, map_flights};
