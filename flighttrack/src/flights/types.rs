//! Flight data types

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One mapped flight. Immutable once built; identity fields are
/// guaranteed present by the mapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Carrier flight designator, e.g. "UA2402"
    pub flight_number: String,
    /// Operating airline name, e.g. "United Airlines"
    pub airline: String,
    /// Departure airport name, e.g. "Los Angeles International"
    pub departure_airport: String,
    /// Departure IATA code, e.g. "LAX"
    pub departure_code: String,
    /// Arrival airport name, e.g. "Logan International"
    pub arrival_airport: String,
    /// Arrival IATA code, e.g. "BOS"
    pub arrival_code: String,
    /// Actual departure time when reported, scheduled otherwise
    pub departure_time: Option<DateTime<FixedOffset>>,
    /// Actual arrival time when reported, scheduled otherwise
    pub arrival_time: Option<DateTime<FixedOffset>>,
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} flight {} from {} ({}) to {} ({})",
            self.airline,
            self.flight_number,
            self.departure_airport,
            self.departure_code,
            self.arrival_airport,
            self.arrival_code,
        )?;
        if let Some(departure) = &self.departure_time {
            write!(f, ", departing {}", departure.to_rfc3339())?;
        }
        Ok(())
    }
}
