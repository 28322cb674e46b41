//! Raw record to [`FlightRecord`] mapping.
//!
//! Raw records arrive as loosely-typed nested JSON; every sub-field is
//! optional at deserialization time and presence is enforced here. A
//! defective record is skipped with a warning, never aborting the batch.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

use crate::error::MapError;

use super::types::FlightRecord;

/// Raw nested groups as returned by the flights endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFlight {
    flight: RawDesignator,
    airline: RawAirline,
    departure: RawEndpoint,
    arrival: RawEndpoint,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDesignator {
    iata: Option<String>,
    number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAirline {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEndpoint {
    airport: Option<String>,
    iata: Option<String>,
    scheduled: Option<String>,
    actual: Option<String>,
}

/// Map one raw record into a [`FlightRecord`].
///
/// The IATA designator is preferred for the flight number, falling back
/// to the bare number. Any missing identity field rejects the record.
pub fn map_flight(record: &Value) -> Result<FlightRecord, MapError> {
    let raw: RawFlight = serde_json::from_value(record.clone())?;

    let flight_number = raw
        .flight
        .iata
        .or(raw.flight.number)
        .ok_or(MapError::MissingField("flight.iata"))?;
    let airline = raw
        .airline
        .name
        .ok_or(MapError::MissingField("airline.name"))?;
    let departure_airport = raw
        .departure
        .airport
        .ok_or(MapError::MissingField("departure.airport"))?;
    let departure_code = raw
        .departure
        .iata
        .ok_or(MapError::MissingField("departure.iata"))?;
    let arrival_airport = raw
        .arrival
        .airport
        .ok_or(MapError::MissingField("arrival.airport"))?;
    let arrival_code = raw
        .arrival
        .iata
        .ok_or(MapError::MissingField("arrival.iata"))?;

    let departure_time = endpoint_time(raw.departure.actual.as_deref(), raw.departure.scheduled.as_deref());
    let arrival_time = endpoint_time(raw.arrival.actual.as_deref(), raw.arrival.scheduled.as_deref());

    Ok(FlightRecord {
        flight_number,
        airline,
        departure_airport,
        departure_code,
        arrival_airport,
        arrival_code,
        departure_time,
        arrival_time,
    })
}

/// Map a batch, preserving input order. Defective records are skipped
/// and reported; they leave no placeholder in the output.
pub fn map_flights(records: &[Value]) -> Vec<FlightRecord> {
    let mut flights = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match map_flight(record) {
            Ok(flight) => flights.push(flight),
            Err(e) => tracing::warn!("Skipping record {}: {}", index, e),
        }
    }
    flights
}

/// Actual time wins when parseable; scheduled is the fallback. A
/// malformed timestamp yields None, never a default instant.
fn endpoint_time(actual: Option<&str>, scheduled: Option<&str>) -> Option<DateTime<FixedOffset>> {
    parse_instant(actual).or_else(|| parse_instant(scheduled))
}

fn parse_instant(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => Some(instant),
        Err(e) => {
            tracing::warn!("Unparseable timestamp '{}': {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ua2402() -> Value {
        json!({
            "flight": {"iata": "UA2402", "icao": "UAL2402", "number": "2402"},
            "airline": {"name": "United Airlines", "iata": "UA"},
            "departure": {
                "airport": "LAX International",
                "iata": "LAX",
                "scheduled": "2019-12-11T23:30:00+00:00"
            },
            "arrival": {
                "airport": "Logan International",
                "iata": "BOS",
                "scheduled": "2019-12-12T07:54:00+00:00"
            }
        })
    }

    #[test]
    fn test_map_complete_record() {
        let flight = map_flight(&ua2402()).unwrap();
        assert_eq!(flight.flight_number, "UA2402");
        assert_eq!(flight.airline, "United Airlines");
        assert_eq!(flight.departure_airport, "LAX International");
        assert_eq!(flight.departure_code, "LAX");
        assert_eq!(flight.arrival_airport, "Logan International");
        assert_eq!(flight.arrival_code, "BOS");
        assert_eq!(
            flight.departure_time.unwrap(),
            DateTime::parse_from_rfc3339("2019-12-11T23:30:00+00:00").unwrap()
        );
        assert_eq!(
            flight.arrival_time.unwrap(),
            DateTime::parse_from_rfc3339("2019-12-12T07:54:00+00:00").unwrap()
        );
    }

    #[test]
    fn test_actual_time_preferred_over_scheduled() {
        let mut record = ua2402();
        record["departure"]["actual"] = json!("2019-12-11T23:34:00+00:00");
        let flight = map_flight(&record).unwrap();
        assert_eq!(
            flight.departure_time.unwrap(),
            DateTime::parse_from_rfc3339("2019-12-11T23:34:00+00:00").unwrap()
        );
    }

    #[test]
    fn test_missing_timestamp_stays_absent() {
        let mut record = ua2402();
        record["departure"].as_object_mut().unwrap().remove("scheduled");
        let flight = map_flight(&record).unwrap();
        assert!(flight.departure_time.is_none());
        assert!(flight.arrival_time.is_some());
    }

    #[test]
    fn test_malformed_timestamp_stays_absent() {
        let mut record = ua2402();
        record["arrival"]["scheduled"] = json!("yesterday-ish");
        let flight = map_flight(&record).unwrap();
        assert!(flight.arrival_time.is_none());
    }

    #[test]
    fn test_flight_number_falls_back_to_bare_number() {
        let mut record = ua2402();
        record["flight"].as_object_mut().unwrap().remove("iata");
        let flight = map_flight(&record).unwrap();
        assert_eq!(flight.flight_number, "2402");
    }

    #[test]
    fn test_missing_airline_group_skipped() {
        let mut record = ua2402();
        record.as_object_mut().unwrap().remove("airline");
        let err = map_flight(&record).unwrap_err();
        assert!(matches!(err, MapError::MissingField("airline.name")));
    }

    #[test]
    fn test_missing_airport_code_skipped() {
        let mut record = ua2402();
        record["arrival"].as_object_mut().unwrap().remove("iata");
        let err = map_flight(&record).unwrap_err();
        assert!(matches!(err, MapError::MissingField("arrival.iata")));
    }

    #[test]
    fn test_wrong_typed_group_is_shape_error() {
        let record = json!({"flight": "UA2402"});
        let err = map_flight(&record).unwrap_err();
        assert!(matches!(err, MapError::Shape(_)));
    }

    #[test]
    fn test_batch_skips_defective_records_in_place() {
        let mut broken = ua2402();
        broken.as_object_mut().unwrap().remove("airline");

        let mut second = ua2402();
        second["flight"]["iata"] = json!("UA7");

        let records = vec![ua2402(), broken, second];
        let flights = map_flights(&records);
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].flight_number, "UA2402");
        assert_eq!(flights[1].flight_number, "UA7");
    }

    #[test]
    fn test_empty_batch() {
        assert!(map_flights(&[]).is_empty());
    }
}
