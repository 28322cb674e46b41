//! AviationStack flights endpoint client.
//!
//! Performs one bounded, blocking GET per call and normalizes the
//! response into a flat list of raw records, dropping flights the API
//! reports as on the ground.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::FetchError;

pub const FLIGHTS_API_URL: &str = "https://api.aviationstack.com/v1/flights";
pub const DEFAULT_LIMIT: u32 = 100;
pub const DEFAULT_OFFSET: u32 = 0;

const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Blocking client for the flights endpoint. Owns the HTTP client;
/// carries no state between calls.
pub struct FlightFetcher {
    client: Client,
    endpoint: String,
}

impl FlightFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_endpoint(FLIGHTS_API_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetch one page of raw flight records.
    ///
    /// Grounded flights (`live.is_ground == true`) are excluded; records
    /// without live status pass through. Order is as returned by the API.
    /// Does not retry; the caller owns retry policy.
    pub fn fetch(
        &self,
        api_key: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Value>, FetchError> {
        if api_key.is_empty() {
            return Err(FetchError::MissingApiKey);
        }

        tracing::debug!("GET {} (limit={}, offset={})", self.endpoint, limit, offset);

        let body = self
            .client
            .get(&self.endpoint)
            .query(&[("access_key", api_key)])
            .query(&[("limit", limit), ("offset", offset)])
            .send()?
            .error_for_status()?
            .text()?;

        let records = normalize_body(&body)?;
        let airborne = filter_airborne(records);

        tracing::debug!("Fetched {} airborne records", airborne.len());
        Ok(airborne)
    }
}

/// The endpoint returns either a bare record array or an object whose
/// `data` field holds the array; both normalize to a flat list.
fn normalize_body(body: &str) -> Result<Vec<Value>, FetchError> {
    let payload: Value = serde_json::from_str(body)?;
    match payload {
        Value::Array(records) => Ok(records),
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(FetchError::UnexpectedShape),
        },
        _ => Err(FetchError::UnexpectedShape),
    }
}

/// Keep records not marked on-ground. Absent live status counts as
/// airborne, not grounded.
fn filter_airborne(records: Vec<Value>) -> Vec<Value> {
    records.into_iter().filter(|r| !is_grounded(r)).collect()
}

fn is_grounded(record: &Value) -> bool {
    record
        .pointer("/live/is_ground")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
