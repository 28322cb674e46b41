use thiserror::Error;

/// Failures that abort a whole fetch. Never retried internally;
/// the caller owns retry policy.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP call could not complete: connect failure, timeout,
    /// or a non-2xx status.
    #[error("transport error talking to the flights endpoint")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("response body is not valid JSON")]
    Decode(#[from] serde_json::Error),

    /// The body parsed as JSON but is neither a record array nor an
    /// object carrying one under `data`.
    #[error("flights payload carries no record array")]
    UnexpectedShape,

    #[error("API key must not be empty")]
    MissingApiKey,
}

/// Per-record mapping defects. Recovered locally: the record is
/// skipped and the batch continues.
#[derive(Debug, Error)]
pub enum MapError {
    /// The record is not an object of the expected nested-group shape.
    #[error("unrecognized record shape: {0}")]
    Shape(#[from] serde_json::Error),

    /// A required identity field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}
