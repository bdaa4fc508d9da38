//! Error types for the NBA shot chart library

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ShotChartError>;

#[derive(Error, Debug)]
pub enum ShotChartError {
    #[error("Invalid {field}: {value} (must be greater than zero)")]
    Validation { field: &'static str, value: i64 },

    #[error("Stats request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Stats API returned status code {code} for {url}")]
    Status { code: u16, url: String },

    #[error("Unexpected stats response: {message}")]
    Decode { message: String },

    #[error("Malformed row {index}: {len} columns, expected at least {expected}")]
    MalformedRow {
        index: usize,
        len: usize,
        expected: usize,
    },

    #[error("No directory entry for: {name}")]
    LookupMiss { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ShotChartError {
    pub(crate) fn decode(message: impl Into<String>) -> Self {
        ShotChartError::Decode {
            message: message.into(),
        }
    }

    /// True for failures raised before any request left the process.
    pub fn is_validation(&self) -> bool {
        matches!(self, ShotChartError::Validation { .. })
    }
}
