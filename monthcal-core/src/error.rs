//! Error types for monthcal.

use thiserror::Error;

/// Errors that can occur in monthcal operations.
#[derive(Error, Debug)]
pub enum CalError {
    #[error("Event time conflicts with an existing event on {date}: '{existing}'")]
    Overlap { date: String, existing: String },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Unknown color '{0}'. Expected one of: blue, red, green, purple")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CalError {
    fn from(err: config::ConfigError) -> Self {
        CalError::Config(err.to_string())
    }
}

/// Result type alias for monthcal operations.
pub type CalResult<T> = Result<T, CalError>;
