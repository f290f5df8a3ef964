//! Error types for sportcal.

use thiserror::Error;

/// A required form field was left empty.
///
/// Surfaced to the user as a blocking prompt; no state is mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fill in all required fields (missing: {})", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// Errors from the key-value stores.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Stored value under '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Could not persist '{key}': {source}")]
    Persistence {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The baseline data source could not be read.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Baseline request returned status {0}")]
    Status(u16),

    #[error("Could not read baseline file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Baseline document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Baseline document has no 'events' array")]
    MissingEvents,
}

/// Errors that can occur in sportcal operations.
#[derive(Error, Debug)]
pub enum SportCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("No event id left above {0}")]
    IdsExhausted(i64),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for sportcal operations.
pub type SportCalResult<T> = Result<T, SportCalError>;
