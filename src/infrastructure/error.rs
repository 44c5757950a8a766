//! Infrastructure-level errors (remote fetch failures)

use thiserror::Error;

/// Errors from the remote children-listing endpoint.
///
/// None of these are caught or retried anywhere; any of them aborts the
/// whole batch, including manifest entries not yet processed.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request to {url} failed with status {status}")]
    Http { status: u16, url: String },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;
