//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the data model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    #[error("invalid manifest entry for page {page_id}: {message}")]
    InvalidManifestEntry { page_id: String, message: String },

    #[error("malformed {kind} block payload: {message}")]
    MalformedBlock { kind: String, message: String },
}
