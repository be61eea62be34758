//! Error types for sekki-core.
//!
//! Most of these are recovered locally: an unavailable dataset degrades to
//! an empty catalog, a malformed entry is skipped, and an empty catalog
//! resolves to the "no season" sentinel. Only caller-supplied input
//! (reference dates, timezone names) surfaces as a hard error.

use thiserror::Error;

/// The main error type for sekki operations.
#[derive(Debug, Error)]
pub enum SekkiError {
    /// The season dataset is missing or could not be parsed.
    #[error("Season data unavailable: {0}")]
    DataUnavailable(String),

    /// A single record's start date could not be turned into a calendar date.
    #[error("Malformed start date '{start_date}' for season '{id}'")]
    MalformedDateEntry { id: String, start_date: String },

    /// No season could be selected because the catalog is empty.
    #[error("Season catalog is empty")]
    EmptyCatalog,

    /// Invalid reference date provided.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Invalid timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Result type alias for sekki operations.
pub type Result<T> = std::result::Result<T, SekkiError>;
