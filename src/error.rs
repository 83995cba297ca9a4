//! Error types for corkboard operations

use thiserror::Error;

/// The error type for the few fallible corkboard operations.
///
/// Only two things can go wrong in this crate: constructing a task from a
/// malformed date string, and persistence. Views and queries are total over
/// well-formed inputs and never fail; asking a week for a day it does not
/// cover is answered with an empty collection, not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A textual due date could not be parsed as a `YYYY-MM-DD` calendar date.
    /// No partially-valid task is ever constructed.
    #[error("invalid due date {input:?}: {source}")]
    InvalidDateFormat {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The task store has no previous state to load. Callers are expected to
    /// fall back to seed data.
    #[error("no saved task list available: {0}")]
    PersistenceUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for corkboard operations
pub type Result<T> = std::result::Result<T, Error>;
