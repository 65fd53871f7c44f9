//! Trend store error types
//!
//! Defines all errors that can occur while reading a snapshot.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trend snapshot
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database file could not be opened
    #[error("Failed to open trend database {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Reading a candidate relation failed
    #[error("Failed to read relation '{relation}': {source}")]
    Query {
        relation: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Relation is readable but lacks a required column
    #[error("Relation '{relation}' is missing required column '{column}'")]
    MissingColumn { relation: String, column: String },

    /// A row violates the record invariants
    #[error("Invalid row in relation '{relation}': {reason}")]
    InvalidRow { relation: String, reason: String },

    /// Every candidate relation failed
    #[error("No usable trend source among {tried:?}: {last}")]
    NoUsableSource { tried: Vec<String>, last: String },

    /// Any other SQLite failure
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// True when the error means the relation does not exist at all
    pub fn is_missing_relation(&self) -> bool {
        match self {
            StoreError::Query { source, .. } => is_no_such_table(source),
            _ => false,
        }
    }
}

fn is_no_such_table(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(_, Some(message)) if message.starts_with("no such table")
    )
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
