// crates/tripmap-core/src/error.rs

use thiserror::Error;

/// Errors produced while loading datasets, resolving boundaries or talking
/// to the tracker backend.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("invalid boundary data: {0}")]
    InvalidData(String),

    /// One alias string mapped to two different country codes.
    /// The alias table rejects this at construction time.
    #[error("alias {alias:?} maps to both {first:?} and {second:?}")]
    AliasConflict {
        alias: String,
        first: String,
        second: String,
    },

    /// A country record violating the visited-date coupling.
    #[error("country {code:?}: visitedDate must be set exactly when status is visited")]
    InvalidVisitedDate { code: String },

    /// The backend answered with a non-success status.
    #[error("backend rejected request: {0}")]
    Backend(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "remote")]
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
