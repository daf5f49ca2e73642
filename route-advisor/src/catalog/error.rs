//! Catalog loading error types.

use crate::domain::DomainError;

/// Errors that can occur while loading a transport dataset.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Dataset file could not be read
    #[error("failed to read dataset {path}: {message}")]
    Io { path: String, message: String },

    /// Dataset is not valid JSON for the expected schema
    #[error("dataset JSON error: {0}")]
    Json(String),

    /// Two areas share an id or a display name
    #[error("duplicate area: {0}")]
    DuplicateArea(String),

    /// Distance table refers to an area that is not listed
    #[error("distance table refers to unknown area {0:?}")]
    UnknownArea(String),

    /// Tabulated distance is negative or not finite
    #[error("invalid distance {km} km from {from:?} to {to:?}")]
    InvalidDistance { from: String, to: String, km: f64 },

    /// A record failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}
