//! Domain error types.
//!
//! These errors represent validation failures when constructing domain
//! values. They are distinct from dataset IO and weather errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Area has a blank primary name
    #[error("area {0} has an empty name")]
    EmptyAreaName(u32),

    /// Latitude or longitude out of range
    #[error("invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// Mode parameters are not physically meaningful
    #[error("invalid parameters for mode {tag}: {reason}")]
    InvalidModeParams { tag: String, reason: &'static str },

    /// A path must visit at least two areas
    #[error("path must contain at least two areas, got {0}")]
    PathTooShort(usize),

    /// One mode is needed per traversed edge
    #[error("path with {areas} areas needs {} modes, got {modes}", .areas.saturating_sub(1))]
    ModeCountMismatch { areas: usize, modes: usize },
}
