//! Domain types for the route advisor.
//!
//! This module contains the core domain model: areas, transport modes and
//! paths. Types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod area;
mod details;
mod error;
mod mode;
mod path;

pub use area::{Area, AreaId, AreaKind, Coordinates};
pub use details::{BicyclePack, ModeDetails, NetworkInfo};
pub use error::DomainError;
pub use mode::{ModeParams, ModeTag, TransportMode};
pub use path::{Hop, RoutePath};
