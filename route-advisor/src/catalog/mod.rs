//! Static city data: areas, distances and transport modes.
//!
//! Catalogs are loaded once at startup and are read-only afterwards, so
//! they can be shared across concurrent route queries without locking.

mod areas;
mod dataset;
mod error;
mod modes;

pub use areas::{AreaCatalog, DEFAULT_FALLBACK_DISTANCE_KM};
pub use dataset::{AreaRecord, Catalogs, Dataset, ModeRecord};
pub use error::CatalogError;
pub use modes::TransportModeCatalog;
