//! Area identity and geography.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DomainError, ModeTag};

/// Kilometres per degree of latitude.
const KM_PER_DEGREE: f64 = 111.32;

/// Stable numeric identifier of an area.
///
/// Ids order areas deterministically: catalogs list areas in id order and
/// the shortest-path search breaks weight ties on the lower id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(pub u32);

impl fmt::Debug for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AreaId({})", self.0)
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting values outside the valid lat/lng ranges.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(DomainError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Approximate surface distance in kilometres.
    ///
    /// Uses an equirectangular projection around the mean latitude, which is
    /// accurate to well under a percent at city scale.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let dlat = (other.lat - self.lat) * KM_PER_DEGREE;
        let mean_lat = ((self.lat + other.lat) / 2.0).to_radians();
        let dlng = (other.lng - self.lng) * KM_PER_DEGREE * mean_lat.cos();
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

/// Broad land-use category of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    Commercial,
    Residential,
    Historic,
    #[default]
    #[serde(other)]
    Other,
}

/// A named, geolocated zone of the city.
///
/// Areas are immutable once loaded into the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub id: AreaId,
    /// Primary (Latin-script) display name.
    pub name: String,
    /// Secondary (Arabic-script) display name. May be empty.
    pub arabic_name: String,
    pub kind: AreaKind,
    pub coordinates: Option<Coordinates>,
    /// Transport modes that stop in or pass through this area.
    pub modes: BTreeSet<ModeTag>,
    pub attractions: Vec<String>,
}

impl Area {
    /// Create an area with no secondary name, coordinates or attractions.
    pub fn new(
        id: AreaId,
        name: impl Into<String>,
        modes: impl IntoIterator<Item = ModeTag>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyAreaName(id.0));
        }
        Ok(Self {
            id,
            name,
            arabic_name: String::new(),
            kind: AreaKind::Other,
            coordinates: None,
            modes: modes.into_iter().collect(),
            attractions: Vec::new(),
        })
    }

    pub fn with_arabic_name(mut self, name: impl Into<String>) -> Self {
        self.arabic_name = name.into();
        self
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn with_kind(mut self, kind: AreaKind) -> Self {
        self.kind = kind;
        self
    }

    /// True if `query` equals either display name, ignoring case and
    /// surrounding whitespace.
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return false;
        }
        self.name.to_lowercase() == query
            || (!self.arabic_name.is_empty() && self.arabic_name.to_lowercase() == query)
    }

    /// True if the area supports the given mode.
    pub fn supports(&self, mode: &ModeTag) -> bool {
        self.modes.contains(mode)
    }
}
