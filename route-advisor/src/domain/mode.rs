//! Transport mode identities and physical/economic parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Identity tag of a transport mode.
///
/// The well-known modes get their own variants; anything else found in a
/// dataset is carried as [`ModeTag::Other`] so that unknown tags can be
/// reported instead of rejected.
///
/// # Examples
///
/// ```
/// use route_advisor::domain::ModeTag;
///
/// assert_eq!(ModeTag::parse("Metro"), ModeTag::Metro);
/// assert_eq!(ModeTag::parse("yassir").as_str(), "yassir");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModeTag {
    Metro,
    Tram,
    Bus,
    Bicycle,
    Walk,
    Other(String),
}

impl ModeTag {
    /// Parse a tag, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Self {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "metro" => ModeTag::Metro,
            "tram" => ModeTag::Tram,
            "bus" => ModeTag::Bus,
            "bicycle" => ModeTag::Bicycle,
            "walk" => ModeTag::Walk,
            _ => ModeTag::Other(s),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ModeTag::Metro => "metro",
            ModeTag::Tram => "tram",
            ModeTag::Bus => "bus",
            ModeTag::Bicycle => "bicycle",
            ModeTag::Walk => "walk",
            ModeTag::Other(s) => s,
        }
    }

    /// True for human-powered modes, which are exposed to the weather.
    pub fn is_active(&self) -> bool {
        matches!(self, ModeTag::Bicycle | ModeTag::Walk)
    }
}

impl From<String> for ModeTag {
    fn from(s: String) -> Self {
        ModeTag::parse(&s)
    }
}

impl From<ModeTag> for String {
    fn from(tag: ModeTag) -> Self {
        match tag {
            ModeTag::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Debug for ModeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModeTag({})", self.as_str())
    }
}

impl fmt::Display for ModeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric parameters of a transport mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeParams {
    /// Average speed in km/h.
    pub speed_kmh: f64,
    /// Fixed fare per boarding, in DZD.
    pub base_fare: f64,
    /// Fare per kilometre, in DZD.
    pub cost_per_km: f64,
    /// CO2 emissions in kg per kilometre.
    pub emissions_per_km: f64,
    /// Comfort score in [0, 1].
    pub comfort: f64,
    /// Reliability/availability score in [0, 1].
    pub reliability: f64,
}

impl ModeParams {
    /// Parameters used for a mode tag that the catalog does not know.
    ///
    /// Contributes nothing to cost or emissions and a middling comfort.
    pub const NEUTRAL: ModeParams = ModeParams {
        speed_kmh: 0.0,
        base_fare: 0.0,
        cost_per_km: 0.0,
        emissions_per_km: 0.0,
        comfort: 0.5,
        reliability: 0.5,
    };

    /// Check the parameters are physically meaningful.
    pub fn validate(&self, tag: &ModeTag) -> Result<(), DomainError> {
        let invalid = |reason: &'static str| DomainError::InvalidModeParams {
            tag: tag.to_string(),
            reason,
        };

        if !(self.speed_kmh.is_finite() && self.speed_kmh > 0.0) {
            return Err(invalid("speed must be positive"));
        }
        if self.base_fare < 0.0 || self.cost_per_km < 0.0 {
            return Err(invalid("fares must not be negative"));
        }
        if self.emissions_per_km < 0.0 {
            return Err(invalid("emissions must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.comfort) {
            return Err(invalid("comfort must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.reliability) {
            return Err(invalid("reliability must be within [0, 1]"));
        }
        Ok(())
    }

    /// Fare for riding `distance_km` in a single boarding.
    pub fn fare(&self, distance_km: f64) -> f64 {
        self.base_fare + distance_km * self.cost_per_km
    }
}

/// A transport mode as listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportMode {
    pub tag: ModeTag,
    /// Human-readable name, e.g. "Algiers Metro".
    pub name: String,
    pub description: String,
    pub params: ModeParams,
}
