//! Recommendation criteria.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named objective a route can be recommended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Fastest,
    Cheapest,
    Greenest,
    Comfort,
    Balanced,
    Smart,
}

impl Criterion {
    /// Every criterion, in presentation order.
    pub const ALL: [Criterion; 6] = [
        Criterion::Fastest,
        Criterion::Cheapest,
        Criterion::Greenest,
        Criterion::Comfort,
        Criterion::Balanced,
        Criterion::Smart,
    ];

    /// Criteria each path is scored under, in evaluation order.
    ///
    /// Comfort and smart are selection-only.
    pub const SCORED: [Criterion; 4] = [
        Criterion::Fastest,
        Criterion::Cheapest,
        Criterion::Greenest,
        Criterion::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Fastest => "fastest",
            Criterion::Cheapest => "cheapest",
            Criterion::Greenest => "greenest",
            Criterion::Comfort => "comfort",
            Criterion::Balanced => "balanced",
            Criterion::Smart => "smart",
        }
    }

    pub fn is_scored(&self) -> bool {
        Self::SCORED.contains(self)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
