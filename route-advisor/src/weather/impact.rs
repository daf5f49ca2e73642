//! Effect of the weather on travel time.

use crate::domain::ModeTag;

use super::{WeatherOrigin, WeatherSnapshot};

/// Lower bound of the impact factor.
pub const MIN_IMPACT: f64 = 0.5;

/// Upper bound of the impact factor.
pub const MAX_IMPACT: f64 = 1.5;

/// Travel-time multiplier for riding `mode` in `weather`, in [0.5, 1.5].
///
/// Only human-powered modes are affected: heat and rain scale them down,
/// mild temperatures scale them up. Mock snapshots always yield 1.0 so
/// that degraded weather data never skews a recommendation.
pub fn impact_factor(weather: &WeatherSnapshot, mode: &ModeTag) -> f64 {
    if weather.origin == WeatherOrigin::Mock || !mode.is_active() {
        return 1.0;
    }

    let mut impact: f64 = 1.0;

    let temp = weather.temperature;
    if temp > 35 {
        impact *= 0.4;
    } else if temp > 30 {
        impact *= 0.7;
    } else if (20..=25).contains(&temp) {
        impact *= 1.2;
    }

    if weather.is_rainy() {
        impact *= 0.3;
    }

    impact.clamp(MIN_IMPACT, MAX_IMPACT)
}
