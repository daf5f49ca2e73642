//! Aggregate route metrics.

use serde::Serialize;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Aggregate figures for one evaluated path.
///
/// All fields are rounded at construction; scores and selection work on
/// the rounded values, so they are reproducible from what is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// Weather-adjusted travel time in minutes, 1 decimal.
    pub total_time: f64,
    /// Kilometres, 1 decimal.
    pub total_distance: f64,
    /// Whole DZD.
    pub total_cost: u32,
    /// kg CO2, 2 decimals.
    pub total_emissions: f64,
    /// Mean comfort over segments in [0, 1], 2 decimals.
    pub comfort: f64,
    /// Multiplier applied to the base time, 2 decimals.
    pub weather_factor: f64,
}

impl Metrics {
    /// Build metrics from raw totals, applying the display rounding.
    pub fn from_totals(
        time_mins: f64,
        distance_km: f64,
        cost: f64,
        emissions_kg: f64,
        comfort: f64,
        weather_factor: f64,
    ) -> Self {
        Self {
            total_time: round_to(time_mins, 1),
            total_distance: round_to(distance_km, 1),
            total_cost: cost.max(0.0).round() as u32,
            total_emissions: round_to(emissions_kg, 2),
            comfort: round_to(comfort, 2),
            weather_factor: round_to(weather_factor, 2),
        }
    }
}
