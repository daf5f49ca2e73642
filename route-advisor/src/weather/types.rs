//! Weather snapshot types.

use serde::{Deserialize, Serialize};

/// Where a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherOrigin {
    /// Observed by the live weather service.
    Live,
    /// Synthesised locally because live data was unavailable.
    Mock,
}

/// Current weather conditions in the city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature in °C.
    pub temperature: i32,
    /// Apparent temperature in °C.
    pub feels_like: i32,
    /// e.g. "Light Rain"
    pub description: String,
    /// Relative humidity in percent.
    pub humidity: u8,
    pub wind_speed_kmh: f64,
    /// OpenWeatherMap icon code, e.g. "01d".
    pub icon: String,
    pub origin: WeatherOrigin,
}

impl WeatherSnapshot {
    pub fn is_live(&self) -> bool {
        self.origin == WeatherOrigin::Live
    }

    /// True if the description mentions rain.
    pub fn is_rainy(&self) -> bool {
        self.description.to_lowercase().contains("rain")
    }
}
