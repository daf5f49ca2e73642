//! Deterministic weather for degraded operation and tests.

use std::sync::Arc;

use chrono::{Local, Timelike};

use super::error::WeatherError;
use super::provider::{WeatherProvider, WeatherSource};
use super::{WeatherOrigin, WeatherSnapshot};

/// Plausible Algiers weather derived from the hour of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWeather;

impl MockWeather {
    /// Snapshot for a given local hour (0-23).
    pub fn at_hour(&self, hour: u32) -> WeatherSnapshot {
        let (temperature, description) = match hour {
            6..=11 => (22, "Sunny"),
            12..=17 => (26, "Partly Cloudy"),
            18..=23 => (20, "Clear"),
            _ => (18, "Clear"),
        };

        WeatherSnapshot {
            temperature,
            feels_like: temperature + 2,
            description: description.to_string(),
            humidity: 65,
            wind_speed_kmh: 12.5,
            icon: "01d".to_string(),
            origin: WeatherOrigin::Mock,
        }
    }

    /// Snapshot for the current local hour.
    pub fn snapshot(&self) -> WeatherSnapshot {
        self.at_hour(Local::now().hour())
    }
}

impl WeatherSource for MockWeather {
    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        Ok(self.snapshot())
    }
}

/// Always reports the same snapshot.
#[derive(Debug, Clone)]
pub struct FixedWeather(Arc<WeatherSnapshot>);

impl FixedWeather {
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self(Arc::new(snapshot))
    }

    /// Fixed mock weather, which has no effect on travel times.
    pub fn neutral() -> Self {
        Self::new(MockWeather.at_hour(12))
    }
}

impl WeatherProvider for FixedWeather {
    async fn current(&self) -> Arc<WeatherSnapshot> {
        Arc::clone(&self.0)
    }
}
