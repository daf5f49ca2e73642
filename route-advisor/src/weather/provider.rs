//! Weather capability traits.

use std::future::Future;
use std::sync::Arc;

use crate::domain::ModeTag;

use super::error::WeatherError;
use super::{WeatherSnapshot, impact};

/// A raw source of weather observations that may fail.
pub trait WeatherSource {
    /// Fetch the current conditions.
    fn fetch(&self) -> impl Future<Output = Result<WeatherSnapshot, WeatherError>> + Send;
}

/// Infallible weather capability used by route computation.
///
/// This abstraction allows the advisor to be tested with fixed weather.
pub trait WeatherProvider {
    /// Current conditions; never fails, degrading to mock weather instead.
    fn current(&self) -> impl Future<Output = Arc<WeatherSnapshot>> + Send;

    /// Travel-time multiplier for `mode` under `weather`, in [0.5, 1.5].
    fn impact_factor(&self, weather: &WeatherSnapshot, mode: &ModeTag) -> f64 {
        impact::impact_factor(weather, mode)
    }
}
