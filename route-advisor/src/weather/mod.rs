//! Current weather and its effect on travel times.
//!
//! Route computation depends only on [`WeatherProvider`], which never fails:
//! [`WeatherService`] bounds each fetch with a timeout and substitutes
//! [`MockWeather`] when the live source is unavailable.

mod client;
mod error;
mod impact;
mod mock;
mod provider;
mod service;
mod types;

pub use client::{DEFAULT_CITY, OpenWeatherClient, WeatherConfig};
pub use error::WeatherError;
pub use impact::{MAX_IMPACT, MIN_IMPACT, impact_factor};
pub use mock::{FixedWeather, MockWeather};
pub use provider::{WeatherProvider, WeatherSource};
pub use service::{WeatherBackend, WeatherService};
pub use types::{WeatherOrigin, WeatherSnapshot};
