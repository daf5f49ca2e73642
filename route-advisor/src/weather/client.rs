//! OpenWeatherMap HTTP client.
//!
//! Queries the current-weather endpoint for a single city and converts the
//! response into a [`WeatherSnapshot`].

use std::time::Duration;

use serde::Deserialize;

use super::error::WeatherError;
use super::{WeatherOrigin, WeatherSnapshot};

/// Default base URL for the current-weather endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Default city query.
pub const DEFAULT_CITY: &str = "Algiers,DZ";

/// Configuration for the weather client and service.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherConfig {
    /// API key; live weather is disabled without one.
    pub api_key: Option<String>,
    /// City query, `name,country`.
    pub city: String,
    /// Base URL for the API (defaults to production OpenWeatherMap)
    pub base_url: String,
    /// Upper bound on a single fetch.
    pub timeout: Duration,
    /// How long a live snapshot is reused.
    pub cache_ttl: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            city: DEFAULT_CITY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
            cache_ttl: Duration::from_secs(600),
        }
    }
}

impl WeatherConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

/// OpenWeatherMap API client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    city: String,
}

impl OpenWeatherClient {
    /// Create a client; fails if the config carries no API key.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| WeatherError::NotConfigured("OpenWeatherMap API key".to_string()))?;

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key,
            city: config.city.clone(),
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Fetch current conditions for the configured city.
    pub async fn current(&self) -> Result<WeatherSnapshot, WeatherError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", self.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "en"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    /// m/s
    speed: f64,
}

/// Convert a current-weather response body into a live snapshot.
fn parse_current(body: &str) -> Result<WeatherSnapshot, WeatherError> {
    let response: CurrentResponse = serde_json::from_str(body).map_err(|e| WeatherError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    let condition = response.weather.first().ok_or_else(|| WeatherError::Json {
        message: "empty weather condition list".to_string(),
        body: None,
    })?;

    Ok(WeatherSnapshot {
        temperature: response.main.temp.round() as i32,
        feels_like: response.main.feels_like.round() as i32,
        description: title_case(&condition.description),
        humidity: response.main.humidity,
        wind_speed_kmh: response.wind.speed * 3.6,
        icon: condition.icon.clone(),
        origin: WeatherOrigin::Live,
    })
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
