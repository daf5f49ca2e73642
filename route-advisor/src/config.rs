//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::advisor::DEFAULT_MAX_PATHS;
use crate::weather::WeatherConfig;

pub const ADDR_VAR: &str = "ROUTE_ADVISOR_ADDR";
pub const DATASET_VAR: &str = "ROUTE_ADVISOR_DATASET";
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
pub const CITY_VAR: &str = "WEATHER_CITY";
pub const TIMEOUT_VAR: &str = "WEATHER_TIMEOUT_SECS";
pub const CACHE_TTL_VAR: &str = "WEATHER_CACHE_TTL_SECS";
pub const MAX_PATHS_VAR: &str = "ROUTE_MAX_PATHS";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
    /// Dataset file; the builtin Algiers dataset when `None`.
    pub dataset: Option<PathBuf>,
    pub weather: WeatherConfig,
    /// Candidate paths searched per request.
    pub max_paths: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            dataset: None,
            weather: WeatherConfig::default(),
            max_paths: DEFAULT_MAX_PATHS,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr = parse(ADDR_VAR, get(ADDR_VAR).as_deref().unwrap_or(DEFAULT_ADDR))?;
        let dataset = get(DATASET_VAR).map(PathBuf::from);

        let mut weather = WeatherConfig::default();
        weather.api_key = get(API_KEY_VAR);
        if let Some(city) = get(CITY_VAR) {
            weather = weather.with_city(city);
        }
        if let Some(secs) = get(TIMEOUT_VAR) {
            weather = weather.with_timeout(Duration::from_secs(parse_positive(TIMEOUT_VAR, &secs)?));
        }
        if let Some(secs) = get(CACHE_TTL_VAR) {
            weather = weather.with_cache_ttl(Duration::from_secs(parse(CACHE_TTL_VAR, &secs)?));
        }

        let max_paths = match get(MAX_PATHS_VAR) {
            Some(value) => parse_positive(MAX_PATHS_VAR, &value)? as usize,
            None => DEFAULT_MAX_PATHS,
        };

        Ok(Self {
            addr,
            dataset,
            weather,
            max_paths,
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn parse_positive(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match parse::<u64>(key, value)? {
        0 => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
        n => Ok(n),
    }
}
