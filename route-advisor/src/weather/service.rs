//! Time-bounded, cached weather with mock fallback.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::{debug, info, warn};

use super::client::{OpenWeatherClient, WeatherConfig};
use super::error::WeatherError;
use super::mock::MockWeather;
use super::provider::{WeatherProvider, WeatherSource};
use super::WeatherSnapshot;

/// The weather source selected at startup.
#[derive(Debug, Clone)]
pub enum WeatherBackend {
    Live(OpenWeatherClient),
    Mock(MockWeather),
}

impl WeatherBackend {
    /// Live weather if the config has a usable API key, mock otherwise.
    pub fn from_config(config: &WeatherConfig) -> Self {
        match OpenWeatherClient::new(config) {
            Ok(client) => {
                info!(city = %config.city, "Using live weather");
                Self::Live(client)
            }
            Err(err) => {
                info!(reason = %err, "Using mock weather");
                Self::Mock(MockWeather)
            }
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

impl WeatherSource for WeatherBackend {
    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        match self {
            Self::Live(client) => client.current().await,
            Self::Mock(mock) => mock.fetch().await,
        }
    }
}

/// Weather provider wrapping a source.
///
/// Each fetch is bounded by the configured timeout. Live snapshots are
/// cached per city for the configured TTL; on error or timeout the mock
/// snapshot for the current hour is returned and nothing is cached.
pub struct WeatherService<S> {
    source: S,
    fallback: MockWeather,
    timeout: Duration,
    city: String,
    cache: MokaCache<String, Arc<WeatherSnapshot>>,
}

impl<S: WeatherSource> WeatherService<S> {
    pub fn new(source: S, config: &WeatherConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.cache_ttl)
            .max_capacity(16)
            .build();

        Self {
            source,
            fallback: MockWeather,
            timeout: config.timeout,
            city: config.city.clone(),
            cache,
        }
    }

    /// Fetch from the source, bypassing the cache.
    pub async fn fetch_live(&self) -> Result<WeatherSnapshot, WeatherError> {
        match tokio::time::timeout(self.timeout, self.source.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(WeatherError::Timeout(self.timeout)),
        }
    }

    /// Drop any cached snapshot.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: WeatherSource + Send + Sync> WeatherProvider for WeatherService<S> {
    async fn current(&self) -> Arc<WeatherSnapshot> {
        if let Some(cached) = self.cache.get(&self.city).await {
            return cached;
        }

        match self.fetch_live().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                if snapshot.is_live() {
                    debug!(city = %self.city, temperature = snapshot.temperature, "Caching live weather");
                    self.cache.insert(self.city.clone(), Arc::clone(&snapshot)).await;
                }
                snapshot
            }
            Err(err) => {
                warn!(city = %self.city, error = %err, "Weather unavailable, falling back to mock");
                Arc::new(self.fallback.snapshot())
            }
        }
    }
}
