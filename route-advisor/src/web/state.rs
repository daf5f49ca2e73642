//! Application state for the web layer.

use std::sync::Arc;

use crate::advisor::RouteAdvisor;
use crate::weather::{WeatherBackend, WeatherService};

/// The advisor as served over HTTP.
pub type Advisor = RouteAdvisor<WeatherService<WeatherBackend>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Route engine with catalogs, graph and weather
    pub advisor: Arc<Advisor>,
}

impl AppState {
    pub fn new(advisor: Advisor) -> Self {
        Self {
            advisor: Arc::new(advisor),
        }
    }
}
