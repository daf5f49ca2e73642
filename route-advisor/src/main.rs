use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_advisor::advisor::RouteAdvisor;
use route_advisor::catalog::Dataset;
use route_advisor::config::AppConfig;
use route_advisor::graph::GraphConfig;
use route_advisor::weather::{WeatherBackend, WeatherService};
use route_advisor::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "route_advisor=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = AppConfig::from_env().map_err(|e| format!("Configuration error: {e}"))?;

    let dataset = match &config.dataset {
        Some(path) => Dataset::from_path(path),
        None => Dataset::builtin(),
    }
    .map_err(|e| format!("Failed to load dataset: {e}"))?;
    let city = dataset.city.clone();

    let catalogs = dataset
        .into_catalogs()
        .map_err(|e| format!("Invalid dataset: {e}"))?;
    info!(
        city = %city,
        areas = catalogs.areas.len(),
        modes = catalogs.modes.len(),
        "Loaded dataset"
    );

    let weather = WeatherService::new(WeatherBackend::from_config(&config.weather), &config.weather);
    let advisor = RouteAdvisor::new(catalogs, &GraphConfig::default(), weather)
        .with_max_paths(config.max_paths);
    info!(
        nodes = advisor.graph().node_count(),
        edges = advisor.graph().edge_count(),
        max_paths = advisor.max_paths(),
        "Route graph ready"
    );

    let app = create_router(AppState::new(advisor));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", config.addr))?;
    info!(addr = %config.addr, "Route advisor listening");
    info!("Endpoints: GET /health, GET /areas, GET /weather, POST /route");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {e}"))
}
