//! Route recommendations between two named areas.
//!
//! Ties the pipeline together: resolve names, search the graph, fetch the
//! weather, evaluate each path and select a winner per criterion. Every
//! failure inside the pipeline surfaces as an empty [`Selection`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::{AreaCatalog, Catalogs, TransportModeCatalog};
use crate::domain::Area;
use crate::evaluate::{EvaluatedRoute, PathEvaluator};
use crate::graph::{GraphConfig, RouteGraph};
use crate::select::{Selection, score_routes, select_winners};
use crate::weather::WeatherProvider;

/// Number of candidate paths searched per request unless configured.
pub const DEFAULT_MAX_PATHS: usize = 1;

/// Shared, read-only recommendation engine.
///
/// Catalogs and graph are built once and never mutated, so a single
/// advisor serves any number of concurrent requests.
#[derive(Debug)]
pub struct RouteAdvisor<W> {
    areas: Arc<AreaCatalog>,
    modes: Arc<TransportModeCatalog>,
    graph: Arc<RouteGraph>,
    weather: W,
    max_paths: usize,
}

impl<W: WeatherProvider> RouteAdvisor<W> {
    /// Build the route graph from `catalogs` and wrap everything up.
    pub fn new(catalogs: Catalogs, config: &GraphConfig, weather: W) -> Self {
        let graph = RouteGraph::build(&catalogs.areas, &catalogs.modes, config);
        Self {
            areas: Arc::new(catalogs.areas),
            modes: Arc::new(catalogs.modes),
            graph: Arc::new(graph),
            weather,
            max_paths: DEFAULT_MAX_PATHS,
        }
    }

    /// Number of candidate paths to search for; at least one.
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths.max(1);
        self
    }

    pub fn areas(&self) -> &AreaCatalog {
        &self.areas
    }

    pub fn modes(&self) -> &TransportModeCatalog {
        &self.modes
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn weather(&self) -> &W {
        &self.weather
    }

    pub fn max_paths(&self) -> usize {
        self.max_paths
    }

    /// Resolve a display name in either script, case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&Area> {
        self.areas.resolve(name)
    }

    /// Best route per criterion from `start` to `end`.
    ///
    /// Returns an empty selection if either name is unknown, both name the
    /// same area, or no path connects them. Weather is only fetched once a
    /// path exists.
    pub async fn compute_recommendations(&self, start: &str, end: &str) -> Selection {
        let (Some(from), Some(to)) = (self.areas.resolve(start), self.areas.resolve(end)) else {
            debug!(start, end, "Unresolved area");
            return Selection::new();
        };

        if from.id == to.id {
            debug!(area = %from.name, "Start and end are the same area");
            return Selection::new();
        }

        let paths = self.graph.find_paths(from.id, to.id, self.max_paths);
        if paths.is_empty() {
            debug!(from = %from.name, to = %to.name, "No path found");
            return Selection::new();
        }

        let weather = self.weather.current().await;
        let evaluator = PathEvaluator::new(&self.areas, &self.modes);

        let routes: Vec<Arc<EvaluatedRoute>> = paths
            .iter()
            .filter_map(|found| {
                let path = found.to_route_path().ok()?;
                let factor = self.weather.impact_factor(&weather, path.first_mode());
                let route = evaluator.evaluate(path, found.minutes, factor);
                for mode in &route.unknown_modes {
                    warn!(mode = %mode, "Mode missing from catalog, priced with neutral defaults");
                }
                Some(Arc::new(route))
            })
            .collect();

        let winners = select_winners(&score_routes(&routes, &weather));
        debug!(
            from = %from.name,
            to = %to.name,
            paths = routes.len(),
            categories = winners.len(),
            "Computed recommendations"
        );
        winners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Dataset;
    use crate::domain::ModeTag;
    use crate::select::Criterion;
    use crate::weather::{FixedWeather, WeatherOrigin, WeatherSnapshot};

    fn advisor(weather: FixedWeather) -> RouteAdvisor<FixedWeather> {
        let catalogs = Dataset::builtin().unwrap().into_catalogs().unwrap();
        RouteAdvisor::new(catalogs, &GraphConfig::default(), weather)
    }

    #[tokio::test]
    async fn metro_wins_every_category_for_a_single_path() {
        let advisor = advisor(FixedWeather::neutral());
        let winners = advisor.compute_recommendations("City Center", "El Harrach").await;

        assert_eq!(winners.len(), Criterion::ALL.len());
        let fastest = &winners[&Criterion::Fastest];
        assert_eq!(fastest.route.path.modes(), [ModeTag::Metro]);
        assert_eq!(fastest.metrics().total_time, 17.8);
        assert_eq!(fastest.metrics().total_cost, 93);
    }

    #[tokio::test]
    async fn names_resolve_case_insensitively() {
        let advisor = advisor(FixedWeather::neutral());
        let winners = advisor.compute_recommendations("  city center ", "EL HARRACH").await;
        assert!(!winners.is_empty());
    }

    #[tokio::test]
    async fn unknown_and_identical_areas_are_empty() {
        let advisor = advisor(FixedWeather::neutral());
        assert!(advisor.compute_recommendations("Nonexistent Place", "Hydra").await.is_empty());
        assert!(advisor.compute_recommendations("Hydra", "Nonexistent Place").await.is_empty());
        assert!(advisor.compute_recommendations("Hydra", "hydra").await.is_empty());
    }

    #[tokio::test]
    async fn live_weather_slows_active_first_legs() {
        let hot = WeatherSnapshot {
            temperature: 33,
            feels_like: 35,
            description: "Clear Sky".into(),
            humidity: 30,
            wind_speed_kmh: 5.0,
            icon: "01d".into(),
            origin: WeatherOrigin::Live,
        };
        let advisor = advisor(FixedWeather::new(hot)).with_max_paths(5);
        let winners = advisor.compute_recommendations("Kouba", "Hydra").await;

        // Bus is fastest and unaffected by heat.
        let fastest = &winners[&Criterion::Fastest];
        assert_eq!(fastest.route.path.modes(), [ModeTag::Bus]);
        assert_eq!(fastest.metrics().weather_factor, 1.0);

        // Walking is free; 2 km at 5 km/h slowed by 0.7.
        let cheapest = &winners[&Criterion::Cheapest];
        assert_eq!(cheapest.route.path.modes(), [ModeTag::Walk]);
        assert_eq!(cheapest.metrics().weather_factor, 0.7);
        assert_eq!(cheapest.metrics().total_time, 16.8);
    }

    #[tokio::test]
    async fn more_paths_never_lose_the_fastest() {
        let single = advisor(FixedWeather::neutral());
        let several = advisor(FixedWeather::neutral()).with_max_paths(5);
        assert_eq!(several.max_paths(), 5);

        let one = single.compute_recommendations("Bab El Oued", "El Harrach").await;
        let many = several.compute_recommendations("Bab El Oued", "El Harrach").await;

        assert_eq!(
            one[&Criterion::Fastest].metrics().total_time,
            many[&Criterion::Fastest].metrics().total_time
        );
        assert!(
            many[&Criterion::Cheapest].metrics().total_cost
                <= one[&Criterion::Cheapest].metrics().total_cost
        );
    }

    #[test]
    fn max_paths_is_at_least_one() {
        assert_eq!(advisor(FixedWeather::neutral()).with_max_paths(0).max_paths(), 1);
    }
}
