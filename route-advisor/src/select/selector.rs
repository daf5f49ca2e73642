//! Per-criterion winner selection.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::evaluate::{EvaluatedRoute, Metrics};
use crate::weather::WeatherSnapshot;

use super::score::{score, smart_value};
use super::Criterion;

/// A route scored under one criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub route: Arc<EvaluatedRoute>,
    /// The criterion this recommendation was scored under, which may
    /// differ from the category it wins.
    pub criterion: Criterion,
    pub score: Option<f64>,
    pub weather: Arc<WeatherSnapshot>,
}

impl Recommendation {
    pub fn metrics(&self) -> &Metrics {
        &self.route.metrics
    }
}

/// Winners keyed by category. Categories without a winner are absent.
pub type Selection = BTreeMap<Criterion, Recommendation>;

/// One recommendation per (route, scored criterion), routes outermost.
pub fn score_routes(routes: &[Arc<EvaluatedRoute>], weather: &Arc<WeatherSnapshot>) -> Vec<Recommendation> {
    routes
        .iter()
        .flat_map(|route| {
            Criterion::SCORED.into_iter().map(move |criterion| Recommendation {
                route: Arc::clone(route),
                criterion,
                score: score(criterion, &route.metrics),
                weather: Arc::clone(weather),
            })
        })
        .collect()
}

/// Pick the winner of every category.
///
/// Fastest, cheapest and greenest minimise their raw metric, comfort
/// maximises mean comfort. Balanced takes the highest score among the
/// balanced-scored recommendations only, smart the highest
/// [`smart_value`] across all of them. Ties go to the earliest
/// recommendation. An empty input yields an empty selection.
pub fn select_winners(recommendations: &[Recommendation]) -> Selection {
    let mut winners = Selection::new();
    let all = || recommendations.iter();

    let categories: [(Criterion, Option<&Recommendation>); 6] = [
        (Criterion::Fastest, first_max_by(all(), |r| -r.metrics().total_time)),
        (Criterion::Cheapest, first_max_by(all(), |r| -f64::from(r.metrics().total_cost))),
        (Criterion::Greenest, first_max_by(all(), |r| -r.metrics().total_emissions)),
        (Criterion::Comfort, first_max_by(all(), |r| r.metrics().comfort)),
        (
            Criterion::Balanced,
            first_max_by(
                all().filter(|r| r.criterion == Criterion::Balanced),
                |r| r.score.unwrap_or(f64::NEG_INFINITY),
            ),
        ),
        (Criterion::Smart, first_max_by(all(), |r| smart_value(r.metrics()))),
    ];

    for (category, winner) in categories {
        if let Some(winner) = winner {
            winners.insert(category, winner.clone());
        }
    }
    winners
}

/// The first item with the greatest key.
///
/// `Iterator::max_by` keeps the last of equal elements; selection needs
/// the first.
fn first_max_by<'a, I, F>(items: I, key: F) -> Option<&'a Recommendation>
where
    I: Iterator<Item = &'a Recommendation>,
    F: Fn(&Recommendation) -> f64,
{
    let mut best: Option<(&Recommendation, f64)> = None;
    for item in items {
        let value = key(item);
        match best {
            Some((_, current)) if value.total_cmp(&current) != Ordering::Greater => {}
            _ => best = Some((item, value)),
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AreaId, ModeTag, RoutePath};
    use crate::weather::MockWeather;

    fn route(hops: u32, time: f64, cost: u32, emissions: f64, comfort: f64) -> Arc<EvaluatedRoute> {
        let areas = (1..=hops + 1).map(AreaId).collect();
        let modes = (0..hops).map(|_| ModeTag::Bus).collect();
        Arc::new(EvaluatedRoute {
            path: RoutePath::new(areas, modes).unwrap(),
            segments: Vec::new(),
            metrics: Metrics {
                total_time: time,
                total_distance: 1.0,
                total_cost: cost,
                total_emissions: emissions,
                comfort,
                weather_factor: 1.0,
            },
            unknown_modes: Vec::new(),
        })
    }

    fn weather() -> Arc<WeatherSnapshot> {
        Arc::new(MockWeather.at_hour(9))
    }

    #[test]
    fn scores_each_route_under_each_scored_criterion() {
        let routes = vec![route(1, 20.0, 50, 0.5, 0.8), route(2, 30.0, 30, 1.0, 0.5)];
        let recs = score_routes(&routes, &weather());

        assert_eq!(recs.len(), 8);
        let criteria: Vec<_> = recs[..4].iter().map(|r| r.criterion).collect();
        assert_eq!(criteria, Criterion::SCORED);
        assert!(recs[..4].iter().all(|r| Arc::ptr_eq(&r.route, &routes[0])));
        assert!(recs.iter().all(|r| r.score.is_some()));
    }

    #[test]
    fn each_category_uses_its_own_rule() {
        let quick = route(1, 15.0, 120, 1.2, 0.6);
        let cheap = route(1, 45.0, 0, 0.0, 0.7);
        let comfy = route(2, 25.0, 80, 0.4, 0.9);
        let routes = vec![quick.clone(), cheap.clone(), comfy.clone()];

        let winners = select_winners(&score_routes(&routes, &weather()));

        assert!(Arc::ptr_eq(&winners[&Criterion::Fastest].route, &quick));
        assert!(Arc::ptr_eq(&winners[&Criterion::Cheapest].route, &cheap));
        assert!(Arc::ptr_eq(&winners[&Criterion::Greenest].route, &cheap));
        assert!(Arc::ptr_eq(&winners[&Criterion::Comfort].route, &comfy));
        assert_eq!(winners[&Criterion::Balanced].criterion, Criterion::Balanced);
        assert_eq!(winners.len(), 6);
    }

    #[test]
    fn raw_winners_keep_their_first_scored_criterion() {
        let routes = vec![route(1, 15.0, 50, 0.5, 0.8)];
        let winners = select_winners(&score_routes(&routes, &weather()));

        // All four scored copies tie; the first (fastest) wins.
        assert_eq!(winners[&Criterion::Cheapest].criterion, Criterion::Fastest);
        assert_eq!(winners[&Criterion::Smart].criterion, Criterion::Fastest);
    }

    #[test]
    fn smart_trades_time_against_cost() {
        // 0.6 * (1 - 10/120) + 0.4 * (1 - 400/500) = 0.63
        let fast_pricey = route(1, 10.0, 400, 0.0, 0.5);
        // 0.6 * (1 - 30/120) + 0.4 * (1 - 50/500) = 0.81
        let steady = route(1, 30.0, 50, 0.0, 0.5);
        let routes = vec![fast_pricey.clone(), steady.clone()];

        let winners = select_winners(&score_routes(&routes, &weather()));
        assert!(Arc::ptr_eq(&winners[&Criterion::Fastest].route, &fast_pricey));
        assert!(Arc::ptr_eq(&winners[&Criterion::Smart].route, &steady));
    }

    #[test]
    fn ties_go_to_the_first_route() {
        let a = route(1, 20.0, 50, 0.5, 0.8);
        let b = route(2, 20.0, 50, 0.5, 0.8);
        let winners = select_winners(&score_routes(&[a.clone(), b], &weather()));

        for recommendation in winners.values() {
            assert!(Arc::ptr_eq(&recommendation.route, &a));
        }
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select_winners(&[]).is_empty());
    }

    #[test]
    fn balanced_needs_balanced_recommendations() {
        let only_fastest = vec![Recommendation {
            route: route(1, 20.0, 50, 0.5, 0.8),
            criterion: Criterion::Fastest,
            score: Some(50.0),
            weather: weather(),
        }];

        let winners = select_winners(&only_fastest);
        assert!(!winners.contains_key(&Criterion::Balanced));
        assert!(winners.contains_key(&Criterion::Fastest));
        assert!(winners.contains_key(&Criterion::Smart));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_route() -> impl Strategy<Value = (f64, u32, f64, f64)> {
            (1.0f64..200.0, 0u32..600, 0.0f64..5.0, 0.0f64..=1.0)
        }

        proptest! {
            #[test]
            fn winners_are_extremal(drawn in prop::collection::vec(arb_route(), 1..8)) {
                let routes: Vec<_> = drawn
                    .iter()
                    .map(|&(t, c, e, k)| route(1, t, c, e, k))
                    .collect();
                let winners = select_winners(&score_routes(&routes, &weather()));

                let fastest = winners[&Criterion::Fastest].metrics().total_time;
                let cheapest = winners[&Criterion::Cheapest].metrics().total_cost;
                let greenest = winners[&Criterion::Greenest].metrics().total_emissions;
                let comfort = winners[&Criterion::Comfort].metrics().comfort;
                let smart = smart_value(winners[&Criterion::Smart].metrics());
                for r in &routes {
                    prop_assert!(fastest <= r.metrics.total_time);
                    prop_assert!(cheapest <= r.metrics.total_cost);
                    prop_assert!(greenest <= r.metrics.total_emissions);
                    prop_assert!(comfort >= r.metrics.comfort);
                    prop_assert!(smart >= smart_value(&r.metrics));
                }
            }
        }
    }
}
