//! Yen's k-shortest loopless paths.

use tracing::debug;

use crate::domain::AreaId;

use super::build::RouteGraph;
use super::search::{Exclusions, ShortestPath};

/// Extend `best` with up to `k - 1` further paths to `end`.
///
/// Each round takes every prefix of the last accepted path as a root,
/// hides the hops that accepted paths sharing that root already use, and
/// searches for a spur path from the root's last area. The cheapest
/// candidate becomes the next accepted path. Equal-weight candidates are
/// ordered by area sequence.
pub(super) fn k_shortest(
    graph: &RouteGraph,
    best: ShortestPath,
    end: AreaId,
    k: usize,
) -> Vec<ShortestPath> {
    let mut accepted = vec![best];
    let mut candidates: Vec<ShortestPath> = Vec::new();

    while accepted.len() < k {
        let last = &accepted[accepted.len() - 1];

        for i in 0..last.areas.len() - 1 {
            let spur = last.areas[i];
            let root_areas = &last.areas[..=i];
            let root_modes = &last.modes[..i];

            let mut exclusions = Exclusions::default();
            for path in &accepted {
                if path.areas.len() > i + 1
                    && path.areas[..=i] == *root_areas
                    && path.modes[..i] == *root_modes
                {
                    exclusions
                        .edges
                        .insert((path.areas[i], path.areas[i + 1], path.modes[i].clone()));
                }
            }
            exclusions.nodes.extend(root_areas[..i].iter().copied());

            let spur_path = graph.dijkstra(spur, end, &exclusions);
            if !spur_path.is_found() {
                continue;
            }

            let Some(root_minutes) = root_cost(graph, root_areas, last) else {
                continue;
            };

            let mut areas = root_areas[..i].to_vec();
            areas.extend(spur_path.areas);
            let mut modes = root_modes.to_vec();
            modes.extend(spur_path.modes);

            let candidate = ShortestPath {
                areas,
                modes,
                minutes: root_minutes + spur_path.minutes,
            };

            let seen = accepted.iter().chain(&candidates).any(|p| same_route(p, &candidate));
            if !seen {
                candidates.push(candidate);
            }
        }

        let Some(next) = take_cheapest(&mut candidates) else {
            break;
        };
        accepted.push(next);
    }

    debug!(requested = k, found = accepted.len(), "k-shortest paths complete");
    accepted
}

/// Weight of the first `root_areas.len() - 1` hops of `path`.
fn root_cost(graph: &RouteGraph, root_areas: &[AreaId], path: &ShortestPath) -> Option<f64> {
    let mut total = 0.0;
    for (hop, pair) in root_areas.windows(2).enumerate() {
        total += graph.edge_minutes(pair[0], pair[1], &path.modes[hop])?;
    }
    Some(total)
}

fn same_route(a: &ShortestPath, b: &ShortestPath) -> bool {
    a.areas == b.areas && a.modes == b.modes
}

fn take_cheapest(candidates: &mut Vec<ShortestPath>) -> Option<ShortestPath> {
    let index = candidates
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.minutes
                .total_cmp(&b.minutes)
                .then_with(|| a.areas.cmp(&b.areas))
        })
        .map(|(i, _)| i)?;
    Some(candidates.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Dataset;
    use crate::domain::ModeTag;
    use crate::graph::GraphConfig;

    fn builtin() -> (crate::catalog::AreaCatalog, RouteGraph) {
        let catalogs = Dataset::builtin().unwrap().into_catalogs().unwrap();
        let graph = RouteGraph::build(&catalogs.areas, &catalogs.modes, &GraphConfig::default());
        (catalogs.areas, graph)
    }

    #[test]
    fn first_path_is_the_shortest() {
        let (areas, graph) = builtin();
        let center = areas.resolve("City Center").unwrap().id;
        let harrach = areas.resolve("El Harrach").unwrap().id;

        let paths = graph.find_paths(center, harrach, 4);
        assert_eq!(paths[0], graph.shortest_path(center, harrach));
    }

    #[test]
    fn paths_are_sorted_and_distinct() {
        let (areas, graph) = builtin();
        let center = areas.resolve("City Center").unwrap().id;
        let harrach = areas.resolve("El Harrach").unwrap().id;

        let paths = graph.find_paths(center, harrach, 6);
        assert_eq!(paths.len(), 6);

        for pair in paths.windows(2) {
            assert!(pair[0].minutes <= pair[1].minutes);
        }
        for (i, a) in paths.iter().enumerate() {
            for b in &paths[i + 1..] {
                assert!(!same_route(a, b), "duplicate path {a:?}");
            }
        }
    }

    #[test]
    fn alternative_modes_count_as_paths() {
        let (areas, graph) = builtin();
        let center = areas.resolve("City Center").unwrap().id;
        let harrach = areas.resolve("El Harrach").unwrap().id;

        let paths = graph.find_paths(center, harrach, 3);
        let direct_modes: Vec<_> = paths
            .iter()
            .filter(|p| p.areas.len() == 2)
            .map(|p| p.modes[0].clone())
            .collect();

        // Metro (17.75) then tram (25.4) are the two fastest direct rides.
        assert_eq!(direct_modes[..2], [ModeTag::Metro, ModeTag::Tram]);
    }

    #[test]
    fn paths_are_loopless_and_weights_match_edges() {
        let (areas, graph) = builtin();
        let bab = areas.resolve("Bab El Oued").unwrap().id;
        let harrach = areas.resolve("El Harrach").unwrap().id;

        for path in graph.find_paths(bab, harrach, 8) {
            let mut seen = std::collections::HashSet::new();
            assert!(path.areas.iter().all(|a| seen.insert(*a)), "loop in {path:?}");

            let total: f64 = path
                .areas
                .windows(2)
                .zip(&path.modes)
                .map(|(pair, mode)| graph.edge_minutes(pair[0], pair[1], mode).unwrap())
                .sum();
            assert!((total - path.minutes).abs() < 1e-9);
        }
    }

    /// Weights of every loopless path from `at` to `end`, by exhaustive search.
    fn all_path_weights(
        graph: &RouteGraph,
        at: AreaId,
        end: AreaId,
        visited: &mut Vec<AreaId>,
        minutes: f64,
        out: &mut Vec<f64>,
    ) {
        if at == end {
            out.push(minutes);
            return;
        }
        for edge in graph.edges_from(at) {
            if visited.contains(&edge.to) {
                continue;
            }
            visited.push(edge.to);
            all_path_weights(graph, edge.to, end, visited, minutes + edge.minutes, out);
            visited.pop();
        }
    }

    #[test]
    fn matches_exhaustive_enumeration() {
        let (areas, graph) = builtin();
        let ids: Vec<_> = areas.areas().iter().map(|a| a.id).collect();

        for &from in &ids {
            for &to in &ids {
                if from == to {
                    continue;
                }
                let mut expected = Vec::new();
                all_path_weights(&graph, from, to, &mut vec![from], 0.0, &mut expected);
                expected.sort_by(f64::total_cmp);

                for k in [1, 3, 10, 40] {
                    let found: Vec<_> = graph.find_paths(from, to, k).iter().map(|p| p.minutes).collect();
                    assert_eq!(found.len(), k.min(expected.len()), "{from} -> {to}, k = {k}");
                    for (got, want) in found.iter().zip(&expected) {
                        assert!((got - want).abs() < 1e-6, "{from} -> {to}, k = {k}: {got} vs {want}");
                    }
                }
            }
        }
    }

    #[test]
    fn stops_when_candidates_run_out() {
        let json = r#"{
            "areas": [
                {"id": 1, "name": "A", "transport": ["walk"]},
                {"id": 2, "name": "B", "transport": ["walk"]}
            ],
            "transport_modes": {
                "walk": {"name": "Walking", "speed_kmh": 5, "cost_per_km": 0, "base_cost": 0,
                         "emissions_kg_per_km": 0, "comfort": 0.7, "reliability": 1.0}
            },
            "distance_matrix": {"A": {"B": 1.0}}
        }"#;
        let catalogs = Dataset::from_json(json).unwrap().into_catalogs().unwrap();
        let graph = RouteGraph::build(&catalogs.areas, &catalogs.modes, &GraphConfig::default());

        let paths = graph.find_paths(AreaId(1), AreaId(2), 5);
        assert_eq!(paths.len(), 1);
    }
}
