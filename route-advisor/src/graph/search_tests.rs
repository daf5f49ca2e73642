//! Unit tests for the shortest-path search.

use super::*;
use crate::catalog::{AreaCatalog, Dataset, TransportModeCatalog};
use crate::domain::{Area, ModeParams, TransportMode};
use crate::graph::GraphConfig;

fn builtin() -> (AreaCatalog, RouteGraph) {
    let catalogs = Dataset::builtin().unwrap().into_catalogs().unwrap();
    let graph = RouteGraph::build(&catalogs.areas, &catalogs.modes, &GraphConfig::default());
    (catalogs.areas, graph)
}

fn id(areas: &AreaCatalog, name: &str) -> AreaId {
    areas.resolve(name).unwrap().id
}

fn walk_mode() -> TransportMode {
    TransportMode {
        tag: ModeTag::Walk,
        name: "Walking".into(),
        description: String::new(),
        params: ModeParams {
            speed_kmh: 6.0,
            base_fare: 0.0,
            cost_per_km: 0.0,
            emissions_per_km: 0.0,
            comfort: 0.7,
            reliability: 1.0,
        },
    }
}

/// Build a walk-only graph from `(id, modes)` areas and tabulated distances.
fn walk_graph(areas: &[(u32, &[ModeTag])], distances: &[(u32, u32, f64)]) -> RouteGraph {
    let areas = areas
        .iter()
        .map(|(id, modes)| Area::new(AreaId(*id), format!("Area {id}"), modes.iter().cloned()).unwrap())
        .collect();
    let mut catalog = AreaCatalog::new(areas).unwrap();
    for (from, to, km) in distances {
        catalog.add_distance(AreaId(*from), AreaId(*to), *km);
    }
    let modes = TransportModeCatalog::new([walk_mode()]).unwrap();
    RouteGraph::build(&catalog, &modes, &GraphConfig::default())
}

#[test]
fn metro_beats_bus_into_el_harrach() {
    let (areas, graph) = builtin();
    let center = id(&areas, "City Center");
    let harrach = id(&areas, "El Harrach");

    let path = graph.shortest_path(center, harrach);

    assert_eq!(path.areas, vec![center, harrach]);
    assert_eq!(path.modes, vec![ModeTag::Metro]);
    assert!((path.minutes - 17.75).abs() < 1e-9);
}

#[test]
fn multi_hop_when_cheaper() {
    const WALK: &[ModeTag] = &[ModeTag::Walk];
    // 1 -- 2 -- 3 is 1 km + 1 km; the direct 1 -- 3 hop is 5 km.
    let graph = walk_graph(
        &[(1, WALK), (2, WALK), (3, WALK)],
        &[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)],
    );

    let path = graph.shortest_path(AreaId(1), AreaId(3));

    assert_eq!(path.areas, vec![AreaId(1), AreaId(2), AreaId(3)]);
    assert_eq!(path.modes, vec![ModeTag::Walk, ModeTag::Walk]);
    assert!((path.minutes - 20.0).abs() < 1e-9);
}

#[test]
fn unknown_endpoint_is_no_path() {
    let (areas, graph) = builtin();
    let center = id(&areas, "City Center");

    let path = graph.shortest_path(center, AreaId(404));
    assert!(!path.is_found());
    assert!(path.minutes.is_infinite());
    assert!(path.modes.is_empty());

    assert!(!graph.shortest_path(AreaId(404), center).is_found());
    assert!(graph.find_paths(AreaId(404), center, 3).is_empty());
}

#[test]
fn disconnected_modes_are_no_path() {
    const WALK: &[ModeTag] = &[ModeTag::Walk];
    const METRO: &[ModeTag] = &[ModeTag::Metro];
    let graph = walk_graph(&[(1, WALK), (2, METRO)], &[(1, 2, 1.0)]);

    let path = graph.shortest_path(AreaId(1), AreaId(2));
    assert_eq!(path, ShortestPath::none());
    assert!(graph.find_paths(AreaId(1), AreaId(2), 1).is_empty());
}

#[test]
fn same_start_and_end_is_degenerate() {
    let (areas, graph) = builtin();
    let center = id(&areas, "City Center");

    let path = graph.shortest_path(center, center);
    assert_eq!(path.areas, vec![center]);
    assert_eq!(path.minutes, 0.0);
    assert!(path.to_route_path().is_err());
}

#[test]
fn equal_weights_break_ties_on_lower_area_id() {
    const WALK: &[ModeTag] = &[ModeTag::Walk];
    // Two equally long detours: 1 -> 3 -> 4 and 1 -> 2 -> 4.
    let graph = walk_graph(
        &[(1, WALK), (2, WALK), (3, WALK), (4, WALK)],
        &[
            (1, 2, 1.0),
            (1, 3, 1.0),
            (2, 4, 1.0),
            (3, 4, 1.0),
            (1, 4, 10.0),
            (2, 3, 10.0),
        ],
    );

    for _ in 0..10 {
        let path = graph.shortest_path(AreaId(1), AreaId(4));
        assert_eq!(path.areas, vec![AreaId(1), AreaId(2), AreaId(4)]);
    }
}

#[test]
fn find_paths_with_one_matches_shortest() {
    let (areas, graph) = builtin();
    let bab = id(&areas, "Bab El Oued");
    let harrach = id(&areas, "El Harrach");

    let paths = graph.find_paths(bab, harrach, 1);
    assert_eq!(paths, vec![graph.shortest_path(bab, harrach)]);
    assert!(graph.find_paths(bab, harrach, 0).is_empty());
}

#[test]
fn converts_to_route_path() {
    let (areas, graph) = builtin();
    let kouba = id(&areas, "Kouba");
    let hydra = id(&areas, "Hydra");

    let route = graph.shortest_path(kouba, hydra).to_route_path().unwrap();
    assert_eq!(route.origin(), kouba);
    assert_eq!(route.destination(), hydra);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The shortest path is never slower than any direct edge.
        #[test]
        fn never_slower_than_a_direct_edge(a in 0usize..6, b in 0usize..6) {
            prop_assume!(a != b);
            let (areas, graph) = builtin();
            let from = areas.areas()[a].id;
            let to = areas.areas()[b].id;

            let path = graph.shortest_path(from, to);
            for edge in graph.direct_edges(from, to) {
                prop_assert!(path.is_found());
                prop_assert!(path.minutes <= edge.minutes + 1e-9);
            }
        }

        /// Every hop of a found path is an edge of the graph.
        #[test]
        fn hops_are_graph_edges(a in 0usize..6, b in 0usize..6) {
            prop_assume!(a != b);
            let (areas, graph) = builtin();
            let from = areas.areas()[a].id;
            let to = areas.areas()[b].id;

            let path = graph.shortest_path(from, to);
            prop_assume!(path.is_found());
            prop_assert_eq!(path.modes.len(), path.areas.len() - 1);

            let total: f64 = path
                .areas
                .windows(2)
                .zip(&path.modes)
                .map(|(pair, mode)| graph.edge_minutes(pair[0], pair[1], mode))
                .collect::<Option<Vec<_>>>()
                .expect("every hop is an edge")
                .into_iter()
                .sum();
            prop_assert!((total - path.minutes).abs() < 1e-9);
        }
    }
}
