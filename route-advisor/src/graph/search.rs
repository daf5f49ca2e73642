//! Shortest-path search over the route graph.
//!
//! Dijkstra's algorithm on cumulative travel minutes. Frontier entries with
//! equal weight pop in ascending area-id order, so results do not depend
//! on heap internals.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::domain::{AreaId, DomainError, ModeTag, RoutePath};

use super::build::RouteGraph;
use super::yen;

/// Result of a shortest-path query.
///
/// An unreachable destination is represented by an empty path with
/// infinite cost rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub areas: Vec<AreaId>,
    pub modes: Vec<ModeTag>,
    /// Cumulative edge weight in minutes.
    pub minutes: f64,
}

impl ShortestPath {
    /// The "no path" result.
    pub fn none() -> Self {
        Self {
            areas: Vec::new(),
            modes: Vec::new(),
            minutes: f64::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.areas.is_empty()
    }

    /// Convert into a validated path.
    ///
    /// Fails for the "no path" result and for the degenerate single-area
    /// path returned when start and end coincide.
    pub fn to_route_path(&self) -> Result<RoutePath, DomainError> {
        RoutePath::new(self.areas.clone(), self.modes.clone())
    }
}

/// Edges and nodes hidden from a search, used by the k-shortest-paths
/// spur computations.
#[derive(Debug, Default)]
pub(super) struct Exclusions {
    pub nodes: HashSet<AreaId>,
    pub edges: HashSet<(AreaId, AreaId, ModeTag)>,
}

/// Frontier entry: cheapest first, then lowest area id.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    minutes: f64,
    area: AreaId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other
            .minutes
            .total_cmp(&self.minutes)
            .then_with(|| other.area.cmp(&self.area))
    }
}

impl RouteGraph {
    /// Fastest path from `start` to `end` by cumulative edge weight.
    ///
    /// Returns [`ShortestPath::none`] if either endpoint is not in the graph
    /// or the destination is unreachable. Callers are expected to reject
    /// `start == end` beforehand; in that case the degenerate path `[start]`
    /// with zero cost is returned.
    pub fn shortest_path(&self, start: AreaId, end: AreaId) -> ShortestPath {
        self.dijkstra(start, end, &Exclusions::default())
    }

    /// Up to `max_paths` loopless paths from `start` to `end`, fastest
    /// first.
    ///
    /// Paths are distinct if their area or mode sequences differ, so the
    /// same areas ridden with a different mode count as a separate path.
    /// With `max_paths == 1` this is exactly [`RouteGraph::shortest_path`].
    pub fn find_paths(&self, start: AreaId, end: AreaId, max_paths: usize) -> Vec<ShortestPath> {
        if max_paths == 0 {
            return Vec::new();
        }
        let best = self.shortest_path(start, end);
        if !best.is_found() {
            return Vec::new();
        }
        if max_paths == 1 || start == end {
            return vec![best];
        }
        yen::k_shortest(self, best, end, max_paths)
    }

    pub(super) fn dijkstra(
        &self,
        start: AreaId,
        end: AreaId,
        exclusions: &Exclusions,
    ) -> ShortestPath {
        if !self.contains(start) || !self.contains(end) {
            return ShortestPath::none();
        }
        if exclusions.nodes.contains(&start) {
            return ShortestPath::none();
        }

        let mut best: HashMap<AreaId, f64> = HashMap::new();
        let mut previous: HashMap<AreaId, (AreaId, &ModeTag)> = HashMap::new();
        let mut settled: HashSet<AreaId> = HashSet::new();
        let mut frontier = BinaryHeap::new();

        best.insert(start, 0.0);
        frontier.push(Frontier {
            minutes: 0.0,
            area: start,
        });

        while let Some(Frontier { minutes, area }) = frontier.pop() {
            if !settled.insert(area) {
                continue;
            }

            if area == end {
                return reconstruct(start, end, minutes, &previous);
            }

            for edge in self.edges_from(area) {
                if settled.contains(&edge.to) || exclusions.nodes.contains(&edge.to) {
                    continue;
                }
                if exclusions
                    .edges
                    .contains(&(edge.from, edge.to, edge.mode.clone()))
                {
                    continue;
                }

                let candidate = minutes + edge.minutes;
                let improves = best.get(&edge.to).is_none_or(|&known| candidate < known);
                if improves {
                    best.insert(edge.to, candidate);
                    previous.insert(edge.to, (area, &edge.mode));
                    frontier.push(Frontier {
                        minutes: candidate,
                        area: edge.to,
                    });
                }
            }
        }

        trace!(start = %start, end = %end, "Frontier exhausted without reaching destination");
        ShortestPath::none()
    }
}

fn reconstruct(
    start: AreaId,
    end: AreaId,
    minutes: f64,
    previous: &HashMap<AreaId, (AreaId, &ModeTag)>,
) -> ShortestPath {
    let mut areas = vec![end];
    let mut modes = Vec::new();
    let mut current = end;

    while current != start {
        let Some(&(prev, mode)) = previous.get(&current) else {
            return ShortestPath::none();
        };
        modes.push(mode.clone());
        areas.push(prev);
        current = prev;
    }

    areas.reverse();
    modes.reverse();

    ShortestPath {
        areas,
        modes,
        minutes,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
