//! Route graph construction.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::catalog::{AreaCatalog, TransportModeCatalog};
use crate::domain::{AreaId, ModeTag};

use super::config::GraphConfig;

/// A directed, mode-specific connection between two areas.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: AreaId,
    pub to: AreaId,
    pub mode: ModeTag,
    /// Ride time plus any boarding wait, in minutes.
    pub minutes: f64,
}

/// Directed weighted multigraph over areas, one edge per shared mode.
///
/// The graph is immutable once built and is shared read-only across
/// concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Outgoing edges per area, in (destination id, mode) order.
    pub(super) adjacency: BTreeMap<AreaId, Vec<Edge>>,
}

impl RouteGraph {
    /// Build the graph from the catalogs.
    ///
    /// For every ordered pair of distinct areas with a non-zero distance,
    /// emits one edge per mode that both areas support and the mode catalog
    /// knows. Edge weight is `distance / speed * 60` minutes plus the wait
    /// for scheduled modes.
    pub fn build(
        areas: &AreaCatalog,
        modes: &TransportModeCatalog,
        config: &GraphConfig,
    ) -> Self {
        let mut adjacency = BTreeMap::new();
        let mut edge_count = 0;

        for from in areas.areas() {
            let mut edges = Vec::new();

            for to in areas.areas() {
                if from.id == to.id {
                    continue;
                }

                let distance = areas.distance(from.id, to.id);
                if distance <= 0.0 {
                    trace!(from = %from.name, to = %to.name, "Skipping zero-distance pair");
                    continue;
                }

                for mode in from.modes.intersection(&to.modes) {
                    let Some(params) = modes.params(mode) else {
                        trace!(mode = %mode, "Skipping mode missing from catalog");
                        continue;
                    };

                    let minutes = distance / params.speed_kmh * 60.0 + config.wait_for(mode);
                    edges.push(Edge {
                        from: from.id,
                        to: to.id,
                        mode: mode.clone(),
                        minutes,
                    });
                }
            }

            edge_count += edges.len();
            adjacency.insert(from.id, edges);
        }

        debug!(
            areas = adjacency.len(),
            edges = edge_count,
            "Built route graph"
        );

        Self { adjacency }
    }

    /// True if the area is a node of the graph.
    pub fn contains(&self, id: AreaId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Outgoing edges of an area; empty for unknown areas.
    pub fn edges_from(&self, id: AreaId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct edges from `from` to `to`, one per shared mode.
    pub fn direct_edges(&self, from: AreaId, to: AreaId) -> impl Iterator<Item = &Edge> {
        self.edges_from(from).iter().filter(move |e| e.to == to)
    }

    /// Weight of the edge `from -> to` using `mode`, if it exists.
    pub fn edge_minutes(&self, from: AreaId, to: AreaId, mode: &ModeTag) -> Option<f64> {
        self.direct_edges(from, to)
            .find(|e| &e.mode == mode)
            .map(|e| e.minutes)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
