//! Path evaluation: per-segment figures and aggregate metrics.

use serde::Serialize;
use tracing::trace;

use crate::catalog::{AreaCatalog, TransportModeCatalog};
use crate::domain::{AreaId, ModeDetails, ModeTag, RoutePath};
use crate::weather::{MAX_IMPACT, MIN_IMPACT};

use super::metrics::Metrics;

/// One hop of an evaluated route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub from: AreaId,
    pub to: AreaId,
    pub mode: ModeTag,
    pub distance_km: f64,
    /// Fare in DZD, unrounded.
    pub cost: f64,
    pub emissions_kg: f64,
    pub details: ModeDetails,
}

/// A path together with its segments and metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedRoute {
    pub path: RoutePath,
    pub segments: Vec<Segment>,
    pub metrics: Metrics,
    /// Mode tags the catalog did not know, each listed once. Their segments
    /// were priced with [`crate::domain::ModeParams::NEUTRAL`].
    pub unknown_modes: Vec<ModeTag>,
}

/// Turns raw paths into metrics using the shared catalogs.
#[derive(Debug, Clone, Copy)]
pub struct PathEvaluator<'a> {
    areas: &'a AreaCatalog,
    modes: &'a TransportModeCatalog,
}

impl<'a> PathEvaluator<'a> {
    pub fn new(areas: &'a AreaCatalog, modes: &'a TransportModeCatalog) -> Self {
        Self { areas, modes }
    }

    /// Evaluate `path`, whose search weight was `base_minutes`.
    ///
    /// `weather_factor` is the impact factor for the path's first mode; it
    /// is clamped to [0.5, 1.5] and scales the total time only.
    pub fn evaluate(&self, path: RoutePath, base_minutes: f64, weather_factor: f64) -> EvaluatedRoute {
        let weather_factor = weather_factor.clamp(MIN_IMPACT, MAX_IMPACT);

        let mut segments = Vec::with_capacity(path.hop_count());
        let mut unknown_modes: Vec<ModeTag> = Vec::new();
        let mut distance = 0.0;
        let mut cost = 0.0;
        let mut emissions = 0.0;
        let mut comfort = 0.0;

        for hop in path.hops() {
            let km = self.areas.distance(hop.from, hop.to);
            let params = match self.modes.params(hop.mode) {
                Some(params) => params,
                None => {
                    if !unknown_modes.contains(hop.mode) {
                        unknown_modes.push(hop.mode.clone());
                    }
                    self.modes.params_or_neutral(hop.mode)
                }
            };

            let segment_cost = params.fare(km);
            let segment_emissions = km * params.emissions_per_km;

            distance += km;
            cost += segment_cost;
            emissions += segment_emissions;
            comfort += params.comfort;

            segments.push(Segment {
                from: hop.from,
                to: hop.to,
                mode: hop.mode.clone(),
                distance_km: km,
                cost: segment_cost,
                emissions_kg: segment_emissions,
                details: ModeDetails::for_segment(hop.mode, self.modes.network(hop.mode), km),
            });
        }

        let mean_comfort = comfort / segments.len() as f64;
        let metrics = Metrics::from_totals(
            base_minutes * weather_factor,
            distance,
            cost,
            emissions,
            mean_comfort,
            weather_factor,
        );

        trace!(
            origin = %path.origin(),
            destination = %path.destination(),
            time = metrics.total_time,
            cost = metrics.total_cost,
            "Evaluated path"
        );

        EvaluatedRoute {
            path,
            segments,
            metrics,
            unknown_modes,
        }
    }
}
