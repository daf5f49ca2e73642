//! Criterion score formulas.
//!
//! Scores are a quality indicator shown to the user. Fastest, cheapest and
//! greenest winners are chosen by their raw metric, not by score.

use crate::evaluate::{Metrics, round_to};

use super::Criterion;

/// Minutes at which the time component of a normalised score reaches zero.
const TIME_HORIZON_MINS: f64 = 120.0;

/// DZD at which the cost component of a normalised score reaches zero.
const COST_HORIZON: f64 = 500.0;

/// kg CO2 at which the emission component of the balanced score reaches zero.
const EMISSION_HORIZON_KG: f64 = 5.0;

/// Score of `metrics` under `criterion`, rounded to 1 decimal.
///
/// `None` for the selection-only criteria (comfort, smart).
pub fn score(criterion: Criterion, metrics: &Metrics) -> Option<f64> {
    let time = metrics.total_time;
    let cost = f64::from(metrics.total_cost);
    let emissions = metrics.total_emissions;
    let comfort = metrics.comfort;

    let raw = match criterion {
        Criterion::Fastest => {
            let time_score = 100.0 - time * 2.0;
            (time_score - cost * 0.1).max(0.0)
        }
        Criterion::Cheapest => {
            let cost_score = 100.0 - cost * 0.4;
            (cost_score - time * 0.5).max(0.0)
        }
        Criterion::Greenest => {
            let emission_score = 100.0 - emissions * 20.0;
            (emission_score + comfort * 10.0).max(0.0)
        }
        Criterion::Balanced => {
            let time_norm = 1.0 - (time / TIME_HORIZON_MINS).min(1.0);
            let cost_norm = 1.0 - (cost / COST_HORIZON).min(1.0);
            let emission_norm = 1.0 - (emissions / EMISSION_HORIZON_KG).min(1.0);
            let weighted = 0.3 * time_norm + 0.3 * cost_norm + 0.2 * emission_norm + 0.2 * comfort;
            (100.0 * weighted).clamp(0.0, 100.0)
        }
        Criterion::Comfort | Criterion::Smart => return None,
    };

    Some(round_to(raw, 1))
}

/// Speed/price trade-off used to pick the smart choice. Not clamped, so
/// very slow or expensive routes go negative.
pub fn smart_value(metrics: &Metrics) -> f64 {
    let time_norm = 1.0 - metrics.total_time / TIME_HORIZON_MINS;
    let cost_norm = 1.0 - f64::from(metrics.total_cost) / COST_HORIZON;
    0.6 * time_norm + 0.4 * cost_norm
}
