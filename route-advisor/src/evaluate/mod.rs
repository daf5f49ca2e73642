//! Path evaluation into aggregate metrics.

mod evaluator;
mod metrics;

pub use evaluator::{EvaluatedRoute, PathEvaluator, Segment};
pub use metrics::{Metrics, round_to};
