//! Multi-criteria route selection.
//!
//! Every evaluated route is scored under the four scored criteria, then a
//! single winner is picked per category. Selection is a pure function of
//! the evaluated routes.

mod criterion;
mod score;
mod selector;

pub use criterion::Criterion;
pub use score::{score, smart_value};
pub use selector::{Recommendation, Selection, score_routes, select_winners};
