//! Area-to-area route graph and path search.
//!
//! The graph has one directed edge per (area pair, shared mode), weighted
//! by travel minutes. Search answers the single fastest path with Dijkstra
//! and ranked alternatives with Yen's k-shortest-paths algorithm.

mod build;
mod config;
mod search;
mod yen;

pub use build::{Edge, RouteGraph};
pub use config::GraphConfig;
pub use search::ShortestPath;
