//! Multimodal route advisor.
//!
//! Recommends routes between two areas of a city, picking the best route
//! for each of several criteria (fastest, cheapest, greenest, most
//! comfortable, best overall, and a smart speed/price trade-off).

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod evaluate;
pub mod graph;
pub mod maps;
pub mod select;
pub mod weather;
pub mod web;
