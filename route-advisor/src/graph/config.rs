//! Graph construction configuration.

use std::collections::BTreeSet;

use crate::domain::ModeTag;

/// Configuration parameters for building the route graph.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Minutes added to every edge of a scheduled mode, covering the
    /// average wait at the stop.
    pub wait_mins: f64,

    /// Modes that run on a timetable and therefore incur the wait.
    pub scheduled_modes: BTreeSet<ModeTag>,
}

impl GraphConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(wait_mins: f64, scheduled_modes: impl IntoIterator<Item = ModeTag>) -> Self {
        Self {
            wait_mins,
            scheduled_modes: scheduled_modes.into_iter().collect(),
        }
    }

    /// Wait penalty for boarding `mode`, in minutes.
    pub fn wait_for(&self, mode: &ModeTag) -> f64 {
        if self.scheduled_modes.contains(mode) {
            self.wait_mins
        } else {
            0.0
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(5.0, [ModeTag::Metro, ModeTag::Bus, ModeTag::Tram])
    }
}
