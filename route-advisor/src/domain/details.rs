//! Mode-specific network information and per-segment route details.

use serde::{Deserialize, Serialize};

use super::ModeTag;

/// Average riding speed used to size a bike-share rental, in km/h.
const BIKE_RENTAL_SPEED_KMH: f64 = 15.0;

/// Calories burned per kilometre walked.
const WALK_KCAL_PER_KM: f64 = 80.0;

/// Static description of the network operating a mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NetworkInfo {
    Metro {
        line: String,
        headway_mins: u32,
        stations_count: u32,
    },
    Tram {
        line: String,
        length_km: f64,
        stations_count: u32,
        electric: bool,
    },
    Bus {
        total_lines: u32,
        operators: Vec<String>,
    },
    Bicycle {
        system: String,
        stations_count: u32,
        total_bikes: u32,
    },
}

/// Bike-share rental pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BicyclePack {
    Hourly,
    Daily,
    Monthly,
}

impl BicyclePack {
    /// Cheapest pack covering a ride of `distance_km`.
    pub fn for_distance(distance_km: f64) -> Self {
        let hours = distance_km / BIKE_RENTAL_SPEED_KMH;
        if hours <= 1.0 {
            BicyclePack::Hourly
        } else if hours <= 8.0 {
            BicyclePack::Daily
        } else {
            BicyclePack::Monthly
        }
    }

    /// Pack price in DZD.
    pub fn price(&self) -> u32 {
        match self {
            BicyclePack::Hourly => 50,
            BicyclePack::Daily => 300,
            BicyclePack::Monthly => 5000,
        }
    }
}

/// Mode-specific details attached to one segment of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ModeDetails {
    Metro {
        line: String,
        headway_mins: u32,
        stations_count: u32,
    },
    Tram {
        line: String,
        length_km: f64,
        stations_count: u32,
        electric: bool,
    },
    Bus {
        total_lines: u32,
        operators: Vec<String>,
    },
    Bicycle {
        system: String,
        stations_count: u32,
        total_bikes: u32,
        pack: BicyclePack,
        pack_price: u32,
    },
    Walk {
        calories_burned: u32,
    },
    /// A mode without network information.
    Other { tag: String },
}

impl ModeDetails {
    /// Details for riding `mode` over `distance_km`.
    ///
    /// Falls back to [`ModeDetails::Other`] when the network description is
    /// missing or describes a different mode.
    pub fn for_segment(mode: &ModeTag, network: Option<&NetworkInfo>, distance_km: f64) -> Self {
        match (mode, network) {
            (ModeTag::Walk, _) => ModeDetails::Walk {
                calories_burned: (distance_km * WALK_KCAL_PER_KM) as u32,
            },
            (
                ModeTag::Metro,
                Some(NetworkInfo::Metro {
                    line,
                    headway_mins,
                    stations_count,
                }),
            ) => ModeDetails::Metro {
                line: line.clone(),
                headway_mins: *headway_mins,
                stations_count: *stations_count,
            },
            (
                ModeTag::Tram,
                Some(NetworkInfo::Tram {
                    line,
                    length_km,
                    stations_count,
                    electric,
                }),
            ) => ModeDetails::Tram {
                line: line.clone(),
                length_km: *length_km,
                stations_count: *stations_count,
                electric: *electric,
            },
            (
                ModeTag::Bus,
                Some(NetworkInfo::Bus {
                    total_lines,
                    operators,
                }),
            ) => ModeDetails::Bus {
                total_lines: *total_lines,
                operators: operators.clone(),
            },
            (
                ModeTag::Bicycle,
                Some(NetworkInfo::Bicycle {
                    system,
                    stations_count,
                    total_bikes,
                }),
            ) => {
                let pack = BicyclePack::for_distance(distance_km);
                ModeDetails::Bicycle {
                    system: system.clone(),
                    stations_count: *stations_count,
                    total_bikes: *total_bikes,
                    pack,
                    pack_price: pack.price(),
                }
            }
            (other, _) => ModeDetails::Other {
                tag: other.to_string(),
            },
        }
    }
}
