//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::AreaCatalog;
use crate::domain::{Area, AreaId, AreaKind, Coordinates, ModeDetails, ModeTag};
use crate::evaluate::{Metrics, Segment};
use crate::maps::{TravelMode, directions_url};
use crate::select::{Criterion, Recommendation, Selection};
use crate::weather::WeatherSnapshot;

/// An area in the area listing.
#[derive(Debug, Serialize)]
pub struct AreaResult {
    pub id: AreaId,
    pub name: String,
    pub arabic_name: String,
    pub kind: AreaKind,
    pub coordinates: Option<Coordinates>,
    pub modes: Vec<ModeTag>,
    pub attractions: Vec<String>,
}

impl AreaResult {
    pub fn from_area(area: &Area) -> Self {
        Self {
            id: area.id,
            name: area.name.clone(),
            arabic_name: area.arabic_name.clone(),
            kind: area.kind,
            coordinates: area.coordinates,
            modes: area.modes.iter().cloned().collect(),
            attractions: area.attractions.clone(),
        }
    }
}

/// Request for route recommendations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin area name, in either script
    pub start: String,

    /// Destination area name, in either script
    pub end: String,
}

/// Route recommendations, one per category.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Empty when the areas are unknown or unconnected.
    pub recommendations: BTreeMap<Criterion, RecommendationResult>,

    /// Weather the routes were evaluated under; absent if none were.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
}

impl RouteResponse {
    pub fn from_selection(selection: &Selection, areas: &AreaCatalog) -> Self {
        let weather = selection.values().next().map(|r| (*r.weather).clone());
        let recommendations = selection
            .iter()
            .map(|(category, rec)| (*category, RecommendationResult::new(*category, rec, areas)))
            .collect();

        Self {
            recommendations,
            weather,
        }
    }
}

/// One recommended route.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    /// Display title of the category it won
    pub title: &'static str,

    /// Criterion the route was scored under
    pub scored_as: Criterion,

    /// Score under `scored_as`, if that criterion is scored
    pub score: Option<f64>,

    /// Area names in travel order
    pub path: Vec<String>,

    pub modes: Vec<ModeTag>,
    pub metrics: Metrics,
    pub segments: Vec<SegmentResult>,

    /// Google Maps directions for the whole trip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
}

impl RecommendationResult {
    pub fn new(category: Criterion, rec: &Recommendation, areas: &AreaCatalog) -> Self {
        let path = rec.route.path.areas().iter().map(|id| area_name(areas, *id)).collect();

        let maps_url = match (
            areas.get(rec.route.path.origin()),
            areas.get(rec.route.path.destination()),
        ) {
            (Some(from), Some(to)) => {
                directions_url(from, to, TravelMode::for_mode(rec.route.path.first_mode()))
            }
            _ => None,
        };

        Self {
            title: title(category),
            scored_as: rec.criterion,
            score: rec.score,
            path,
            modes: rec.route.path.modes().to_vec(),
            metrics: rec.route.metrics,
            segments: rec
                .route
                .segments
                .iter()
                .map(|s| SegmentResult::new(s, areas))
                .collect(),
            maps_url,
        }
    }
}

/// One hop of a recommended route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub from: String,
    pub to: String,
    pub mode: ModeTag,
    pub distance_km: f64,
    /// DZD
    pub cost: f64,
    pub emissions_kg: f64,
    pub details: ModeDetails,
}

impl SegmentResult {
    fn new(segment: &Segment, areas: &AreaCatalog) -> Self {
        Self {
            from: area_name(areas, segment.from),
            to: area_name(areas, segment.to),
            mode: segment.mode.clone(),
            distance_km: segment.distance_km,
            cost: segment.cost,
            emissions_kg: segment.emissions_kg,
            details: segment.details.clone(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn area_name(areas: &AreaCatalog, id: AreaId) -> String {
    areas
        .get(id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn title(category: Criterion) -> &'static str {
    match category {
        Criterion::Fastest => "Fastest route",
        Criterion::Cheapest => "Cheapest route",
        Criterion::Greenest => "Greenest route",
        Criterion::Comfort => "Most comfortable",
        Criterion::Balanced => "Best overall",
        Criterion::Smart => "Smart choice",
    }
}
