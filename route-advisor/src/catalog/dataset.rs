//! Dataset loading.
//!
//! A dataset is a JSON document listing areas, transport modes, tabulated
//! distances and per-mode network descriptions. The Algiers dataset ships
//! embedded in the binary; other cities can be loaded from disk.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    Area, AreaId, AreaKind, Coordinates, ModeParams, ModeTag, NetworkInfo, TransportMode,
};

use super::{AreaCatalog, CatalogError, TransportModeCatalog};

/// The embedded Algiers dataset.
const BUILTIN_ALGIERS: &str = include_str!("../../data/algiers.json");

/// Raw dataset as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub city: String,
    pub areas: Vec<AreaRecord>,
    pub transport_modes: BTreeMap<String, ModeRecord>,
    /// `from name -> to name -> km`. Either direction may be listed.
    #[serde(default)]
    pub distance_matrix: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkInfo>,
}

/// An area as stored in a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub arabic_name: String,
    #[serde(rename = "type", default)]
    pub kind: AreaKind,
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub transport: Vec<String>,
    #[serde(default)]
    pub attractions: Vec<String>,
}

/// A transport mode as stored in a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeRecord {
    pub name: String,
    pub speed_kmh: f64,
    pub cost_per_km: f64,
    pub base_cost: f64,
    pub emissions_kg_per_km: f64,
    pub comfort: f64,
    pub reliability: f64,
    #[serde(default)]
    pub description: String,
}

/// The two catalogs built from one dataset.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub areas: AreaCatalog,
    pub modes: TransportModeCatalog,
}

impl Dataset {
    /// The Algiers dataset embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_ALGIERS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::Json(e.to_string()))
    }

    /// Load a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Validate the dataset and build the catalogs.
    ///
    /// # Errors
    ///
    /// Fails on invalid coordinates or mode parameters, duplicate areas, or
    /// distance entries naming areas that are not listed.
    pub fn into_catalogs(self) -> Result<Catalogs, CatalogError> {
        let areas = self
            .areas
            .into_iter()
            .map(AreaRecord::into_area)
            .collect::<Result<Vec<_>, _>>()?;
        let mut area_catalog = AreaCatalog::new(areas)?;

        for (from, row) in &self.distance_matrix {
            let from_id = resolve_id(&area_catalog, from)?;
            for (to, km) in row {
                let to_id = resolve_id(&area_catalog, to)?;
                if !km.is_finite() || *km < 0.0 {
                    return Err(CatalogError::InvalidDistance {
                        from: from.clone(),
                        to: to.clone(),
                        km: *km,
                    });
                }
                area_catalog.add_distance(from_id, to_id, *km);
            }
        }

        let modes = self
            .transport_modes
            .into_iter()
            .map(|(tag, record)| record.into_mode(ModeTag::parse(&tag)));
        let mut mode_catalog = TransportModeCatalog::new(modes)?;
        for (tag, info) in self.networks {
            mode_catalog = mode_catalog.with_network(ModeTag::parse(&tag), info);
        }

        debug!(
            city = %self.city,
            areas = area_catalog.len(),
            modes = mode_catalog.len(),
            "Loaded dataset"
        );

        Ok(Catalogs {
            areas: area_catalog,
            modes: mode_catalog,
        })
    }
}

impl AreaRecord {
    fn into_area(self) -> Result<Area, CatalogError> {
        let modes = self.transport.iter().map(|tag| ModeTag::parse(tag));
        let mut area = Area::new(AreaId(self.id), self.name, modes)?
            .with_arabic_name(self.arabic_name)
            .with_kind(self.kind);
        if let Some(c) = self.coordinates {
            area = area.with_coordinates(Coordinates::new(c.lat, c.lng)?);
        }
        area.attractions = self.attractions;
        Ok(area)
    }
}

impl ModeRecord {
    fn into_mode(self, tag: ModeTag) -> TransportMode {
        TransportMode {
            tag,
            name: self.name,
            description: self.description,
            params: ModeParams {
                speed_kmh: self.speed_kmh,
                base_fare: self.base_cost,
                cost_per_km: self.cost_per_km,
                emissions_per_km: self.emissions_kg_per_km,
                comfort: self.comfort,
                reliability: self.reliability,
            },
        }
    }
}

fn resolve_id(catalog: &AreaCatalog, name: &str) -> Result<AreaId, CatalogError> {
    catalog
        .resolve(name)
        .map(|area| area.id)
        .ok_or_else(|| CatalogError::UnknownArea(name.to_string()))
}
