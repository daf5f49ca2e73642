//! Area lookup and inter-area distances.

use std::collections::{BTreeSet, HashMap};

use crate::domain::{Area, AreaId, ModeTag};

use super::CatalogError;

/// Distance assumed between two areas when neither a tabulated value nor
/// coordinates are available, in km.
pub const DEFAULT_FALLBACK_DISTANCE_KM: f64 = 5.0;

/// Read-only collection of areas with distance lookup.
///
/// Built once at startup and shared by reference; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct AreaCatalog {
    /// Areas sorted by id.
    areas: Vec<Area>,
    index: HashMap<AreaId, usize>,
    /// Tabulated distances in km, stored in the direction they were given.
    distances: HashMap<(AreaId, AreaId), f64>,
    fallback_distance_km: f64,
}

impl AreaCatalog {
    /// Create a catalog from a list of areas.
    ///
    /// # Errors
    ///
    /// Fails if two areas share an id, or if any display or Arabic name
    /// belongs to more than one area.
    pub fn new(mut areas: Vec<Area>) -> Result<Self, CatalogError> {
        areas.sort_by_key(|a| a.id);

        let mut index = HashMap::with_capacity(areas.len());
        let mut names = BTreeSet::new();
        for (i, area) in areas.iter().enumerate() {
            if index.insert(area.id, i).is_some() {
                return Err(CatalogError::DuplicateArea(format!("id {}", area.id)));
            }
            let name = area.name.to_lowercase();
            if !names.insert(name.clone()) {
                return Err(CatalogError::DuplicateArea(area.name.clone()));
            }
            let arabic = area.arabic_name.to_lowercase();
            if !arabic.is_empty() && arabic != name && !names.insert(arabic) {
                return Err(CatalogError::DuplicateArea(area.arabic_name.clone()));
            }
        }

        Ok(Self {
            areas,
            index,
            distances: HashMap::new(),
            fallback_distance_km: DEFAULT_FALLBACK_DISTANCE_KM,
        })
    }

    /// Record a tabulated distance. Lookups consult both directions.
    pub fn add_distance(&mut self, from: AreaId, to: AreaId, km: f64) {
        self.distances.insert((from, to), km);
    }

    /// Set the distance used when nothing better is known.
    pub fn with_fallback_distance(mut self, km: f64) -> Self {
        self.fallback_distance_km = km;
        self
    }

    /// Distance between two areas in km.
    ///
    /// Resolution order: tabulated `a→b`, tabulated `b→a`, coordinate
    /// approximation, then the fallback distance. Identical areas are 0 km
    /// apart.
    pub fn distance(&self, a: AreaId, b: AreaId) -> f64 {
        if a == b {
            return 0.0;
        }
        if let Some(km) = self
            .distances
            .get(&(a, b))
            .or_else(|| self.distances.get(&(b, a)))
        {
            return *km;
        }

        let coords = (
            self.get(a).and_then(|area| area.coordinates),
            self.get(b).and_then(|area| area.coordinates),
        );
        match coords {
            (Some(from), Some(to)) => from.distance_km(&to),
            _ => self.fallback_distance_km,
        }
    }

    /// True if a distance between the two areas was tabulated.
    pub fn has_tabulated_distance(&self, a: AreaId, b: AreaId) -> bool {
        self.distances.contains_key(&(a, b)) || self.distances.contains_key(&(b, a))
    }

    /// Find an area by either display name, ignoring case.
    pub fn resolve(&self, name: &str) -> Option<&Area> {
        self.areas.iter().find(|area| area.matches_name(name))
    }

    pub fn get(&self, id: AreaId) -> Option<&Area> {
        self.index.get(&id).map(|&i| &self.areas[i])
    }

    /// Modes supported by an area, or `None` for an unknown id.
    pub fn supported_modes(&self, id: AreaId) -> Option<&BTreeSet<ModeTag>> {
        self.get(id).map(|area| &area.modes)
    }

    /// All areas in id order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
