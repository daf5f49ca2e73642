//! Transport mode parameters.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{ModeParams, ModeTag, NetworkInfo, TransportMode};

use super::CatalogError;

/// Read-only lookup of per-mode parameters, keyed by tag.
#[derive(Debug, Clone, Default)]
pub struct TransportModeCatalog {
    modes: BTreeMap<ModeTag, TransportMode>,
    networks: HashMap<ModeTag, NetworkInfo>,
}

impl TransportModeCatalog {
    /// Create a catalog from validated modes.
    ///
    /// # Errors
    ///
    /// Fails if any mode's parameters are out of range.
    pub fn new(modes: impl IntoIterator<Item = TransportMode>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for mode in modes {
            mode.params.validate(&mode.tag)?;
            map.insert(mode.tag.clone(), mode);
        }
        Ok(Self {
            modes: map,
            networks: HashMap::new(),
        })
    }

    /// Attach network information for a mode.
    pub fn with_network(mut self, tag: ModeTag, info: NetworkInfo) -> Self {
        self.networks.insert(tag, info);
        self
    }

    pub fn get(&self, tag: &ModeTag) -> Option<&TransportMode> {
        self.modes.get(tag)
    }

    pub fn params(&self, tag: &ModeTag) -> Option<ModeParams> {
        self.modes.get(tag).map(|mode| mode.params)
    }

    /// Parameters for `tag`, or [`ModeParams::NEUTRAL`] if it is unknown.
    pub fn params_or_neutral(&self, tag: &ModeTag) -> ModeParams {
        self.params(tag).unwrap_or(ModeParams::NEUTRAL)
    }

    pub fn network(&self, tag: &ModeTag) -> Option<&NetworkInfo> {
        self.networks.get(tag)
    }

    pub fn contains(&self, tag: &ModeTag) -> bool {
        self.modes.contains_key(tag)
    }

    /// All modes in tag order.
    pub fn modes(&self) -> impl Iterator<Item = &TransportMode> {
        self.modes.values()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(tag: ModeTag, speed_kmh: f64, comfort: f64) -> TransportMode {
        TransportMode {
            name: tag.to_string(),
            tag,
            description: String::new(),
            params: ModeParams {
                speed_kmh,
                base_fare: 30.0,
                cost_per_km: 2.0,
                emissions_per_km: 0.15,
                comfort,
                reliability: 0.7,
            },
        }
    }

    #[test]
    fn lookup_known_mode() {
        let catalog = TransportModeCatalog::new([mode(ModeTag::Bus, 20.0, 0.5)]).unwrap();
        assert_eq!(catalog.params(&ModeTag::Bus).unwrap().speed_kmh, 20.0);
        assert!(catalog.contains(&ModeTag::Bus));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn unknown_mode_gets_neutral_params() {
        let catalog = TransportModeCatalog::new([mode(ModeTag::Bus, 20.0, 0.5)]).unwrap();
        let tag = ModeTag::parse("hovercraft");
        assert!(catalog.get(&tag).is_none());
        assert_eq!(catalog.params_or_neutral(&tag), ModeParams::NEUTRAL);
    }

    #[test]
    fn rejects_invalid_params() {
        let err = TransportModeCatalog::new([mode(ModeTag::Bus, -1.0, 0.5)]).unwrap_err();
        assert!(matches!(err, CatalogError::Domain(_)));
    }

    #[test]
    fn network_lookup() {
        let catalog = TransportModeCatalog::new([mode(ModeTag::Bus, 20.0, 0.5)])
            .unwrap()
            .with_network(
                ModeTag::Bus,
                NetworkInfo::Bus {
                    total_lines: 120,
                    operators: vec!["ETUSA".into()],
                },
            );
        assert!(catalog.network(&ModeTag::Bus).is_some());
        assert!(catalog.network(&ModeTag::Metro).is_none());
    }
}
