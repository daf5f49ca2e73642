//! Validated multimodal paths.

use super::{AreaId, DomainError, ModeTag};

/// An ordered sequence of areas with the mode used on each hop.
///
/// # Invariants
///
/// - At least two areas
/// - Exactly one mode per hop (`modes.len() == areas.len() - 1`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    areas: Vec<AreaId>,
    modes: Vec<ModeTag>,
}

/// One hop of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop<'a> {
    pub from: AreaId,
    pub to: AreaId,
    pub mode: &'a ModeTag,
}

impl RoutePath {
    /// Constructs a path, checking the length invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two areas are given or the mode count
    /// does not match the hop count.
    pub fn new(areas: Vec<AreaId>, modes: Vec<ModeTag>) -> Result<Self, DomainError> {
        if areas.len() < 2 {
            return Err(DomainError::PathTooShort(areas.len()));
        }
        if modes.len() != areas.len() - 1 {
            return Err(DomainError::ModeCountMismatch {
                areas: areas.len(),
                modes: modes.len(),
            });
        }
        Ok(Self { areas, modes })
    }

    pub fn areas(&self) -> &[AreaId] {
        &self.areas
    }

    pub fn modes(&self) -> &[ModeTag] {
        &self.modes
    }

    pub fn origin(&self) -> AreaId {
        self.areas[0]
    }

    pub fn destination(&self) -> AreaId {
        self.areas[self.areas.len() - 1]
    }

    /// Mode of the first hop.
    pub fn first_mode(&self) -> &ModeTag {
        &self.modes[0]
    }

    pub fn hop_count(&self) -> usize {
        self.modes.len()
    }

    /// Iterate over hops in travel order.
    pub fn hops(&self) -> impl Iterator<Item = Hop<'_>> {
        self.areas
            .windows(2)
            .zip(&self.modes)
            .map(|(pair, mode)| Hop {
                from: pair[0],
                to: pair[1],
                mode,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_path() {
        let path = RoutePath::new(
            vec![AreaId(1), AreaId(4), AreaId(2)],
            vec![ModeTag::Bus, ModeTag::Metro],
        )
        .unwrap();

        assert_eq!(path.origin(), AreaId(1));
        assert_eq!(path.destination(), AreaId(2));
        assert_eq!(path.first_mode(), &ModeTag::Bus);
        assert_eq!(path.hop_count(), 2);

        let hops: Vec<_> = path.hops().collect();
        assert_eq!(hops[0].from, AreaId(1));
        assert_eq!(hops[0].to, AreaId(4));
        assert_eq!(hops[1].mode, &ModeTag::Metro);
    }

    #[test]
    fn rejects_single_area() {
        let err = RoutePath::new(vec![AreaId(1)], vec![]).unwrap_err();
        assert_eq!(err, DomainError::PathTooShort(1));
    }

    #[test]
    fn rejects_mode_count_mismatch() {
        let err = RoutePath::new(vec![AreaId(1), AreaId(2)], vec![]).unwrap_err();
        assert_eq!(err, DomainError::ModeCountMismatch { areas: 2, modes: 0 });

        let err = RoutePath::new(
            vec![AreaId(1), AreaId(2)],
            vec![ModeTag::Bus, ModeTag::Walk],
        )
        .unwrap_err();
        assert_eq!(err, DomainError::ModeCountMismatch { areas: 2, modes: 2 });
    }
}
