//! Google Maps directions links.

use crate::domain::{Area, ModeTag};

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

/// Google Maps travel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Driving,
    Bicycling,
    Walking,
    Transit,
}

impl TravelMode {
    /// The mode used to show a route whose first hop is ridden with `mode`.
    pub fn for_mode(mode: &ModeTag) -> Self {
        match mode {
            ModeTag::Walk => TravelMode::Walking,
            ModeTag::Bicycle => TravelMode::Bicycling,
            ModeTag::Metro | ModeTag::Tram | ModeTag::Bus => TravelMode::Transit,
            ModeTag::Other(_) => TravelMode::Driving,
        }
    }

    /// Value of the `3e` parameter in a directions URL.
    pub fn code(&self) -> u8 {
        match self {
            TravelMode::Driving => 0,
            TravelMode::Bicycling => 1,
            TravelMode::Walking => 2,
            TravelMode::Transit => 3,
        }
    }
}

/// Directions from `from` to `to`, or `None` if either lacks coordinates.
pub fn directions_url(from: &Area, to: &Area, mode: TravelMode) -> Option<String> {
    let start = from.coordinates?;
    let end = to.coordinates?;
    Some(format!(
        "{DIRECTIONS_BASE}{},{}/{},{}/data=!4m2!4m1!3e{}",
        start.lat,
        start.lng,
        end.lat,
        end.lng,
        mode.code()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AreaId, Coordinates};

    fn area(id: u32, lat: f64, lng: f64) -> Area {
        Area::new(AreaId(id), format!("Area {id}"), [ModeTag::Walk])
            .unwrap()
            .with_coordinates(Coordinates::new(lat, lng).unwrap())
    }

    #[test]
    fn builds_transit_link() {
        let url = directions_url(&area(1, 36.7538, 3.0588), &area(2, 36.7167, 3.1333), TravelMode::Transit);
        assert_eq!(
            url.as_deref(),
            Some("https://www.google.com/maps/dir/36.7538,3.0588/36.7167,3.1333/data=!4m2!4m1!3e3")
        );
    }

    #[test]
    fn missing_coordinates_gives_no_link() {
        let bare = Area::new(AreaId(3), "Nowhere", [ModeTag::Walk]).unwrap();
        assert_eq!(directions_url(&bare, &area(1, 36.7, 3.0), TravelMode::Walking), None);
    }

    #[test]
    fn travel_mode_codes() {
        assert_eq!(TravelMode::for_mode(&ModeTag::Walk).code(), 2);
        assert_eq!(TravelMode::for_mode(&ModeTag::Bicycle).code(), 1);
        assert_eq!(TravelMode::for_mode(&ModeTag::Metro).code(), 3);
        assert_eq!(TravelMode::for_mode(&ModeTag::Bus).code(), 3);
        assert_eq!(TravelMode::for_mode(&ModeTag::Tram).code(), 3);
        assert_eq!(TravelMode::for_mode(&ModeTag::parse("taxi")).code(), 0);
    }
}
