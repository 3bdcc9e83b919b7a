//! Place-name lookup.

use std::collections::BTreeMap;

use rising_chart::GeoCoordinate;

use crate::error::RisingError;

/// Resolves a free-text place name to coordinates.
pub trait Geocoder {
    fn resolve_coordinates(&self, place: &str) -> Result<GeoCoordinate, RisingError>;
}

/// In-memory gazetteer.
///
/// Names match case-insensitively with surrounding and repeated
/// whitespace ignored. `"Pécs, Hungary"` falls back to `"pécs"` when the
/// full text is not listed.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    places: BTreeMap<String, GeoCoordinate>,
}

const BUILTIN_PLACES: &[(&str, f64, f64)] = &[
    ("budapest", 47.4979, 19.0402),
    ("pécs", 46.0727, 18.2323),
    ("szeged", 46.2530, 20.1414),
    ("debrecen", 47.5316, 21.6273),
    ("vienna", 48.2082, 16.3738),
    ("zagreb", 45.8150, 15.9819),
    ("belgrade", 44.7866, 20.4489),
    ("london", 51.5074, -0.1278),
    ("paris", 48.8566, 2.3522),
    ("berlin", 52.5200, 13.4050),
    ("lisbon", 38.7223, -9.1393),
    ("athens", 37.9838, 23.7275),
    ("helsinki", 60.1699, 24.9384),
    ("new york", 40.7128, -74.0060),
    ("chicago", 41.8781, -87.6298),
    ("denver", 39.7392, -104.9903),
    ("phoenix", 33.4484, -112.0740),
    ("los angeles", 34.0522, -118.2437),
    ("delhi", 28.6139, 77.2090),
    ("mumbai", 19.0760, 72.8777),
    ("beijing", 39.9042, 116.4074),
    ("tokyo", 35.6762, 139.6503),
    ("sydney", -33.8688, 151.2093),
    ("brisbane", -27.4698, 153.0251),
];

fn place_key(place: &str) -> String {
    place
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gazetteer preloaded with a few dozen major cities.
    pub fn builtin() -> Self {
        let mut geocoder = Self::new();
        for &(name, lat, lon) in BUILTIN_PLACES {
            // Table entries are literal coordinates inside the valid range.
            if let Ok(coord) = GeoCoordinate::new(lat, lon) {
                geocoder.places.insert(name.to_string(), coord);
            }
        }
        geocoder
    }

    /// Add or replace a place.
    pub fn insert(&mut self, place: &str, coordinate: GeoCoordinate) {
        self.places.insert(place_key(place), coordinate);
    }

    /// Builder form of [`StaticGeocoder::insert`].
    pub fn with_place(mut self, place: &str, coordinate: GeoCoordinate) -> Self {
        self.insert(place, coordinate);
        self
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Geocoder for StaticGeocoder {
    fn resolve_coordinates(&self, place: &str) -> Result<GeoCoordinate, RisingError> {
        let key = place_key(place);
        let found = self.places.get(&key).or_else(|| {
            let head = key.split(',').next().map(str::trim)?;
            self.places.get(head)
        });
        match found {
            Some(c) => {
                log::debug!("geocoded {place:?} to {c}");
                Ok(*c)
            }
            None => Err(RisingError::LocationNotFound(place.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_is_case_and_space_insensitive() {
        let g = StaticGeocoder::builtin();
        let a = g.resolve_coordinates("Budapest").unwrap();
        let b = g.resolve_coordinates("  BUDAPEST ").unwrap();
        assert_eq!(a, b);
        let ny = g.resolve_coordinates("New   York").unwrap();
        assert!((ny.latitude_deg - 40.7128).abs() < 1e-9);
    }

    #[test]
    fn country_suffix_falls_back_to_city() {
        let g = StaticGeocoder::builtin();
        let p = g.resolve_coordinates("Pécs, Hungary").unwrap();
        assert!((p.longitude_deg - 18.2323).abs() < 1e-9);
    }

    #[test]
    fn unknown_place() {
        let g = StaticGeocoder::builtin();
        match g.resolve_coordinates(" Atlantis ") {
            Err(RisingError::LocationNotFound(name)) => assert_eq!(name, "Atlantis"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn custom_places() {
        let g = StaticGeocoder::new()
            .with_place("Mohács", GeoCoordinate::new(45.99, 18.68).unwrap());
        assert_eq!(g.len(), 1);
        assert!(g.resolve_coordinates("mohács").is_ok());
        assert!(g.resolve_coordinates("Budapest").is_err());
        assert!(StaticGeocoder::new().is_empty());
    }
}
