//! Case-insensitive place lookup.

use std::sync::Arc;

use crate::catalog::PlaceCatalog;
use crate::models::{normalize, PlaceRecord};

/// Find the first place whose normalized name equals the normalized query.
///
/// Catalog order decides between duplicate names.
pub fn find_place<'a>(places: &'a [PlaceRecord], name: &str) -> Option<&'a PlaceRecord> {
    let wanted = normalize(name);
    places.iter().find(|place| normalize(&place.name) == wanted)
}

/// Place lookup over a shared place catalog
#[derive(Debug, Clone)]
pub struct PlaceResolver {
    places: Arc<PlaceCatalog>,
}

impl PlaceResolver {
    pub fn new(places: Arc<PlaceCatalog>) -> Self {
        Self { places }
    }

    pub fn find_place(&self, name: &str) -> Option<&PlaceRecord> {
        find_place(self.places.records(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FloodIntensity;

    fn resolver() -> PlaceResolver {
        PlaceResolver::new(Arc::new(PlaceCatalog::new(vec![
            PlaceRecord::new("East Fort", 8.4834, 76.9490, FloodIntensity::Level(2)),
            PlaceRecord::new("Vyttila", 9.9658, 76.3180, FloodIntensity::Level(4)),
            PlaceRecord::new("EAST FORT", 0.0, 0.0, FloodIntensity::Level(5)),
        ])))
    }

    #[test]
    fn test_case_insensitive_match_keeps_original_casing() {
        let resolver = resolver();
        let place = resolver.find_place("  east fort ").unwrap();
        assert_eq!(place.name, "East Fort");
    }

    #[test]
    fn test_first_match_wins() {
        let resolver = resolver();
        let place = resolver.find_place("East Fort").unwrap();
        assert_eq!(place.flood_intensity, FloodIntensity::Level(2));
    }

    #[test]
    fn test_not_found() {
        let resolver = resolver();
        assert!(resolver.find_place("Nowhere").is_none());
        assert!(resolver.find_place("").is_none());
    }
}
