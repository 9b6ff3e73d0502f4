//! Read-only, in-memory catalogs of places, facilities, and tips.
//!
//! Catalogs are built once (from CSV via [`loader`] or directly from typed
//! records) and then shared behind `Arc`. Nothing hands out `&mut` access, so
//! concurrent queries need no locking.

pub mod loader;

use std::sync::Arc;

use crate::models::{FacilityRecord, PlaceRecord, TipRecord};

pub use loader::{load_catalog, RawRecord};

/// Places with coordinates and flood intensity, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    places: Vec<PlaceRecord>,
}

impl PlaceCatalog {
    pub fn new(places: Vec<PlaceRecord>) -> Self {
        Self { places }
    }

    pub fn records(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Facilities with coordinates and occupancy, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct FacilityCatalog {
    facilities: Vec<FacilityRecord>,
}

impl FacilityCatalog {
    pub fn new(facilities: Vec<FacilityRecord>) -> Self {
        Self { facilities }
    }

    pub fn records(&self) -> &[FacilityRecord] {
        &self.facilities
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

/// Curated safety tips, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct TipCatalog {
    tips: Vec<TipRecord>,
}

impl TipCatalog {
    pub fn new(tips: Vec<TipRecord>) -> Self {
        Self { tips }
    }

    pub fn records(&self) -> &[TipRecord] {
        &self.tips
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

/// All three catalogs, cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub places: Arc<PlaceCatalog>,
    pub facilities: Arc<FacilityCatalog>,
    pub tips: Arc<TipCatalog>,
}

impl Catalog {
    pub fn new(places: PlaceCatalog, facilities: FacilityCatalog, tips: TipCatalog) -> Self {
        Self {
            places: Arc::new(places),
            facilities: Arc::new(facilities),
            tips: Arc::new(tips),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FloodIntensity;

    #[test]
    fn test_catalog_clone_shares_records() {
        let catalog = Catalog::new(
            PlaceCatalog::new(vec![PlaceRecord::new(
                "East Fort",
                10.0,
                76.0,
                FloodIntensity::Level(2),
            )]),
            FacilityCatalog::default(),
            TipCatalog::default(),
        );
        let copy = catalog.clone();

        assert!(Arc::ptr_eq(&catalog.places, &copy.places));
        assert_eq!(copy.places.len(), 1);
        assert!(copy.facilities.is_empty());
        assert!(copy.tips.is_empty());
    }

    #[test]
    fn test_catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
