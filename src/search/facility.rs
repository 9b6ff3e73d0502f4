//! Nearest-facility search: resolve a place, measure every facility,
//! keep those within the radius, rank by distance.

use std::sync::Arc;

use tracing::debug;

use super::PlaceResolver;
use crate::catalog::{Catalog, FacilityCatalog};
use crate::distance::{distance_between, round_km};
use crate::models::{FacilityRecord, GeoPoint, RankedFacility};

/// Search radius used when the caller does not give one
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 10.0;

/// Rank `facilities` by distance from `origin`, keeping those at most
/// `max_distance_km` away (inclusive).
///
/// Ordering uses the unrounded distance with a stable sort, so equal
/// distances keep catalog order. Two facilities whose distances only agree
/// after rounding are still ordered nearest first, not by catalog position.
/// Each result is a copy annotated with the distance rounded to 3 decimals.
/// A negative or NaN radius matches nothing.
pub fn rank_within(
    origin: GeoPoint,
    facilities: &[FacilityRecord],
    max_distance_km: f64,
) -> Vec<RankedFacility> {
    let mut hits: Vec<(f64, &FacilityRecord)> = facilities
        .iter()
        .map(|facility| (distance_between(origin, facility.location()), facility))
        .filter(|(distance, _)| *distance <= max_distance_km)
        .collect();

    hits.sort_by(|a, b| a.0.total_cmp(&b.0));

    hits.into_iter()
        .map(|(distance, facility)| RankedFacility {
            facility: facility.clone(),
            distance_km: round_km(distance),
        })
        .collect()
}

/// Facility search over shared place and facility catalogs
#[derive(Debug, Clone)]
pub struct FacilitySearch {
    resolver: PlaceResolver,
    facilities: Arc<FacilityCatalog>,
}

impl FacilitySearch {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            resolver: PlaceResolver::new(Arc::clone(&catalog.places)),
            facilities: Arc::clone(&catalog.facilities),
        }
    }

    /// All facilities within `max_distance_km` of the named place, nearest first.
    ///
    /// An unknown place yields an empty list. The list is not capped; top-K
    /// truncation is left to the presentation layer.
    pub fn find_nearby(&self, place_name: &str, max_distance_km: f64) -> Vec<RankedFacility> {
        let Some(place) = self.resolver.find_place(place_name) else {
            debug!("Place '{}' not found", place_name);
            return Vec::new();
        };

        let results = rank_within(place.location(), self.facilities.records(), max_distance_km);

        debug!(
            "Found {} facilities within {} km of '{}'",
            results.len(),
            max_distance_km,
            place.name
        );

        results
    }

    pub fn resolver(&self) -> &PlaceResolver {
        &self.resolver
    }
}
