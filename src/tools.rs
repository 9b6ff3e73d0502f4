//! The tool surface exposed to the agent layer.
//!
//! `Toolkit` wires the catalog into each component once; every method is a
//! synchronous read-only query, so a single `Toolkit` can be cloned into
//! any number of concurrent request handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::LocatorConfig;
use crate::flood::{self, FloodDataResponse};
use crate::locator::{self, KindFilter, LocatorOutcome, LocatorRequest};
use crate::models::RankedFacility;
use crate::search::FacilitySearch;
use crate::tips::TipFilter;

#[derive(Debug, Clone)]
pub struct Toolkit {
    catalog: Catalog,
    search: FacilitySearch,
    tips: TipFilter,
    locator: Arc<LocatorConfig>,
}

impl Toolkit {
    pub fn new(catalog: Catalog, locator: LocatorConfig) -> Self {
        Self {
            search: FacilitySearch::new(&catalog),
            tips: TipFilter::new(Arc::clone(&catalog.tips)),
            catalog,
            locator: Arc::new(locator),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn locator_config(&self) -> &LocatorConfig {
        &self.locator
    }

    /// Every facility within `max_distance_km` (default from config) of the
    /// named place, nearest first. Empty when the place is unknown.
    pub fn find_nearby_facilities(
        &self,
        flood_place: &str,
        max_distance_km: Option<f64>,
    ) -> Vec<RankedFacility> {
        let radius = max_distance_km.unwrap_or(self.locator.default_radius_km);
        self.search.find_nearby(flood_place, radius)
    }

    pub fn get_tips_by_categories<S: AsRef<str>>(&self, categories: &[S]) -> Vec<String> {
        self.tips.filter(categories)
    }

    pub fn flood_data_tool(&self, place_name: &str) -> FloodDataResponse {
        flood::flood_data_tool(self.search.resolver(), place_name)
    }

    /// Shelter/hospital lookup as shown to the user: filtered by kind and
    /// capped at `limit` (default and ceiling from config, floor of one).
    pub fn locate_shelters(
        &self,
        place: &str,
        kind: KindFilter,
        radius_km: Option<f64>,
        limit: Option<usize>,
    ) -> LocatorOutcome {
        let max = self.locator.max_results;
        let request = LocatorRequest {
            place: place.to_string(),
            radius_km: radius_km.unwrap_or(self.locator.shelter_radius_km),
            kind,
            limit: limit.map_or(max, |l| l.clamp(1, max.max(1))),
        };
        locator::locate(&self.search, &request)
    }
}
