//! Facility records and their per-query ranked form.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// A facility that can serve as shelter or aid during a flood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: String,
    /// Facility type, e.g. "school", "hospital", "college", "community centre"
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub occupancy_percent: f64,
}

impl FacilityRecord {
    pub fn new(
        name: &str,
        category: &str,
        latitude: f64,
        longitude: f64,
        occupancy_percent: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            latitude,
            longitude,
            occupancy_percent,
        }
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A copy of a catalog facility annotated with its distance from the
/// queried place. Produced fresh per query; the catalog is never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFacility {
    #[serde(flatten)]
    pub facility: FacilityRecord,
    /// Distance in kilometers, rounded to 3 decimal places
    pub distance_km: f64,
}

impl RankedFacility {
    /// Render the line shown to the user:
    /// `"<name> - <distance> km - (<occupancy>% capacity)"`
    pub fn display_line(&self) -> String {
        format!(
            "{} - {} km - ({}% capacity)",
            self.facility.name, self.distance_km, self.facility.occupancy_percent
        )
    }
}
