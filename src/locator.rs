//! Shelter and aid locator: the presentation boundary on top of facility
//! search. Filters by facility kind, applies the top-K cap, and keeps
//! "place not found" apart from "nothing in range".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{normalize, RankedFacility};
use crate::search::FacilitySearch;

/// Most results a user is ever shown
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Radius the locator searches when the user gives none
pub const DEFAULT_LOCATOR_RADIUS_KM: f64 = 5.0;

/// Broad class of a facility category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityKind {
    /// School, college, or community centre
    Shelter,
    Hospital,
    Other,
}

impl FacilityKind {
    pub fn classify(category: &str) -> Self {
        match normalize(category).as_str() {
            "school" | "college" | "community centre" | "community center" => {
                FacilityKind::Shelter
            }
            "hospital" => FacilityKind::Hospital,
            _ => FacilityKind::Other,
        }
    }
}

/// Which facilities the user asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    Any,
    Shelter,
    Hospital,
}

impl KindFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::Shelter => FacilityKind::classify(category) == FacilityKind::Shelter,
            KindFilter::Hospital => FacilityKind::classify(category) == FacilityKind::Hospital,
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "any" | "" => Ok(KindFilter::Any),
            "shelter" => Ok(KindFilter::Shelter),
            "hospital" => Ok(KindFilter::Hospital),
            other => Err(format!(
                "unknown facility kind '{}' (expected any, shelter, or hospital)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocatorRequest {
    pub place: String,
    pub radius_km: f64,
    pub kind: KindFilter,
    pub limit: usize,
}

impl LocatorRequest {
    pub fn new(place: &str) -> Self {
        Self {
            place: place.to_string(),
            radius_km: DEFAULT_LOCATOR_RADIUS_KM,
            kind: KindFilter::Any,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocatorOutcome {
    PlaceNotFound,
    NoneInRange,
    Found(Vec<RankedFacility>),
}

impl LocatorOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            LocatorOutcome::PlaceNotFound => "place_not_found",
            LocatorOutcome::NoneInRange => "none_in_range",
            LocatorOutcome::Found(_) => "found",
        }
    }

    pub fn results(&self) -> &[RankedFacility] {
        match self {
            LocatorOutcome::Found(results) => results,
            _ => &[],
        }
    }

    /// One `"<name> - <distance> km - (<occupancy>% capacity)"` line per result
    pub fn lines(&self) -> Vec<String> {
        self.results().iter().map(RankedFacility::display_line).collect()
    }
}

/// Nearest facilities of the requested kind, capped at `request.limit`.
///
/// `NoneInRange` means no facility of that kind lies within the radius,
/// regardless of the limit.
pub fn locate(search: &FacilitySearch, request: &LocatorRequest) -> LocatorOutcome {
    if search.resolver().find_place(&request.place).is_none() {
        return LocatorOutcome::PlaceNotFound;
    }

    let mut results: Vec<RankedFacility> = search
        .find_nearby(&request.place, request.radius_km)
        .into_iter()
        .filter(|r| request.kind.matches(&r.facility.category))
        .collect();

    // Emptiness is decided before the cap so a zero limit never reads as "none in range"
    if results.is_empty() {
        return LocatorOutcome::NoneInRange;
    }

    let in_range = results.len();
    results.truncate(request.limit);

    debug!(
        "Locator returned {} of {} {:?} facilities near '{}'",
        results.len(),
        in_range,
        request.kind,
        request.place
    );

    LocatorOutcome::Found(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, FacilityCatalog, PlaceCatalog, TipCatalog};
    use crate::models::{FacilityRecord, FloodIntensity, PlaceRecord};

    fn search() -> FacilitySearch {
        let mut facilities = vec![
            FacilityRecord::new("General Hospital", "Hospital", 10.005, 76.0, 80.0),
            FacilityRecord::new("St. Marys College", "college", 10.01, 76.0, 60.0),
            FacilityRecord::new("Fuel Depot", "warehouse", 10.002, 76.0, 0.0),
            FacilityRecord::new("Community Hall", "Community Centre", 10.03, 76.0, 30.0),
        ];
        for i in 0..12 {
            facilities.push(FacilityRecord::new(
                &format!("School {}", i),
                "school",
                10.0 + 0.001 * (i as f64 + 1.0),
                76.001,
                10.0,
            ));
        }
        FacilitySearch::new(&Catalog::new(
            PlaceCatalog::new(vec![PlaceRecord::new(
                "Kunnam",
                10.0,
                76.0,
                FloodIntensity::Level(3),
            )]),
            FacilityCatalog::new(facilities),
            TipCatalog::default(),
        ))
    }

    #[test]
    fn test_classify() {
        assert_eq!(FacilityKind::classify(" School "), FacilityKind::Shelter);
        assert_eq!(FacilityKind::classify("community center"), FacilityKind::Shelter);
        assert_eq!(FacilityKind::classify("HOSPITAL"), FacilityKind::Hospital);
        assert_eq!(FacilityKind::classify("warehouse"), FacilityKind::Other);
    }

    #[test]
    fn test_kind_filter_parse() {
        assert_eq!("Shelter".parse::<KindFilter>(), Ok(KindFilter::Shelter));
        assert_eq!("".parse::<KindFilter>(), Ok(KindFilter::Any));
        assert!("restaurant".parse::<KindFilter>().is_err());
    }

    #[test]
    fn test_caps_at_limit() {
        let outcome = locate(&search(), &LocatorRequest::new("kunnam"));
        assert_eq!(outcome.status(), "found");
        assert_eq!(outcome.results().len(), DEFAULT_RESULT_LIMIT);
        assert!(outcome
            .results()
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn test_hospital_only() {
        let mut request = LocatorRequest::new("Kunnam");
        request.kind = KindFilter::Hospital;

        let outcome = locate(&search(), &request);
        let names: Vec<&str> = outcome
            .results()
            .iter()
            .map(|r| r.facility.name.as_str())
            .collect();
        assert_eq!(names, vec!["General Hospital"]);
    }

    #[test]
    fn test_shelter_excludes_hospitals_and_other() {
        let mut request = LocatorRequest::new("Kunnam");
        request.kind = KindFilter::Shelter;
        request.limit = 100;

        let outcome = locate(&search(), &request);
        assert_eq!(outcome.results().len(), 14);
        assert!(outcome
            .results()
            .iter()
            .all(|r| FacilityKind::classify(&r.facility.category) == FacilityKind::Shelter));
    }

    #[test]
    fn test_not_found_vs_none_in_range() {
        let search = search();
        assert_eq!(
            locate(&search, &LocatorRequest::new("Atlantis")),
            LocatorOutcome::PlaceNotFound
        );

        let mut request = LocatorRequest::new("Kunnam");
        request.radius_km = 0.01;
        let outcome = locate(&search, &request);
        assert_eq!(outcome, LocatorOutcome::NoneInRange);
        assert!(outcome.lines().is_empty());
    }

    #[test]
    fn test_lines_format() {
        let mut request = LocatorRequest::new("Kunnam");
        request.kind = KindFilter::Hospital;

        let lines = locate(&search(), &request).lines();
        assert_eq!(lines, vec!["General Hospital - 0.556 km - (80% capacity)"]);
    }

    #[test]
    fn test_zero_limit_is_not_none_in_range() {
        let mut request = LocatorRequest::new("Kunnam");
        request.limit = 0;

        let outcome = locate(&search(), &request);
        assert_ne!(outcome, LocatorOutcome::NoneInRange);
        assert_eq!(outcome.status(), "found");
    }
}
