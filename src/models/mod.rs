//! Core data models for the disaster-response datasets.

pub mod facility;
pub mod place;
pub mod tip;

pub use facility::{FacilityRecord, RankedFacility};
pub use place::{FloodIntensity, GeoPoint, PlaceRecord};
pub use tip::TipRecord;

/// Normalize a name or category for case-insensitive matching:
/// surrounding whitespace removed, letters lower-cased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
