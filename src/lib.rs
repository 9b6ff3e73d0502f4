//! DAAS - disaster-response tool layer
//!
//! Read-only catalogs of flood-affected places, relief facilities, and
//! safety tips, plus the queries the agent layer calls as tools: nearest
//! facility search, flood intensity lookup, and tip filtering.

pub mod api;
pub mod catalog;
pub mod config;
pub mod distance;
pub mod error;
pub mod flood;
pub mod locator;
pub mod models;
pub mod search;
pub mod tips;
pub mod tools;

pub use catalog::Catalog;
pub use error::DataError;
pub use models::{FacilityRecord, FloodIntensity, PlaceRecord, RankedFacility, TipRecord};
pub use tools::Toolkit;
