//! Place resolution and nearest-facility search.
//!
//! Both components take their catalogs at construction time and only ever
//! read them, so one instance can serve concurrent queries.

mod facility;
mod resolver;

pub use facility::{rank_within, FacilitySearch, DEFAULT_MAX_DISTANCE_KM};
pub use resolver::{find_place, PlaceResolver};
