//! Place records from the flood-severity dataset.

use serde::{Deserialize, Serialize};

/// Geographic point (lat/lon) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when latitude is within [-90, 90] and longitude within [-180, 180].
    ///
    /// Out-of-range points are still accepted by the distance engine; this is
    /// only used to flag suspicious records at load time.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Flood intensity as recorded in the dataset: usually a numeric level,
/// occasionally a free-form label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FloodIntensity {
    Level(i64),
    Label(String),
}

impl FloodIntensity {
    /// Parse a raw dataset cell. Integers become `Level`, anything else is
    /// kept verbatim (trimmed) as a `Label`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(level) => FloodIntensity::Level(level),
            Err(_) => FloodIntensity::Label(raw.to_string()),
        }
    }
}

impl std::fmt::Display for FloodIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloodIntensity::Level(level) => write!(f, "{}", level),
            FloodIntensity::Label(label) => write!(f, "{}", label),
        }
    }
}

/// A named place with its coordinates and current flood intensity.
///
/// The name is returned with its original casing; lookups compare the
/// normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub flood_intensity: FloodIntensity,
}

impl PlaceRecord {
    pub fn new(name: &str, latitude: f64, longitude: f64, flood_intensity: FloodIntensity) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            flood_intensity,
        }
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_parse() {
        assert_eq!(FloodIntensity::parse(" 2 "), FloodIntensity::Level(2));
        assert_eq!(
            FloodIntensity::parse("severe"),
            FloodIntensity::Label("severe".to_string())
        );
    }

    #[test]
    fn test_intensity_serializes_untagged() {
        let level = serde_json::to_value(FloodIntensity::Level(2)).unwrap();
        assert_eq!(level, serde_json::json!(2));

        let label = serde_json::to_value(FloodIntensity::Label("high".into())).unwrap();
        assert_eq!(label, serde_json::json!("high"));
    }

    #[test]
    fn test_in_range() {
        assert!(GeoPoint::new(10.0, 76.0).in_range());
        assert!(GeoPoint::new(-90.0, 180.0).in_range());
        assert!(!GeoPoint::new(91.0, 0.0).in_range());
        assert!(!GeoPoint::new(0.0, -180.5).in_range());
    }
}
