//! Flood intensity lookup and its user-facing severity wording.

use serde::{Deserialize, Serialize};

use crate::models::FloodIntensity;
use crate::search::PlaceResolver;

pub const PLACE_NOT_FOUND: &str = "place not found";

/// Six ordered severity levels, from dry ground to rooftop-deep water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Dry,
    Light,
    Moderate,
    Severe,
    Extreme,
    Submerged,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Dry,
            Severity::Light,
            Severity::Moderate,
            Severity::Severe,
            Severity::Extreme,
            Severity::Submerged,
        ]
    }

    /// Map a numeric level. Levels above 5 clamp to `Submerged`.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Dry),
            1 => Some(Severity::Light),
            2 => Some(Severity::Moderate),
            3 => Some(Severity::Severe),
            4 => Some(Severity::Extreme),
            n if n >= 5 => Some(Severity::Submerged),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Dry => "dry",
            Severity::Light => "light",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Extreme => "extreme",
            Severity::Submerged => "submerged",
        }
    }

    /// Calm, number-free wording shown to the user
    pub fn description(&self) -> &'static str {
        match self {
            Severity::Dry => "The area is completely dry and safe right now. No flooding at all.",
            Severity::Light => {
                "There is light waterlogging in low-lying areas. Roads are passable with care."
            }
            Severity::Moderate => {
                "Water has entered some streets and ground floors. It is unsafe to walk or drive in many places."
            }
            Severity::Severe => {
                "Flooding is severe. Water is knee-deep to waist-deep in most areas. Many homes are flooded."
            }
            Severity::Extreme => {
                "Extremely dangerous flooding. Water is above head level in many places. Immediate rescue may be needed."
            }
            Severity::Submerged => {
                "The area is under deep floodwater. Only rooftops are visible in several locations. Urgent rescue is required."
            }
        }
    }
}

impl FloodIntensity {
    /// Severity for this intensity, if it can be interpreted.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            FloodIntensity::Level(level) => Severity::from_level(*level),
            FloodIntensity::Label(label) => {
                let label = label.trim();
                if let Ok(level) = label.parse::<i64>() {
                    return Severity::from_level(level);
                }
                Severity::all()
                    .iter()
                    .copied()
                    .find(|s| s.name().eq_ignore_ascii_case(label))
            }
        }
    }
}

/// Payload returned to the flood-intensity agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FloodDataResponse {
    Success { intensity: FloodIntensity },
    Error { error_message: String },
}

/// Look up the flood intensity recorded for a place.
pub fn flood_data_tool(resolver: &PlaceResolver, place_name: &str) -> FloodDataResponse {
    match resolver.find_place(place_name) {
        Some(place) => FloodDataResponse::Success {
            intensity: place.flood_intensity.clone(),
        },
        None => FloodDataResponse::Error {
            error_message: PLACE_NOT_FOUND.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlaceCatalog;
    use crate::models::PlaceRecord;
    use serde_json::json;
    use std::sync::Arc;

    fn resolver() -> PlaceResolver {
        PlaceResolver::new(Arc::new(PlaceCatalog::new(vec![
            PlaceRecord::new("East Fort", 8.4834, 76.9490, FloodIntensity::Level(2)),
            PlaceRecord::new(
                "Kuttanad",
                9.4000,
                76.4200,
                FloodIntensity::Label("Extreme".to_string()),
            ),
        ])))
    }

    #[test]
    fn test_success_payload() {
        let response = flood_data_tool(&resolver(), "east fort");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "success", "intensity": 2})
        );
    }

    #[test]
    fn test_not_found_payload() {
        let response = flood_data_tool(&resolver(), "nowhere");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "error", "error_message": "place not found"})
        );
    }

    #[test]
    fn test_label_payload_round_trips() {
        let response = flood_data_tool(&resolver(), "KUTTANAD");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"status": "success", "intensity": "Extreme"}));

        let back: FloodDataResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn test_severity_from_levels() {
        assert_eq!(FloodIntensity::Level(0).severity(), Some(Severity::Dry));
        assert_eq!(FloodIntensity::Level(3).severity(), Some(Severity::Severe));
        assert_eq!(FloodIntensity::Level(9).severity(), Some(Severity::Submerged));
        assert_eq!(FloodIntensity::Level(-1).severity(), None);
    }

    #[test]
    fn test_severity_from_labels() {
        assert_eq!(
            FloodIntensity::Label(" 4 ".to_string()).severity(),
            Some(Severity::Extreme)
        );
        assert_eq!(
            FloodIntensity::Label("MODERATE".to_string()).severity(),
            Some(Severity::Moderate)
        );
        assert_eq!(FloodIntensity::Label("unknown".to_string()).severity(), None);
    }

    #[test]
    fn test_descriptions_never_show_numbers() {
        for severity in Severity::all() {
            assert!(!severity.description().chars().any(|c| c.is_ascii_digit()));
        }
    }
}
