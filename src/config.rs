use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::locator::{DEFAULT_LOCATOR_RADIUS_KM, DEFAULT_RESULT_LIMIT};
use crate::search::DEFAULT_MAX_DISTANCE_KM;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub datasets: DatasetsConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub locator: LocatorConfig,
}

/// Locations of the three CSV datasets (`.csv` or `.csv.gz`)
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetsConfig {
    pub places: PathBuf,
    pub facilities: PathBuf,
    pub tips: PathBuf,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            places: PathBuf::from("data/flood_data_with_coords.csv"),
            facilities: PathBuf::from("data/facilities_with_coords.csv"),
            tips: PathBuf::from("data/curated_flood_safety_tips.csv"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LocatorConfig {
    /// Radius used by `find_nearby_facilities` when the caller gives none
    pub default_radius_km: f64,
    /// Radius the shelter/aid locator searches within
    pub shelter_radius_km: f64,
    /// Most results ever shown to a user
    pub max_results: usize,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            default_radius_km: DEFAULT_MAX_DISTANCE_KM,
            shelter_radius_km: DEFAULT_LOCATOR_RADIUS_KM,
            max_results: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.locator.default_radius_km, 10.0);
        assert_eq!(config.locator.shelter_radius_km, 5.0);
        assert_eq!(config.locator.max_results, 10);
        assert_eq!(config.server.listen, "0.0.0.0:3000");
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[datasets]\nplaces = \"/srv/places.csv.gz\"\n\n[locator]\nmax_results = 5\n"
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.datasets.places, PathBuf::from("/srv/places.csv.gz"));
        assert_eq!(
            config.datasets.tips,
            PathBuf::from("data/curated_flood_safety_tips.csv")
        );
        assert_eq!(config.locator.max_results, 5);
        assert_eq!(config.locator.shelter_radius_km, 5.0);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[locator]\nmax_results = \"many\"").unwrap();
        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config.locator.default_radius_km, 10.0);
    }
}
