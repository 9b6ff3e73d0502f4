//! CSV dataset loading.
//!
//! Each CSV row is first read into a [`RawRecord`] (named string fields) and
//! then converted into a typed record. Conversion never skips a row: a bad
//! number or an empty name fails the whole load with a [`DataError`].

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use tracing::{info, warn};

use super::{Catalog, FacilityCatalog, PlaceCatalog, TipCatalog};
use crate::config::DatasetsConfig;
use crate::error::{DataError, Dataset, Result};
use crate::models::{normalize, FacilityRecord, FloodIntensity, GeoPoint, PlaceRecord, TipRecord};

/// A required column: its canonical name plus accepted header aliases.
struct Column {
    name: &'static str,
    aliases: &'static [&'static str],
}

const PLACE_NAME: Column = Column {
    name: "place_name",
    aliases: &["place_name", "name"],
};
const LATITUDE: Column = Column {
    name: "latitude",
    aliases: &["latitude", "lat"],
};
const LONGITUDE: Column = Column {
    name: "longitude",
    aliases: &["longitude", "lon"],
};
const FLOOD_INTENSITY: Column = Column {
    name: "flood_intensity",
    aliases: &["flood_intensity", "intensity"],
};
const FACILITY_NAME: Column = Column {
    name: "name",
    aliases: &["name", "facility_name"],
};
const FACILITY_TYPE: Column = Column {
    name: "type",
    aliases: &["type", "category"],
};
const OCCUPANCY: Column = Column {
    name: "occupancy_percent",
    aliases: &["occupancy_percent", "occupancy"],
};
const TIP_CATEGORY: Column = Column {
    name: "category",
    aliases: &["category"],
};
const TIP_TEXT: Column = Column {
    name: "tip",
    aliases: &["tip"],
};

fn required_columns(dataset: Dataset) -> &'static [Column] {
    match dataset {
        Dataset::Places => &[PLACE_NAME, LATITUDE, LONGITUDE, FLOOD_INTENSITY],
        Dataset::Facilities => &[FACILITY_NAME, FACILITY_TYPE, LATITUDE, LONGITUDE, OCCUPANCY],
        Dataset::Tips => &[TIP_CATEGORY, TIP_TEXT],
    }
}

/// One dataset row as named string fields. Field names are matched
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: &str) {
        self.fields.insert(normalize(field), value.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(&normalize(field)).map(String::as_str)
    }

    fn column(&self, dataset: Dataset, column: &Column) -> Result<&str> {
        column
            .aliases
            .iter()
            .find_map(|alias| self.get(alias))
            .ok_or(DataError::MissingColumn {
                dataset,
                column: column.name,
            })
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (k, v) in iter {
            record.insert(k.as_ref(), v.as_ref());
        }
        record
    }
}

/// Read every row of a CSV dataset (optionally gzip-compressed) into raw records.
pub fn read_records(path: &Path, dataset: Dataset) -> Result<Vec<RawRecord>> {
    let file = File::open(path).map_err(|source| DataError::Io {
        dataset,
        path: path.to_path_buf(),
        source,
    })?;
    let reader: Box<dyn Read> = if path.extension().map_or(false, |e| e == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let csv_err = |source| DataError::Csv { dataset, source };

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(normalize)
        .collect();

    for column in required_columns(dataset) {
        if !column.aliases.iter().any(|a| headers.iter().any(|h| h == a)) {
            return Err(DataError::MissingColumn {
                dataset,
                column: column.name,
            });
        }
    }

    let mut records: Vec<RawRecord> = Vec::new();
    for result in csv_reader.records() {
        let row = result.map_err(csv_err)?;
        let record: RawRecord = headers.iter().zip(row.iter()).collect();
        records.push(record);
    }

    Ok(records)
}

fn non_empty<'a>(dataset: Dataset, row: usize, column: &Column, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DataError::EmptyField {
            dataset,
            row,
            field: column.name,
        });
    }
    Ok(value)
}

fn parse_number(
    dataset: Dataset,
    row: usize,
    record: &str,
    column: &Column,
    value: &str,
) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(DataError::InvalidNumber {
            dataset,
            row,
            record: record.to_string(),
            field: column.name,
            value: value.to_string(),
        }),
    }
}

fn warn_if_out_of_range(dataset: Dataset, name: &str, lat: f64, lon: f64) {
    if !GeoPoint::new(lat, lon).in_range() {
        warn!(
            "{} record '{}' has out-of-range coordinates ({}, {})",
            dataset, name, lat, lon
        );
    }
}

/// Convert raw rows into place records.
pub fn places_from_records(records: &[RawRecord]) -> Result<Vec<PlaceRecord>> {
    let dataset = Dataset::Places;
    records
        .iter()
        .enumerate()
        .map(|(i, raw)| -> Result<PlaceRecord> {
            let row = i + 1;
            let name = non_empty(dataset, row, &PLACE_NAME, raw.column(dataset, &PLACE_NAME)?)?;
            let lat = parse_number(dataset, row, name, &LATITUDE, raw.column(dataset, &LATITUDE)?)?;
            let lon = parse_number(dataset, row, name, &LONGITUDE, raw.column(dataset, &LONGITUDE)?)?;
            let intensity = FloodIntensity::parse(raw.column(dataset, &FLOOD_INTENSITY)?);
            warn_if_out_of_range(dataset, name, lat, lon);

            Ok(PlaceRecord::new(name, lat, lon, intensity))
        })
        .collect()
}

/// Convert raw rows into facility records.
pub fn facilities_from_records(records: &[RawRecord]) -> Result<Vec<FacilityRecord>> {
    let dataset = Dataset::Facilities;
    records
        .iter()
        .enumerate()
        .map(|(i, raw)| -> Result<FacilityRecord> {
            let row = i + 1;
            let name = non_empty(dataset, row, &FACILITY_NAME, raw.column(dataset, &FACILITY_NAME)?)?;
            let category = raw.column(dataset, &FACILITY_TYPE)?.trim();
            let lat = parse_number(dataset, row, name, &LATITUDE, raw.column(dataset, &LATITUDE)?)?;
            let lon = parse_number(dataset, row, name, &LONGITUDE, raw.column(dataset, &LONGITUDE)?)?;
            // "45%" and "45" are both accepted
            let occupancy_raw = raw.column(dataset, &OCCUPANCY)?;
            let occupancy = parse_number(
                dataset,
                row,
                name,
                &OCCUPANCY,
                occupancy_raw.trim().trim_end_matches('%'),
            )?;
            warn_if_out_of_range(dataset, name, lat, lon);

            Ok(FacilityRecord::new(name, category, lat, lon, occupancy))
        })
        .collect()
}

/// Convert raw rows into tip records.
pub fn tips_from_records(records: &[RawRecord]) -> Result<Vec<TipRecord>> {
    let dataset = Dataset::Tips;
    records
        .iter()
        .enumerate()
        .map(|(i, raw)| -> Result<TipRecord> {
            let row = i + 1;
            let category = non_empty(dataset, row, &TIP_CATEGORY, raw.column(dataset, &TIP_CATEGORY)?)?;
            let tip = non_empty(dataset, row, &TIP_TEXT, raw.column(dataset, &TIP_TEXT)?)?;
            Ok(TipRecord::new(category, tip))
        })
        .collect()
}

pub fn load_places(path: &Path) -> Result<PlaceCatalog> {
    info!("Loading places from {}", path.display());
    let records = read_records(path, Dataset::Places)?;
    let catalog = PlaceCatalog::new(places_from_records(&records)?);
    info!("Loaded {} places", catalog.len());
    Ok(catalog)
}

pub fn load_facilities(path: &Path) -> Result<FacilityCatalog> {
    info!("Loading facilities from {}", path.display());
    let records = read_records(path, Dataset::Facilities)?;
    let catalog = FacilityCatalog::new(facilities_from_records(&records)?);
    info!("Loaded {} facilities", catalog.len());
    Ok(catalog)
}

pub fn load_tips(path: &Path) -> Result<TipCatalog> {
    info!("Loading safety tips from {}", path.display());
    let records = read_records(path, Dataset::Tips)?;
    let catalog = TipCatalog::new(tips_from_records(&records)?);
    info!("Loaded {} tips", catalog.len());
    Ok(catalog)
}

/// Load all three datasets. Must complete before any query is served.
pub fn load_catalog(paths: &DatasetsConfig) -> Result<Catalog> {
    Ok(Catalog::new(
        load_places(&paths.places)?,
        load_facilities(&paths.facilities)?,
        load_tips(&paths.tips)?,
    ))
}
