//! Error types for dataset loading.
//!
//! A place or facility that cannot be found is not an error; lookups return
//! `Option` or an outcome enum instead. `DataError` is reserved for datasets
//! that cannot be trusted, so bad ingestion is never silently dropped.

use std::path::PathBuf;

use thiserror::Error;

/// Which dataset a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Places,
    Facilities,
    Tips,
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dataset::Places => write!(f, "places"),
            Dataset::Facilities => write!(f, "facilities"),
            Dataset::Tips => write!(f, "tips"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read {dataset} dataset at {}: {source}", .path.display())]
    Io {
        dataset: Dataset,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {dataset} dataset: {source}")]
    Csv {
        dataset: Dataset,
        #[source]
        source: csv::Error,
    },

    #[error("{dataset} dataset is missing required column '{column}'")]
    MissingColumn {
        dataset: Dataset,
        column: &'static str,
    },

    #[error("{dataset} row {row} ('{record}'): field '{field}' has invalid numeric value '{value}'")]
    InvalidNumber {
        dataset: Dataset,
        row: usize,
        record: String,
        field: &'static str,
        value: String,
    },

    #[error("{dataset} row {row}: required field '{field}' is empty")]
    EmptyField {
        dataset: Dataset,
        row: usize,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
