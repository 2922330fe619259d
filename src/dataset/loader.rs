//! Dataset loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dataset::types::Dataset;
use crate::dataset::validation::{validate_dataset, ValidationError};

/// Error type for dataset loading.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a dataset from its JSON text.
pub fn parse_dataset(content: &str) -> Result<Dataset, DatasetError> {
    let dataset: Dataset = serde_json::from_str(content)?;
    validate_dataset(&dataset).map_err(DatasetError::Validation)?;

    for restriction in &dataset.restrictions {
        let ranges = restriction.hour_ranges().unwrap_or_default();
        if ranges.iter().any(|r| r.wraps_midnight()) {
            tracing::warn!(
                restriction = %restriction.id,
                hours = restriction.restricted_hours.as_deref().unwrap_or_default(),
                "Restricted hours wrap past midnight"
            );
        }
    }
    Ok(dataset)
}

/// Load and validate the vehicles+restrictions catalog from a JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&content)?;

    tracing::info!(
        path = %path.display(),
        vehicles = dataset.vehicles.len(),
        restrictions = dataset.restrictions.len(),
        "Dataset loaded"
    );
    Ok(dataset)
}
