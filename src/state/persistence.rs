use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{NutritionError, Result};
use crate::models::Dataset;

/// Load the dataset from a JSON file.
///
/// A missing file and an unparsable file are both data errors; any other
/// I/O failure is returned as-is.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(NutritionError::DatasetMissing {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let foods: Dataset =
        serde_json::from_str(&content).map_err(|e| NutritionError::DatasetMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if let Some((name, _)) = foods.iter().find(|(_, record)| !record.is_valid()) {
        return Err(NutritionError::DatasetMalformed {
            path: path.to_path_buf(),
            reason: format!("'{}' has a negative or non-finite value", name),
        });
    }

    Ok(foods)
}

/// Load the dataset, treating a missing or corrupt file as empty.
pub fn load_dataset_or_empty<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    match load_dataset(&path) {
        Ok(foods) => Ok(foods),
        Err(e) if e.is_data_error() => {
            warn!("{}; starting from an empty dataset", e);
            Ok(Dataset::new())
        }
        Err(e) => Err(e),
    }
}

/// Save the dataset as JSON indented by four spaces.
pub fn save_dataset<P: AsRef<Path>>(path: P, foods: &Dataset) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    foods.serialize(&mut ser)?;
    buf.push(b'\n');

    fs::write(path.as_ref(), buf)?;
    debug!("Saved {} foods to {}", foods.len(), path.as_ref().display());
    Ok(())
}
