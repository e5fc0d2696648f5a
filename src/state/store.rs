use std::path::{Path, PathBuf};

use log::info;

use crate::error::{NutritionError, Result};
use crate::models::{Dataset, NutrientRecord};
use crate::state::persistence::{load_dataset, load_dataset_or_empty, save_dataset};

/// The food dataset together with the file it lives in.
///
/// Every addition is written back to the file before it becomes visible
/// here. Foods loaded at startup stay in memory even if the file is later
/// lost.
#[derive(Debug)]
pub struct DatasetStore {
    path: PathBuf,
    foods: Dataset,
}

impl DatasetStore {
    /// Open the dataset at `path`. A missing or corrupt file is an error.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let foods = load_dataset(&path)?;
        info!("Loaded {} foods from {}", foods.len(), path.display());
        Ok(Self { path, foods })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn foods(&self) -> &Dataset {
        &self.foods
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&NutrientRecord> {
        self.foods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.foods.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.foods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Add or replace a food and persist it.
    ///
    /// The file is re-read first so entries written by someone else since
    /// startup are kept; a missing or corrupt file counts as empty. The
    /// merged file contents are then merged into the in-memory dataset. The
    /// read-modify-write is not atomic.
    pub fn add_food(&mut self, name: &str, record: NutrientRecord) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NutritionError::InvalidInput(
                "food name must not be empty".to_string(),
            ));
        }
        if !record.is_valid() {
            return Err(NutritionError::InvalidInput(format!(
                "nutrient values for {} must be non-negative numbers",
                name
            )));
        }

        let mut merged = load_dataset_or_empty(&self.path)?;
        merged.insert(name.to_string(), record);
        save_dataset(&self.path, &merged)?;

        info!("Added {} to {}", name, self.path.display());
        self.foods.extend(merged);
        Ok(())
    }
}
