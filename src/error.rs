use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("Dataset file not found: {}", path.display())]
    DatasetMissing { path: PathBuf },

    #[error("Malformed dataset {}: {reason}", path.display())]
    DatasetMalformed { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl NutritionError {
    /// True for a dataset file that is absent or cannot be parsed.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            NutritionError::DatasetMissing { .. } | NutritionError::DatasetMalformed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NutritionError>;
