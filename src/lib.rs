pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod summary;

pub use error::{NutritionError, Result};
pub use models::{Dataset, MealAccumulator, NutrientRecord, NutritionSummary};
