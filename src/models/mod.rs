pub mod meal;
pub mod nutrients;
pub mod summary;

pub use meal::{parse_amount, MealAccumulator};
pub use nutrients::{Nutrient, NutrientRecord};
pub use summary::{NutritionSummary, ResolvedEntry};

use std::collections::BTreeMap;

/// Food name to per-100g record. Keys are case-sensitive as stored.
pub type Dataset = BTreeMap<String, NutrientRecord>;
