use std::collections::BTreeSet;

use log::{debug, info};

use crate::models::{Dataset, MealAccumulator, NutritionSummary, ResolvedEntry};
use crate::summary::constants::SIMILARITY_CUTOFF;
use crate::summary::matcher::find_closest_match;
use crate::summary::units::UnitTable;

/// Turns meal entries into nutrient totals.
///
/// Holds no mutable state: the same dataset and meal always give the
/// same summary.
#[derive(Debug, Clone)]
pub struct Summarizer {
    units: UnitTable,
    cutoff: f64,
}

impl Summarizer {
    pub fn new(units: UnitTable, cutoff: f64) -> Self {
        Self { units, cutoff }
    }

    /// Resolve one raw entry to a dataset food and a weight in grams.
    ///
    /// The input is matched against dataset and unit names together. A unit
    /// match converts the quantity to grams and is then matched again
    /// against dataset names only. Unit names take precedence when a name is
    /// in both.
    pub fn resolve(&self, foods: &Dataset, input: &str, quantity: f64) -> ResolvedEntry {
        let candidates: BTreeSet<&str> = foods
            .keys()
            .map(String::as_str)
            .chain(self.units.keys())
            .collect();

        let mut matched = find_closest_match(input, candidates.iter().copied(), self.cutoff);
        let mut grams = quantity;
        let mut unit = None;

        if let Some(name) = matched {
            if let Some(converted) = self.units.to_grams(name, quantity) {
                debug!("'{}' x {} is {} g via unit '{}'", input, quantity, converted, name);
                grams = converted;
                unit = Some(name.to_string());
                matched = find_closest_match(name, foods.keys().map(String::as_str), self.cutoff);
            }
        }

        let food = matched
            .filter(|name| foods.contains_key(*name))
            .map(str::to_string);
        if food.is_none() {
            info!("'{}' matched no dataset food; skipped", input);
        }

        ResolvedEntry {
            input: input.to_string(),
            quantity,
            unit,
            food,
            grams,
        }
    }

    /// Compute totals for every entry in the meal.
    ///
    /// Entries that resolve to no dataset food contribute nothing.
    pub fn summarize(&self, foods: &Dataset, meal: &MealAccumulator) -> NutritionSummary {
        let mut summary = NutritionSummary::default();

        for (input, quantity) in meal.iter() {
            let entry = self.resolve(foods, input, quantity);
            if let Some(record) = entry.food.as_deref().and_then(|name| foods.get(name)) {
                summary.totals += record.scaled(entry.grams);
            }
            summary.entries.push(entry);
        }

        summary
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(UnitTable::standard(), SIMILARITY_CUTOFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientRecord;

    fn foods() -> Dataset {
        let mut foods = Dataset::new();
        foods.insert("egg".to_string(), NutrientRecord::new(155.0, 11.0, 13.0, 1.1, 1.1));
        foods.insert("bread".to_string(), NutrientRecord::new(265.0, 3.2, 9.0, 49.0, 5.0));
        foods.insert("banana".to_string(), NutrientRecord::new(89.0, 0.3, 1.1, 23.0, 12.0));
        foods
    }

    #[test]
    fn test_unit_entry_converts_then_resolves() {
        let entry = Summarizer::default().resolve(&foods(), "egg", 2.0);
        assert_eq!(entry.unit.as_deref(), Some("egg"));
        assert_eq!(entry.food.as_deref(), Some("egg"));
        assert_eq!(entry.grams, 100.0);
    }

    #[test]
    fn test_plain_food_uses_grams() {
        let entry = Summarizer::default().resolve(&foods(), "bred", 60.0);
        assert_eq!(entry.unit, None);
        assert_eq!(entry.food.as_deref(), Some("bread"));
        assert_eq!(entry.grams, 60.0);
    }

    #[test]
    fn test_unit_without_dataset_food_is_skipped() {
        // "steak" is a unit but nothing in the dataset resembles it.
        let entry = Summarizer::default().resolve(&foods(), "steak", 1.0);
        assert_eq!(entry.unit.as_deref(), Some("steak"));
        assert_eq!(entry.food, None);
        assert_eq!(entry.grams, 250.0);
    }

    #[test]
    fn test_unknown_entry_contributes_nothing() {
        let meal: MealAccumulator = [("xyzzy123", 500.0)].into_iter().collect();
        let summary = Summarizer::default().summarize(&foods(), &meal);

        assert_eq!(summary.totals, NutrientRecord::default());
        assert_eq!(summary.unresolved().count(), 1);
    }

    #[test]
    fn test_summarize_sums_entries() {
        let meal: MealAccumulator = [("egg", 2.0), ("bread", 50.0)].into_iter().collect();
        let summary = Summarizer::default().summarize(&foods(), &meal);

        // 100 g egg + 50 g bread
        assert!((summary.totals.calories - (155.0 + 132.5)).abs() < 1e-9);
        assert!((summary.totals.carbohydrate - (1.1 + 24.5)).abs() < 1e-9);
        assert_eq!(summary.entries.len(), 2);
    }

    #[test]
    fn test_summarize_is_repeatable() {
        let summarizer = Summarizer::default();
        let foods = foods();
        let meal: MealAccumulator = [("banana", 1.0), ("egg", 3.0)].into_iter().collect();

        assert_eq!(
            summarizer.summarize(&foods, &meal),
            summarizer.summarize(&foods, &meal)
        );
    }
}
