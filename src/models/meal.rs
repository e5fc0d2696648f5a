use log::debug;

use crate::error::{NutritionError, Result};

/// Parse a user-entered amount (quantity or nutrient value).
///
/// Accepts any finite, non-negative decimal number.
pub fn parse_amount(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutritionError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() {
        return Err(NutritionError::InvalidInput(format!(
            "'{}' is not a finite number",
            input.trim()
        )));
    }
    if value < 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "'{}' is negative",
            input.trim()
        )));
    }

    Ok(value)
}

/// Quantities entered during a session, keyed by the raw food text.
///
/// Entering the same text again adds to its quantity. Entries keep the order
/// in which they were first entered.
#[derive(Debug, Clone, Default)]
pub struct MealAccumulator {
    entries: Vec<(String, f64)>,
}

impl MealAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to `food`, returning the new cumulative quantity.
    pub fn add(&mut self, food: &str, quantity: f64) -> Result<f64> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(NutritionError::InvalidInput(format!(
                "quantity for {} must be a non-negative number",
                food
            )));
        }

        match self.entries.iter_mut().find(|(name, _)| name == food) {
            Some((_, total)) => {
                *total += quantity;
                Ok(*total)
            }
            None => {
                self.entries.push((food.to_string(), quantity));
                Ok(quantity)
            }
        }
    }

    pub fn get(&self, food: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == food)
            .map(|(_, qty)| *qty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for MealAccumulator {
    /// Builds an accumulator, summing repeated names. Invalid quantities are dropped.
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut meal = MealAccumulator::new();
        for (name, qty) in iter {
            let name: String = name.into();
            if let Err(e) = meal.add(&name, qty) {
                debug!("Skipping entry: {}", e);
            }
        }
        meal
    }
}
