use std::collections::BTreeMap;

use crate::summary::constants::{UNIT_CONVERSIONS, UNIT_COUNT_THRESHOLD};

/// Read-only map from informal unit names to grams per unit.
#[derive(Debug, Clone)]
pub struct UnitTable {
    grams: BTreeMap<&'static str, f64>,
}

impl UnitTable {
    /// The built-in table of common foods and portions.
    pub fn standard() -> Self {
        Self::from_entries(UNIT_CONVERSIONS)
    }

    pub fn from_entries(entries: &[(&'static str, f64)]) -> Self {
        Self {
            grams: entries.iter().copied().collect(),
        }
    }

    pub fn grams_per_unit(&self, unit: &str) -> Option<f64> {
        self.grams.get(unit).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.grams.keys().map(|unit| &**unit)
    }

    /// Convert an entered quantity of `unit` to grams.
    ///
    /// Below [`UNIT_COUNT_THRESHOLD`] the quantity is a count of units;
    /// otherwise it is already grams. Returns `None` for an unknown unit.
    pub fn to_grams(&self, unit: &str, quantity: f64) -> Option<f64> {
        let per_unit = self.grams_per_unit(unit)?;
        Some(if quantity < UNIT_COUNT_THRESHOLD {
            per_unit * quantity
        } else {
            quantity
        })
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::standard()
    }
}
