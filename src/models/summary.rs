use crate::models::NutrientRecord;

/// How a single meal entry was resolved during summarizing.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    /// Raw text the user entered.
    pub input: String,

    /// Cumulative quantity entered for this text.
    pub quantity: f64,

    /// Unit-table key applied, if the input matched one.
    pub unit: Option<String>,

    /// Dataset food the entry resolved to, if any.
    pub food: Option<String>,

    /// Grams counted toward the totals.
    pub grams: f64,
}

impl ResolvedEntry {
    pub fn is_resolved(&self) -> bool {
        self.food.is_some()
    }
}

/// Totals for a meal plus the resolution of each entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionSummary {
    pub totals: NutrientRecord,
    pub entries: Vec<ResolvedEntry>,
}

impl NutritionSummary {
    /// Entries that matched nothing in the dataset.
    pub fn unresolved(&self) -> impl Iterator<Item = &ResolvedEntry> {
        self.entries.iter().filter(|e| !e.is_resolved())
    }
}
