use crate::models::{NutrientRecord, ResolvedEntry};

/// One line per nutrient: label padded to 17 columns, whole value
/// right-aligned in 6, then the unit.
pub fn summary_lines(totals: &NutrientRecord) -> Vec<String> {
    totals
        .iter()
        .map(|(nutrient, value)| {
            format!(
                "{:<17}{:>6} {}",
                format!("{}:", nutrient.label()),
                value.trunc() as i64,
                nutrient.unit()
            )
        })
        .collect()
}

/// Describe how a meal entry was resolved.
pub fn entry_line(entry: &ResolvedEntry) -> String {
    match (&entry.food, &entry.unit) {
        (Some(food), _) => format!(
            "  {} ({}) → {}, {:.0} g",
            entry.input, entry.quantity, food, entry.grams
        ),
        (None, Some(unit)) => format!(
            "  {} ({}) → {} ({:.0} g), no matching food",
            entry.input, entry.quantity, unit, entry.grams
        ),
        (None, None) => format!("  {} ({}) → not found", entry.input, entry.quantity),
    }
}
