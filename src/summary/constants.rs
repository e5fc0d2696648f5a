/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_FILE: &str = "nutrition.json";

/// Minimum similarity ratio (0 to 1) for a fuzzy match to count.
pub const SIMILARITY_CUTOFF: f64 = 0.6;

/// Quantities below this are a count of units; at or above it, grams.
///
/// Kept for compatibility, but it is fragile: "10 eggs" is read as 10 g.
pub const UNIT_COUNT_THRESHOLD: f64 = 10.0;

/// Typical weight in grams of one informal unit.
pub const UNIT_CONVERSIONS: &[(&str, f64)] = &[
    ("egg", 50.0),
    ("banana", 118.0),
    ("apple", 200.0),
    ("orange", 130.0),
    ("kiwi", 70.0),
    ("slice of bread", 30.0),
    ("loaf of bread", 500.0),
    ("cup of rice", 200.0),
    ("cup of oats", 80.0),
    ("cup of flour", 120.0),
    ("tablespoon of butter", 14.0),
    ("tablespoon of peanut butter", 16.0),
    ("tablespoon of sugar", 12.0),
    ("teaspoon of salt", 6.0),
    ("potato", 150.0),
    ("sweet potato", 130.0),
    ("chicken breast", 180.0),
    ("steak", 250.0),
    ("fillet of salmon", 200.0),
];
