#[macro_use]
extern crate assert_float_eq;

use nutri_calc::models::{Dataset, MealAccumulator, Nutrient, NutrientRecord};
use nutri_calc::state::{load_dataset, save_dataset, DatasetStore};
use nutri_calc::summary::{find_closest_match, Summarizer, UnitTable, SIMILARITY_CUTOFF};
use tempfile::TempDir;

fn make_record(cal: f64, fat: f64, prot: f64, carb: f64, sug: f64) -> NutrientRecord {
    NutrientRecord::new(cal, fat, prot, carb, sug)
}

fn sample_foods() -> Dataset {
    let mut foods = Dataset::new();
    foods.insert("egg".to_string(), make_record(155.0, 11.0, 13.0, 1.1, 1.1));
    foods.insert("bread".to_string(), make_record(265.0, 3.2, 9.0, 49.0, 5.0));
    foods.insert("chicken breast".to_string(), make_record(165.0, 3.6, 31.0, 0.0, 0.0));
    foods
}

fn meal(entries: &[(&str, f64)]) -> MealAccumulator {
    entries.iter().map(|(name, qty)| (*name, *qty)).collect()
}

#[test]
fn test_fuzzy_match_literals() {
    let candidates = ["egg", "bread", "chicken breast"];

    assert_eq!(
        find_closest_match("chiken breast", candidates, SIMILARITY_CUTOFF),
        Some("chicken breast")
    );
    assert_eq!(find_closest_match("xyzzy123", candidates, SIMILARITY_CUTOFF), None);
}

#[test]
fn test_two_eggs_are_one_hundred_grams() {
    let summary = Summarizer::default().summarize(&sample_foods(), &meal(&[("egg", 2.0)]));

    assert_float_absolute_eq!(summary.totals.calories, 155.0, 1e-9);
    assert_float_absolute_eq!(summary.totals.protein, 13.0, 1e-9);
    assert_eq!(summary.entries[0].grams, 100.0);
}

#[test]
fn test_unit_count_boundary_at_ten() {
    let summarizer = Summarizer::default();
    let foods = sample_foods();

    // Below the threshold the quantity is a count of 50 g eggs.
    let nine = summarizer.resolve(&foods, "egg", 9.0);
    assert_eq!(nine.grams, 450.0);

    // From 10 up it is taken as grams, so "10 eggs" is 10 g.
    let ten = summarizer.resolve(&foods, "egg", 10.0);
    assert_eq!(ten.grams, 10.0);
    assert_eq!(ten.food.as_deref(), Some("egg"));
}

#[test]
fn test_misspelled_unit_resolves_through_table() {
    let summary =
        Summarizer::default().summarize(&sample_foods(), &meal(&[("chiken breast", 1.0)]));

    let entry = &summary.entries[0];
    assert_eq!(entry.unit.as_deref(), Some("chicken breast"));
    assert_eq!(entry.food.as_deref(), Some("chicken breast"));
    assert_eq!(entry.grams, 180.0);
    assert_float_absolute_eq!(summary.totals.calories, 165.0 * 1.8, 1e-9);
}

#[test]
fn test_custom_unit_table() {
    let units = UnitTable::from_entries(&[("slice", 25.0)]);
    let mut foods = Dataset::new();
    foods.insert("slice".to_string(), make_record(200.0, 1.0, 1.0, 1.0, 1.0));

    let summarizer = Summarizer::new(units, SIMILARITY_CUTOFF);
    let summary = summarizer.summarize(&foods, &meal(&[("slices", 4.0)]));

    assert_float_absolute_eq!(summary.totals.calories, 200.0, 1e-9);
}

#[test]
fn test_unresolved_entries_are_skipped() {
    let summary = Summarizer::default().summarize(
        &sample_foods(),
        &meal(&[("xyzzy123", 300.0), ("bread", 100.0)]),
    );

    assert_float_absolute_eq!(summary.totals.calories, 265.0, 1e-9);
    let unresolved: Vec<&str> = summary.unresolved().map(|e| e.input.as_str()).collect();
    assert_eq!(unresolved, vec!["xyzzy123"]);
}

#[test]
fn test_summary_is_idempotent() {
    let summarizer = Summarizer::default();
    let foods = sample_foods();
    let entries = meal(&[("egg", 3.0), ("bred", 80.0), ("chicken", 200.0)]);

    let first = summarizer.summarize(&foods, &entries);
    let second = summarizer.summarize(&foods, &entries);
    assert_eq!(first, second);
}

#[test]
fn test_added_food_at_100g_returns_its_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nutrition.json");
    save_dataset(&path, &sample_foods()).unwrap();

    let mut store = DatasetStore::open(&path).unwrap();
    let tofu = make_record(76.0, 4.8, 8.0, 1.9, 0.6);
    store.add_food("tofu", tofu).unwrap();

    let summary = Summarizer::default().summarize(store.foods(), &meal(&[("tofu", 100.0)]));
    for nutrient in Nutrient::ALL {
        assert_float_absolute_eq!(summary.totals.get(nutrient), tofu.get(nutrient), 1e-9);
    }
}

#[test]
fn test_save_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nutrition.json");
    let foods = sample_foods();

    save_dataset(&path, &foods).unwrap();
    let loaded = load_dataset(&path).unwrap();
    save_dataset(&path, &loaded).unwrap();

    assert_eq!(load_dataset(&path).unwrap(), foods);
}

#[test]
fn test_bundled_dataset_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/nutrition.json");
    let store = DatasetStore::open(path).unwrap();

    assert!(!store.is_empty());
    assert!(store.contains("egg"));
}
