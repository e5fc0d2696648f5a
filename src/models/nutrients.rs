use std::fmt;
use std::ops::AddAssign;

use serde::{de, Deserialize, Deserializer, Serialize};

/// The five tracked nutrients, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    TotalFat,
    Protein,
    Carbohydrate,
    Sugars,
}

impl Nutrient {
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Calories,
        Nutrient::TotalFat,
        Nutrient::Protein,
        Nutrient::Carbohydrate,
        Nutrient::Sugars,
    ];

    /// Field name used in the dataset file.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::TotalFat => "total_fat",
            Nutrient::Protein => "protein",
            Nutrient::Carbohydrate => "carbohydrate",
            Nutrient::Sugars => "sugars",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::TotalFat => "Total Fat",
            Nutrient::Protein => "Protein",
            Nutrient::Carbohydrate => "Carbohydrate",
            Nutrient::Sugars => "Sugars",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }

    /// Wording used when asking for the value of a new food.
    pub fn prompt_name(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            Nutrient::TotalFat => "g of total fat",
            Nutrient::Protein => "g of protein",
            Nutrient::Carbohydrate => "g of carbohydrates",
            Nutrient::Sugars => "g of sugar",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nutritional values of a food per 100 grams.
///
/// Values may be stored as numbers or numeric strings; they are always
/// written back as numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientRecord {
    #[serde(deserialize_with = "lenient_f64")]
    pub calories: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub total_fat: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub protein: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub carbohydrate: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub sugars: f64,
}

impl NutrientRecord {
    pub fn new(
        calories: f64,
        total_fat: f64,
        protein: f64,
        carbohydrate: f64,
        sugars: f64,
    ) -> Self {
        Self {
            calories,
            total_fat,
            protein,
            carbohydrate,
            sugars,
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::TotalFat => self.total_fat,
            Nutrient::Protein => self.protein,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Sugars => self.sugars,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        match nutrient {
            Nutrient::Calories => self.calories = value,
            Nutrient::TotalFat => self.total_fat = value,
            Nutrient::Protein => self.protein = value,
            Nutrient::Carbohydrate => self.carbohydrate = value,
            Nutrient::Sugars => self.sugars = value,
        }
    }

    /// `(nutrient, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(move |n| (n, self.get(n)))
    }

    /// Values for `grams` of this food.
    pub fn scaled(&self, grams: f64) -> Self {
        let mut out = Self::default();
        for (nutrient, value) in self.iter() {
            out.set(nutrient, value * grams / 100.0);
        }
        out
    }

    /// All values finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.iter().all(|(_, v)| v.is_finite() && v >= 0.0)
    }
}

impl AddAssign for NutrientRecord {
    fn add_assign(&mut self, rhs: Self) {
        for (nutrient, value) in rhs.iter() {
            self.set(nutrient, self.get(nutrient) + value);
        }
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(v) => Ok(v),
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, found {:?}", s))),
    }
}
