// ABOUTME: Nutrition models for recipe nutrient computation
// ABOUTME: Nutrition aggregate, NutrientEntry, and the Food and Portion database records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::nutrient_keys;
use crate::units::{display_name_for, unit_for};

/// One recognized nutrient value parsed out of recipe markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientEntry {
    /// Leading numeric value of the raw text (never negative)
    #[serde(rename = "qty")]
    pub quantity: f64,
    /// Display unit from the unit catalog
    pub unit: String,
    /// Display name from the unit catalog
    #[serde(rename = "name")]
    pub display_name: String,
}

impl NutrientEntry {
    /// Build an entry for `key`, taking unit and display name from the catalog
    #[must_use]
    pub fn for_key(key: &str, quantity: f64) -> Self {
        Self {
            quantity,
            unit: unit_for(key).to_owned(),
            display_name: display_name_for(key),
        }
    }
}

/// Aggregate nutrient totals for a recipe
///
/// Starts at zero and only ever grows while a computation runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy (kcal)
    pub calories: f64,
    /// Total fat (g)
    #[serde(rename = "fatContent")]
    pub fat: f64,
    /// Trans fat (g)
    #[serde(rename = "transFatContent")]
    pub trans_fat: f64,
    /// Saturated fat (g)
    #[serde(rename = "saturatedFatContent")]
    pub saturated_fat: f64,
    /// Cholesterol (mg)
    #[serde(rename = "cholesterolContent")]
    pub cholesterol: f64,
    /// Sodium (mg)
    #[serde(rename = "sodiumContent")]
    pub sodium: f64,
    /// Carbohydrates (g)
    #[serde(rename = "carbohydrateContent")]
    pub carbohydrates: f64,
    /// Dietary fiber (g)
    #[serde(rename = "fiberContent")]
    pub fiber: f64,
    /// Sugars (g)
    #[serde(rename = "sugarContent")]
    pub sugar: f64,
    /// Protein (g)
    #[serde(rename = "proteinContent")]
    pub protein: f64,
}

impl Nutrition {
    /// Add `food`'s per-100g profile scaled by `multiplier` into the totals
    pub fn add_scaled(&mut self, food: &Food, multiplier: f64) {
        let scaled = |value: f32| f64::from(value) * multiplier;

        self.calories += scaled(food.calories);
        self.fat += scaled(food.total_fat);
        self.trans_fat += scaled(food.trans_fat);
        self.saturated_fat += scaled(food.saturated_fat);
        self.cholesterol += scaled(food.cholesterol);
        self.sodium += scaled(food.sodium);
        self.carbohydrates += scaled(food.total_carbs);
        self.fiber += scaled(food.dietary_fiber);
        self.sugar += scaled(food.sugars);
        self.protein += scaled(food.protein);
    }

    /// Field values paired with their schema.org nutrient keys
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, f64); 10] {
        [
            (nutrient_keys::CALORIES, self.calories),
            (nutrient_keys::FAT, self.fat),
            (nutrient_keys::TRANS_FAT, self.trans_fat),
            (nutrient_keys::SATURATED_FAT, self.saturated_fat),
            (nutrient_keys::CHOLESTEROL, self.cholesterol),
            (nutrient_keys::SODIUM, self.sodium),
            (nutrient_keys::CARBOHYDRATE, self.carbohydrates),
            (nutrient_keys::FIBER, self.fiber),
            (nutrient_keys::SUGAR, self.sugar),
            (nutrient_keys::PROTEIN, self.protein),
        ]
    }

    /// Render the totals the same way normalized recipe markup is rendered
    #[must_use]
    pub fn to_nutrient_entries(&self) -> BTreeMap<String, NutrientEntry> {
        self.fields()
            .into_iter()
            .map(|(key, value)| (key.to_owned(), NutrientEntry::for_key(key, value)))
            .collect()
    }

    /// True when nothing has been accumulated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| *value == 0.0)
    }
}

/// Food record from the food database
///
/// Every nutrient field is expressed per 100 g of the food.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// `FoodData` Central ID
    pub fdc_id: u64,
    /// Food description used for name lookups
    pub description: String,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f32,
    /// Total fat (g)
    #[serde(default)]
    pub total_fat: f32,
    /// Trans fat (g)
    #[serde(default)]
    pub trans_fat: f32,
    /// Saturated fat (g)
    #[serde(default)]
    pub saturated_fat: f32,
    /// Cholesterol (mg)
    #[serde(default)]
    pub cholesterol: f32,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium: f32,
    /// Total carbohydrates (g)
    #[serde(default)]
    pub total_carbs: f32,
    /// Dietary fiber (g)
    #[serde(default)]
    pub dietary_fiber: f32,
    /// Sugars (g)
    #[serde(default)]
    pub sugars: f32,
    /// Protein (g)
    #[serde(default)]
    pub protein: f32,
}

/// Named serving unit for a food with its mass in grams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    /// Portion ID
    #[serde(default)]
    pub pid: u64,
    /// Food this portion belongs to
    pub fdc_id: u64,
    /// Serving size in this portion's own unit
    pub amount: f32,
    /// Full unit name ("cup", "tablespoon")
    pub unit_name: String,
    /// Abbreviated unit name ("c", "tbsp")
    #[serde(default)]
    pub abbr_unit_name: String,
    /// Mass in grams represented by `amount` of this unit
    pub gram_weight: f32,
}

impl Portion {
    /// Whether `unit` names this portion, by full or abbreviated name
    #[must_use]
    pub fn is_same_unit(&self, unit: &str) -> bool {
        self.unit_name == unit || self.abbr_unit_name == unit
    }

    /// A portion whose amount cannot be divided by
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.amount.is_finite() || self.amount <= 0.0
    }

    /// Whether the gram weight can scale a profile without going negative
    #[must_use]
    pub fn has_usable_weight(&self) -> bool {
        self.gram_weight.is_finite() && self.gram_weight >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oats() -> Food {
        Food {
            fdc_id: 1,
            description: "Oats".into(),
            calories: 389.0,
            protein: 16.9,
            total_carbs: 66.3,
            ..Food::default()
        }
    }

    #[test]
    fn test_add_scaled_accumulates() {
        let mut total = Nutrition::default();
        total.add_scaled(&oats(), 0.5);
        total.add_scaled(&oats(), 0.5);

        assert!((total.calories - 389.0).abs() < 1e-3);
        assert!((total.protein - 16.9).abs() < 1e-3);
        assert!(total.fat.abs() < f64::EPSILON);
        assert!(!total.is_empty());
    }

    #[test]
    fn test_nutrition_wire_names() {
        let json = serde_json::to_value(Nutrition::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 10);
        assert!(object.contains_key("calories"));
        assert!(object.contains_key("carbohydrateContent"));
        assert!(object.contains_key("transFatContent"));
    }

    #[test]
    fn test_to_nutrient_entries_uses_catalog() {
        let mut total = Nutrition::default();
        total.add_scaled(&oats(), 1.0);
        let entries = total.to_nutrient_entries();

        let calories = &entries["calories"];
        assert_eq!(calories.unit, "cals");
        assert_eq!(calories.display_name, "Calories");
        assert_eq!(entries["sodiumContent"].unit, "mg");
        assert_eq!(entries["proteinContent"].unit, "g");
    }

    #[test]
    fn test_portion_unit_matching_is_exact() {
        let cup = Portion {
            fdc_id: 1,
            amount: 1.0,
            unit_name: "cup".into(),
            abbr_unit_name: "c".into(),
            gram_weight: 120.0,
            ..Portion::default()
        };
        assert!(cup.is_same_unit("cup"));
        assert!(cup.is_same_unit("c"));
        assert!(!cup.is_same_unit("Cup"));
        assert!(!cup.is_same_unit("cups"));
        assert!(!cup.is_degenerate());
    }
}
