// ABOUTME: Core data models for recipe extraction and nutrition computation
// ABOUTME: Re-exports recipe, nutrition, food, portion, and ingredient types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

/// Parsed ingredient models
pub mod ingredient;
/// Nutrition aggregate, nutrient entries, and food database records
pub mod nutrition;
/// Canonical recipe schema
pub mod recipe;

pub use ingredient::{Amount, Ingredient};
pub use nutrition::{Food, NutrientEntry, Nutrition, Portion};
pub use recipe::{NutritionFacts, NutritionValue, RecipeSchema};
