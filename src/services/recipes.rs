// ABOUTME: Recipe service pairing the JSON-LD extractor with a food catalog
// ABOUTME: Parses ingredient parser payloads and computes recipe nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use crate::builder::{compute_nutrition, compute_nutrition_for_lines, RecipeNutrition};
use crate::errors::{AppError, AppResult};
use crate::external::FoodCatalog;
use crate::models::{Ingredient, RecipeSchema};
use crate::schema::RecipeExtractor;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// Ingredient list as produced by the ingredient parser service
///
/// The service wraps its result as `{"data": [...]}`; a bare array is accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientPayload {
    List(Vec<Ingredient>),
    Envelope { data: Vec<Ingredient> },
}

/// Parse a parser-service payload into ingredients
///
/// # Errors
///
/// Returns an invalid-input error when the text is neither an ingredient array
/// nor a `{"data": [...]}` envelope
pub fn parse_ingredients(text: &str) -> AppResult<Vec<Ingredient>> {
    let payload: IngredientPayload = serde_json::from_str(text).map_err(|e| {
        AppError::invalid_input("expected an ingredient array or a {\"data\": [...]} envelope")
            .with_source(e)
    })?;

    let ingredients = match payload {
        IngredientPayload::List(items) | IngredientPayload::Envelope { data: items } => items,
    };
    debug!(count = ingredients.len(), "parsed ingredient payload");
    Ok(ingredients)
}

/// Parse the raw ingredient lines the parser was given
///
/// Accepts a JSON array, or plain text with one line per ingredient (blank
/// lines skipped). Array positions are kept: non-string entries are read the
/// same way as [`RecipeSchema::ingredient_lines`] reads them.
#[must_use]
pub fn parse_ingredient_lines(text: &str) -> Vec<String> {
    if let Ok(items @ Value::Array(_)) = serde_json::from_str::<Value>(text) {
        return RecipeSchema {
            ingredients: Some(items),
            ..RecipeSchema::default()
        }
        .ingredient_lines();
    }
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Extraction and nutrition over one food catalog
#[derive(Debug)]
pub struct RecipeService<R = StdRng> {
    extractor: RecipeExtractor<R>,
    catalog: FoodCatalog,
}

impl<R: Rng> RecipeService<R> {
    /// Create a service from an extractor and a loaded catalog
    pub const fn new(extractor: RecipeExtractor<R>, catalog: FoodCatalog) -> Self {
        Self { extractor, catalog }
    }

    /// Catalog used for ingredient resolution
    #[must_use]
    pub const fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Extract the recipe from a decoded JSON-LD document
    pub fn extract(&mut self, doc: &Value) -> Option<RecipeSchema> {
        self.extractor.extract(doc)
    }

    /// Extract the recipe from one JSON-LD script block
    pub fn extract_from_ld_json(&mut self, text: &str) -> Option<RecipeSchema> {
        self.extractor.extract_from_ld_json(text)
    }

    /// Compute totals for parsed ingredients
    #[must_use]
    pub fn nutrition(&self, ingredients: &[Ingredient]) -> RecipeNutrition {
        let result = compute_nutrition(ingredients, &self.catalog, &self.catalog);
        log_summary(ingredients.len(), &result);
        result
    }

    /// Compute totals where `ingredients[i]` was parsed from `lines[i]`
    #[must_use]
    pub fn nutrition_for_lines(
        &self,
        lines: &[String],
        ingredients: &[Ingredient],
    ) -> RecipeNutrition {
        let result = compute_nutrition_for_lines(lines, ingredients, &self.catalog, &self.catalog);
        log_summary(ingredients.len(), &result);
        result
    }

    /// Compute totals for ingredients parsed from `recipe`'s ingredient lines
    #[must_use]
    pub fn nutrition_for_recipe(
        &self,
        recipe: &RecipeSchema,
        ingredients: &[Ingredient],
    ) -> RecipeNutrition {
        self.nutrition_for_lines(&recipe.ingredient_lines(), ingredients)
    }
}

fn log_summary(total: usize, result: &RecipeNutrition) {
    info!(
        ingredients = total,
        unresolved = result.errors.len(),
        calories = result.nutrition.calories,
        "Recipe nutrition computed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ImageSelection;

    #[test]
    fn test_parse_ingredients_accepts_both_shapes() {
        let bare = r#"[{"name": "flour", "amounts": [{"unit": "cup", "value": 2}]}]"#;
        let envelope = r#"{"data": [{"name": "flour", "amounts": [{"unit": "cup", "value": 2}]}]}"#;

        let from_bare = parse_ingredients(bare).unwrap();
        let from_envelope = parse_ingredients(envelope).unwrap();
        assert_eq!(from_bare, from_envelope);
        assert_eq!(from_bare[0], Ingredient::new("flour", 2.0, "cup"));
    }

    #[test]
    fn test_parse_ingredients_rejects_other_json() {
        let error = parse_ingredients(r#"{"items": []}"#).unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::InvalidInput);
        assert!(parse_ingredients("flour").is_err());
    }

    #[test]
    fn test_parse_ingredient_lines() {
        assert_eq!(
            parse_ingredient_lines(r#"["2 cups flour", "1 egg"]"#),
            vec!["2 cups flour", "1 egg"]
        );
        assert_eq!(
            parse_ingredient_lines(r#"["2 cups flour", 7, "1 egg"]"#),
            vec!["2 cups flour", "7", "1 egg"]
        );
        assert_eq!(
            parse_ingredient_lines("2 cups flour\n\n  1 egg \n"),
            vec!["2 cups flour", "1 egg"]
        );
    }

    #[test]
    fn test_empty_catalog_reports_every_ingredient() {
        let service = RecipeService::new(
            RecipeExtractor::seeded(1, ImageSelection::First),
            FoodCatalog::default(),
        );
        let result = service.nutrition(&[Ingredient::new("flour", 1.0, "cup")]);
        assert_eq!(result.errors, vec!["flour"]);
        assert!(result.nutrition.is_empty());
    }
}
