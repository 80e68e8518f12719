// ABOUTME: JSON-LD recipe extraction: locate the Recipe node and build a RecipeSchema
// ABOUTME: Combines the locator with nutrition, image, and main-entity normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

//! # Schema Extraction
//!
//! Recipe pages embed a schema.org `Recipe` node as JSON-LD, but the node shows
//! up in several shapes: as the document itself, as an element of a list, or
//! inside a `@graph` wrapper. Its `nutrition`, `image`, and `mainEntityOfPage`
//! fields vary just as much. This module finds the node and flattens those
//! fields into a [`RecipeSchema`].
//!
//! ```text
//! use logit_intelligence::schema::{ImageSelection, RecipeExtractor};
//!
//! let mut extractor = RecipeExtractor::seeded(42, ImageSelection::Random);
//! let recipe = extractor.extract_from_ld_json(script_text);
//! ```

/// Recipe node locator
pub mod locator;
/// Image and main-entity resolution
pub mod media;
/// Nutrition normalization
pub mod nutrition;

pub use locator::{find_recipe, is_recipe_type};
pub use media::{normalize_image, normalize_main_entity, ImageSelection};
pub use nutrition::{normalize_nutrition, parse_quantity};

use logit_core::constants::recipe_fields;
use logit_core::models::RecipeSchema;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Locate the recipe in `doc` and build its canonical record
///
/// Returns `None` when the document carries no recipe node.
#[must_use]
pub fn extract_recipe<R: Rng + ?Sized>(
    doc: &Value,
    selection: ImageSelection,
    rng: &mut R,
) -> Option<RecipeSchema> {
    find_recipe(doc).map(|node| build_recipe(node, selection, rng))
}

/// Extract the recipe from the text of one `application/ld+json` script block
///
/// Malformed JSON is logged and treated as a page without a recipe.
pub fn extract_recipe_from_ld_json<R: Rng + ?Sized>(
    text: &str,
    selection: ImageSelection,
    rng: &mut R,
) -> Option<RecipeSchema> {
    match serde_json::from_str::<Value>(text) {
        Ok(doc) => extract_recipe(&doc, selection, rng),
        Err(e) => {
            warn!(error = %e, "malformed JSON-LD block");
            None
        }
    }
}

/// Extract from several script blocks; the first block holding a recipe wins
pub fn extract_recipe_from_blocks<'a, I, R>(
    blocks: I,
    selection: ImageSelection,
    rng: &mut R,
) -> Option<RecipeSchema>
where
    I: IntoIterator<Item = &'a str>,
    R: Rng + ?Sized,
{
    blocks
        .into_iter()
        .find_map(|block| extract_recipe_from_ld_json(block, selection, rng))
}

/// Build a [`RecipeSchema`] from an already located recipe node
///
/// The node is read, never modified.
#[must_use]
pub fn build_recipe<R: Rng + ?Sized>(
    node: &Map<String, Value>,
    selection: ImageSelection,
    rng: &mut R,
) -> RecipeSchema {
    RecipeSchema {
        cook_time: text_field(node, recipe_fields::COOK_TIME),
        prep_time: text_field(node, recipe_fields::PREP_TIME),
        total_time: text_field(node, recipe_fields::TOTAL_TIME),
        name: text_field(node, recipe_fields::NAME),
        description: text_field(node, recipe_fields::DESCRIPTION),
        main_entity: present_field(node, recipe_fields::MAIN_ENTITY_OF_PAGE)
            .map(normalize_main_entity),
        image: present_field(node, recipe_fields::IMAGE)
            .map(|image| normalize_image(image, selection, rng)),
        nutrition: present_field(node, recipe_fields::NUTRITION).map(normalize_nutrition),
        ingredients: present_field(node, recipe_fields::RECIPE_INGREDIENT).cloned(),
    }
}

fn present_field<'a>(node: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    node.get(key).filter(|value| !value.is_null())
}

fn text_field(node: &Map<String, Value>, key: &str) -> Option<String> {
    let value = present_field(node, key)?;
    if let Some(text) = value.as_str() {
        return Some(text.to_owned());
    }
    debug!(field = key, "recipe text field is not a string");
    None
}

/// Stateful extractor owning the image-selection RNG
///
/// The RNG is the only source of non-determinism in extraction; seed it to make
/// image choice reproducible.
#[derive(Debug, Clone)]
pub struct RecipeExtractor<R = StdRng> {
    rng: R,
    selection: ImageSelection,
}

impl RecipeExtractor<StdRng> {
    /// Extractor seeded from OS entropy
    #[must_use]
    pub fn from_entropy(selection: ImageSelection) -> Self {
        Self::new(StdRng::from_entropy(), selection)
    }

    /// Extractor with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64, selection: ImageSelection) -> Self {
        Self::new(StdRng::seed_from_u64(seed), selection)
    }
}

impl<R: Rng> RecipeExtractor<R> {
    /// Create an extractor around an explicit RNG
    pub const fn new(rng: R, selection: ImageSelection) -> Self {
        Self { rng, selection }
    }

    /// Image selection policy in use
    #[must_use]
    pub const fn selection(&self) -> ImageSelection {
        self.selection
    }

    /// Extract the recipe from a decoded JSON-LD document
    pub fn extract(&mut self, doc: &Value) -> Option<RecipeSchema> {
        extract_recipe(doc, self.selection, &mut self.rng)
    }

    /// See [`extract_recipe_from_ld_json`]
    pub fn extract_from_ld_json(&mut self, text: &str) -> Option<RecipeSchema> {
        extract_recipe_from_ld_json(text, self.selection, &mut self.rng)
    }

    /// See [`extract_recipe_from_blocks`]
    pub fn extract_from_blocks<'a, I>(&mut self, blocks: I) -> Option<RecipeSchema>
    where
        I: IntoIterator<Item = &'a str>,
    {
        extract_recipe_from_blocks(blocks, self.selection, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn extractor() -> RecipeExtractor<ChaCha8Rng> {
        RecipeExtractor::new(ChaCha8Rng::seed_from_u64(1), ImageSelection::First)
    }

    #[test]
    fn test_build_recipe_flattens_fields() {
        let doc = json!({
            "@context": "https://schema.org",
            "@type": "Recipe",
            "name": "Banana Bread",
            "description": "Moist and simple",
            "cookTime": "PT1H",
            "prepTime": "PT15M",
            "totalTime": "PT1H15M",
            "mainEntityOfPage": {"@type": "WebPage", "@id": "https://x/banana-bread"},
            "image": {"@type": "ImageObject", "url": "https://x/bread.jpg"},
            "nutrition": {"@type": "NutritionInformation", "calories": "240 calories"},
            "recipeIngredient": ["3 bananas", "1 cup sugar"]
        });

        let recipe = extractor().extract(&doc).unwrap();
        assert_eq!(recipe.name.as_deref(), Some("Banana Bread"));
        assert_eq!(recipe.total_time.as_deref(), Some("PT1H15M"));
        assert_eq!(recipe.main_entity, Some(json!("https://x/banana-bread")));
        assert_eq!(recipe.image, Some(json!("https://x/bread.jpg")));
        let calories = recipe.nutrition.as_ref().unwrap().entry("calories").unwrap();
        assert!((calories.quantity - 240.0).abs() < f64::EPSILON);
        assert_eq!(recipe.ingredients, Some(json!(["3 bananas", "1 cup sugar"])));
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let doc = json!({"@type": "Recipe", "name": 42, "image": null});
        let recipe = extractor().extract(&doc).unwrap();
        assert!(recipe.name.is_none());
        assert!(recipe.image.is_none());
        assert!(recipe.nutrition.is_none());
        assert!(recipe.ingredients.is_none());
    }

    #[test]
    fn test_malformed_json_is_not_found() {
        assert!(extractor().extract_from_ld_json("{\"@type\": \"Recipe\"").is_none());
        assert!(extractor().extract_from_ld_json("").is_none());
    }

    #[test]
    fn test_first_block_with_recipe_wins() {
        let blocks = [
            "not json",
            r#"{"@type": "Organization"}"#,
            r#"{"@type": "Recipe", "name": "first"}"#,
            r#"{"@type": "Recipe", "name": "second"}"#,
        ];
        let recipe = extractor().extract_from_blocks(blocks).unwrap();
        assert_eq!(recipe.name.as_deref(), Some("first"));
    }
}
