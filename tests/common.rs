// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, food/portion builders, and sample documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `logit`

use logit::external::FoodCatalog;
use logit::models::{Food, Portion};
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Food with the given per-100g calories, protein, and fat
pub fn food(fdc_id: u64, description: &str, calories: f32, protein: f32, fat: f32) -> Food {
    Food {
        fdc_id,
        description: description.to_owned(),
        calories,
        protein,
        total_fat: fat,
        ..Food::default()
    }
}

/// Portion of `amount` `unit_name` weighing `gram_weight` grams
pub fn portion(
    pid: u64,
    fdc_id: u64,
    amount: f32,
    unit_name: &str,
    abbr_unit_name: &str,
    gram_weight: f32,
) -> Portion {
    Portion {
        pid,
        fdc_id,
        amount,
        unit_name: unit_name.to_owned(),
        abbr_unit_name: abbr_unit_name.to_owned(),
        gram_weight,
    }
}

/// Small pantry catalog
///
/// - flour: 364 kcal / 100 g, 1 cup = 125 g
/// - sugar: 387 kcal / 100 g, 1 tbsp = 12.5 g, 1 cup = 200 g
/// - butter: 717 kcal / 100 g, 1 tbsp = 14.2 g
/// - egg: 143 kcal / 100 g, 1 large = 50 g
/// - vanilla: 288 kcal / 100 g, only a zero-amount "tsp" portion
pub fn pantry_catalog() -> FoodCatalog {
    FoodCatalog::new(
        vec![
            food(1001, "Wheat flour, white, all-purpose", 364.0, 10.3, 1.0),
            food(1002, "Sugar, granulated", 387.0, 0.0, 0.0),
            food(1003, "Butter, salted", 717.0, 0.9, 81.1),
            food(1004, "Egg, whole, raw", 143.0, 12.6, 9.5),
            food(1005, "Vanilla extract", 288.0, 0.1, 0.1),
        ],
        vec![
            portion(1, 1001, 1.0, "cup", "c", 125.0),
            portion(2, 1002, 1.0, "tablespoon", "tbsp", 12.5),
            portion(3, 1002, 1.0, "cup", "c", 200.0),
            portion(4, 1003, 1.0, "tablespoon", "tbsp", 14.2),
            portion(5, 1004, 1.0, "large", "large", 50.0),
            portion(6, 1005, 0.0, "teaspoon", "tsp", 4.2),
        ],
    )
}

/// JSON text of [`pantry_catalog`]
pub fn pantry_catalog_json() -> String {
    serde_json::to_string(&pantry_catalog()).unwrap()
}

/// Typical recipe page markup with the recipe inside `@graph`
pub fn graph_recipe_document() -> Value {
    json!({
        "@context": "https://schema.org",
        "@graph": [
            {"@type": "WebSite", "@id": "https://bakes.example/#website"},
            {"@type": ["WebPage", "ItemPage"], "@id": "https://bakes.example/sugar-cookies"},
            {
                "@type": "Recipe",
                "name": "Sugar Cookies",
                "description": "Soft, chewy cookies",
                "prepTime": "PT20M",
                "cookTime": "PT10M",
                "totalTime": "PT30M",
                "mainEntityOfPage": {"@type": "WebPage", "@id": "https://bakes.example/sugar-cookies"},
                "image": [
                    {"@type": "ImageObject", "url": "https://bakes.example/cookies-1x1.jpg"},
                    {"@type": "ImageObject", "url": "https://bakes.example/cookies-4x3.jpg"},
                    "https://bakes.example/cookies-16x9.jpg"
                ],
                "nutrition": {
                    "@type": "NutritionInformation",
                    "calories": "120 calories",
                    "fatContent": "6 g",
                    "saturatedFatContent": "3.5 g",
                    "sodiumContent": "85 mg",
                    "servingSize": "1 cookie",
                    "proteinContent": null
                },
                "recipeIngredient": [
                    "2 cups all-purpose flour",
                    "1 cup sugar",
                    "2 tbsp butter",
                    "1 large egg"
                ]
            }
        ]
    })
}
