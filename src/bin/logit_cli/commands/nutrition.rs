// ABOUTME: Nutrition command for logit-cli
// ABOUTME: Resolves parsed ingredients against a food catalog and prints the totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use logit::config::LogitConfig;
use logit::errors::{AppError, AppResult};
use logit::external::FoodCatalog;
use logit::services::{parse_ingredient_lines, parse_ingredients, RecipeService};
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

/// Compute and print nutrition for the ingredients in `ingredients_file`
pub fn run(
    config: &LogitConfig,
    catalog_path: &Path,
    ingredients_file: &Path,
    lines_file: Option<&Path>,
    display: bool,
) -> Result<()> {
    let catalog = FoodCatalog::from_path(catalog_path)?;
    let service = RecipeService::new(config.extractor(), catalog);

    let ingredients = parse_ingredients(&read(ingredients_file)?)?;
    let result = match lines_file {
        Some(path) => {
            let lines = parse_ingredient_lines(&read(path)?);
            service.nutrition_for_lines(&lines, &ingredients)
        }
        None => service.nutrition(&ingredients),
    };

    if display {
        print_json(&json!({
            "nutrition": result.nutrition.to_nutrient_entries(),
            "errors": result.errors,
        }))
    } else {
        print_json(&result)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| AppError::storage(format!("cannot read {}", path.display())).with_source(e))
}
