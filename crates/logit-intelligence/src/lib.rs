// ABOUTME: Recipe intelligence engines for schema extraction and nutrition resolution
// ABOUTME: Pure, synchronous algorithms with no I/O; collaborators are injected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

#![deny(unsafe_code)]

//! # Logit Intelligence
//!
//! The two decision-making engines of Logit:
//!
//! - **schema**: locate a schema.org `Recipe` node inside arbitrarily shaped
//!   JSON-LD and flatten its nutrition, image, and main-entity fields.
//! - **builder**: match parsed ingredients to food portions and accumulate a
//!   recipe's nutrient totals, reporting ingredients that could not be resolved.
//!
//! Nothing here performs I/O. Food and portion lookups are passed in through the
//! [`builder::FoodSource`] and [`builder::PortionSource`] traits, and the only
//! randomness (image selection) comes from a caller-supplied [`rand::Rng`].

/// Ingredient-to-nutrition resolution
pub mod builder;
/// JSON-LD recipe extraction and normalization
pub mod schema;

pub use builder::{
    compute_nutrition, compute_nutrition_for_lines, find_common_unit, resolve_ingredient,
    scale_and_add, FoodSource, PortionSource, RecipeNutrition, ResolutionError,
};
pub use schema::{
    extract_recipe, extract_recipe_from_blocks, extract_recipe_from_ld_json, find_recipe,
    normalize_image, normalize_main_entity, normalize_nutrition, ImageSelection,
    RecipeExtractor,
};
