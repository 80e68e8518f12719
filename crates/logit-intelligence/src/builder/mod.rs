// ABOUTME: Recipe nutrition builder: portion matching, scaling, and the resolution loop
// ABOUTME: Defines the food/portion collaborator traits and per-ingredient failure classes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

//! # Recipe Nutrition Builder
//!
//! Turns a list of parsed ingredients into a single [`Nutrition`] total.
//!
//! For each ingredient the first amount is taken, the food is looked up by name,
//! and the amount's unit is matched against the food's serving portions. A
//! matching portion gives the gram weight used to scale the food's per-100g
//! profile. Ingredients that fail anywhere along the way are reported by name
//! rather than aborting the computation.
//!
//! [`Nutrition`]: logit_core::models::Nutrition

/// Gram-based scaling of food profiles
pub mod accumulator;
/// Unit-name matching against serving portions
pub mod portion;
/// Ingredient list resolution loop
pub mod resolution;

pub use accumulator::{scale_and_add, serving_multiplier};
pub use portion::{find_common_unit, find_portion};
pub use resolution::{
    compute_nutrition, compute_nutrition_for_lines, resolve_ingredient, FoodSource,
    PortionSource, RecipeNutrition,
};

use thiserror::Error;

/// Why an ingredient contributed nothing to the recipe total
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    /// The parser found no name or no amount
    #[error("ingredient has no name or no amount")]
    Unparseable,

    /// No food matches the ingredient name
    #[error("no food matches '{name}'")]
    FoodNotFound {
        /// Ingredient name used for the lookup
        name: String,
    },

    /// The food has no portion measured in the ingredient's unit
    #[error("food {fdc_id} has no portion measured in '{unit}'")]
    NoMatchingPortion {
        /// Food that was found
        fdc_id: u64,
        /// Unit text from the ingredient
        unit: String,
    },

    /// The matching portion has a zero, negative, or non-finite amount
    #[error("portion {pid} of food {fdc_id} has unusable amount {amount}")]
    DegeneratePortion {
        /// Food the portion belongs to
        fdc_id: u64,
        /// Portion ID
        pid: u64,
        /// Offending serving amount
        amount: f32,
    },

    /// The matching portion has a negative or non-finite gram weight
    #[error("portion {pid} of food {fdc_id} has unusable gram weight {gram_weight}")]
    UnusableGramWeight {
        /// Food the portion belongs to
        fdc_id: u64,
        /// Portion ID
        pid: u64,
        /// Offending gram weight
        gram_weight: f32,
    },

    /// The requested quantity is negative or not finite
    #[error("requested quantity {value} is not a usable amount")]
    InvalidQuantity {
        /// Quantity from the ingredient's first amount
        value: f32,
    },
}
