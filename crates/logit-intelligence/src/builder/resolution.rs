// ABOUTME: Resolves a parsed ingredient list into recipe nutrient totals
// ABOUTME: Injected food and portion lookups keep the loop free of database access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use logit_core::models::{Food, Ingredient, Nutrition, Portion};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::accumulator::scale_and_add;
use super::portion::find_portion;
use super::ResolutionError;

/// Food lookup by ingredient name
///
/// Implementations decide how loosely names match (the food database uses a
/// substring search). Returning `None` marks the ingredient unresolved.
pub trait FoodSource {
    /// Best food record for `name`, if any
    fn find_food(&self, name: &str) -> Option<Food>;
}

/// Serving portions available for a food
pub trait PortionSource {
    /// Portions of `fdc_id` in their stored order; empty when none are known
    fn portions_for(&self, fdc_id: u64) -> Vec<Portion>;
}

impl<F> FoodSource for F
where
    F: Fn(&str) -> Option<Food>,
{
    fn find_food(&self, name: &str) -> Option<Food> {
        self(name)
    }
}

impl<F> PortionSource for F
where
    F: Fn(u64) -> Vec<Portion>,
{
    fn portions_for(&self, fdc_id: u64) -> Vec<Portion> {
        self(fdc_id)
    }
}

/// Nutrient totals for a recipe plus the ingredients that could not be resolved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutrition {
    /// Accumulated totals
    pub nutrition: Nutrition,
    /// Unresolved ingredients, in input order
    pub errors: Vec<String>,
}

impl RecipeNutrition {
    /// Whether every ingredient contributed to the totals
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Resolve one ingredient and add its contribution into `total`
///
/// Uses the first amount only. `total` is unchanged when an error is returned.
///
/// # Errors
///
/// Returns the [`ResolutionError`] describing which step failed.
pub fn resolve_ingredient<F, P>(
    total: &mut Nutrition,
    ingredient: &Ingredient,
    foods: &F,
    portions: &P,
) -> Result<(), ResolutionError>
where
    F: FoodSource + ?Sized,
    P: PortionSource + ?Sized,
{
    let amount = ingredient
        .primary_amount()
        .ok_or(ResolutionError::Unparseable)?;

    let food = foods
        .find_food(&ingredient.name)
        .ok_or_else(|| ResolutionError::FoodNotFound {
            name: ingredient.name.clone(),
        })?;

    let available = portions.portions_for(food.fdc_id);
    let portion =
        find_portion(&available, &amount.unit).ok_or_else(|| ResolutionError::NoMatchingPortion {
            fdc_id: food.fdc_id,
            unit: amount.unit.clone(),
        })?;

    let multiplier = scale_and_add(total, &food, portion, amount.value)?;
    debug!(
        ingredient = %ingredient.name,
        food.id = food.fdc_id,
        portion.unit = %portion.unit_name,
        multiplier,
        "ingredient resolved"
    );
    Ok(())
}

/// Compute recipe totals for a list of parsed ingredients
///
/// Unresolved ingredients are reported by name in input order.
pub fn compute_nutrition<F, P>(ingredients: &[Ingredient], foods: &F, portions: &P) -> RecipeNutrition
where
    F: FoodSource + ?Sized,
    P: PortionSource + ?Sized,
{
    accumulate(
        ingredients
            .iter()
            .map(|ingredient| (ingredient.name.as_str(), ingredient)),
        foods,
        portions,
    )
}

/// Compute recipe totals where `ingredients[i]` was parsed from `lines[i]`
///
/// An unparseable ingredient is reported by its source line, since the parser
/// gave it no usable name. Other failures are reported by ingredient name.
/// Ingredients without a corresponding line fall back to their name.
pub fn compute_nutrition_for_lines<F, P>(
    lines: &[String],
    ingredients: &[Ingredient],
    foods: &F,
    portions: &P,
) -> RecipeNutrition
where
    F: FoodSource + ?Sized,
    P: PortionSource + ?Sized,
{
    accumulate(
        ingredients.iter().enumerate().map(|(index, ingredient)| {
            let label = lines
                .get(index)
                .map_or(ingredient.name.as_str(), String::as_str);
            (label, ingredient)
        }),
        foods,
        portions,
    )
}

fn accumulate<'a, I, F, P>(entries: I, foods: &F, portions: &P) -> RecipeNutrition
where
    I: Iterator<Item = (&'a str, &'a Ingredient)>,
    F: FoodSource + ?Sized,
    P: PortionSource + ?Sized,
{
    let mut result = RecipeNutrition::default();

    for (source_line, ingredient) in entries {
        if let Err(e) = resolve_ingredient(&mut result.nutrition, ingredient, foods, portions) {
            let label = match e {
                ResolutionError::Unparseable => source_line,
                _ => ingredient.name.as_str(),
            };
            debug!(ingredient = %label, reason = %e, "ingredient unresolved");
            result.errors.push(label.to_owned());
        }
    }

    debug!(
        unresolved = result.errors.len(),
        calories = result.nutrition.calories,
        "recipe nutrition computed"
    );
    result
}
