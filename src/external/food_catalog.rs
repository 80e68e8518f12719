// ABOUTME: JSON-file food catalog holding per-100g food profiles and serving portions
// ABOUTME: Implements substring food search and per-food portion lookup for the builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

//! Food catalog
//!
//! A catalog file is a JSON object with two arrays using the food database
//! column names:
//!
//! ```json
//! {
//!   "foods":    [{"fdc_id": 1, "description": "Wheat flour", "calories": 364.0}],
//!   "portions": [{"pid": 10, "fdc_id": 1, "amount": 1.0, "unit_name": "cup",
//!                 "abbr_unit_name": "c", "gram_weight": 125.0}]
//! }
//! ```
//!
//! Food search is a case-insensitive substring match on the description and
//! returns the first hit in file order.

use crate::builder::{FoodSource, PortionSource};
use crate::errors::{AppError, AppResult};
use crate::models::{Food, Portion};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// In-memory food and portion tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodCatalog {
    /// Food profiles, in file order
    #[serde(default)]
    pub foods: Vec<Food>,
    /// Serving portions for all foods, in file order
    #[serde(default)]
    pub portions: Vec<Portion>,
}

impl FoodCatalog {
    /// Create a catalog from already loaded tables
    #[must_use]
    pub const fn new(foods: Vec<Food>, portions: Vec<Portion>) -> Self {
        Self { foods, portions }
    }

    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is not a valid catalog
    pub fn from_json_str(text: &str) -> AppResult<Self> {
        let catalog: Self = serde_json::from_str(text)?;
        let orphans = catalog
            .portions
            .iter()
            .filter(|portion| !catalog.foods.iter().any(|food| food.fdc_id == portion.fdc_id))
            .count();
        if orphans > 0 {
            debug!(orphans, "catalog portions reference unknown foods");
        }
        Ok(catalog)
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or a serialization
    /// error if it does not hold a valid catalog
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("cannot read food catalog {}", path.display()))
                .with_source(e)
        })?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            foods = catalog.foods.len(),
            portions = catalog.portions.len(),
            "Food catalog loaded"
        );
        Ok(catalog)
    }

    /// First food whose description contains `query`, ignoring case
    #[must_use]
    pub fn search(&self, query: &str) -> Option<&Food> {
        if query.trim().is_empty() {
            return None;
        }
        let query_lower = query.to_lowercase();
        self.foods
            .iter()
            .find(|food| food.description.to_lowercase().contains(&query_lower))
    }

    /// Food with the given ID
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no food has that ID
    pub fn food(&self, fdc_id: u64) -> AppResult<&Food> {
        self.foods
            .iter()
            .find(|food| food.fdc_id == fdc_id)
            .ok_or_else(|| AppError::not_found(format!("Food with FDC ID {fdc_id}")))
    }

    /// Portions of the given food, in file order
    pub fn portions_of(&self, fdc_id: u64) -> impl Iterator<Item = &Portion> {
        self.portions
            .iter()
            .filter(move |portion| portion.fdc_id == fdc_id)
    }

    /// Number of foods in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl FoodSource for FoodCatalog {
    fn find_food(&self, name: &str) -> Option<Food> {
        self.search(name).cloned()
    }
}

impl PortionSource for FoodCatalog {
    fn portions_for(&self, fdc_id: u64) -> Vec<Portion> {
        self.portions_of(fdc_id).cloned().collect()
    }
}
