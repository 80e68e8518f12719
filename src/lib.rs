// ABOUTME: Main library entry point for the Logit recipe nutrition engine
// ABOUTME: Wires configuration, logging, the food catalog, and the recipe service together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

#![deny(unsafe_code)]

//! # Logit
//!
//! Recipe pages describe themselves with schema.org JSON-LD, and recipe
//! ingredients can be priced in nutrients once they are matched to a food
//! database. Logit does both:
//!
//! - **Extraction**: find the `Recipe` node in a JSON-LD document and flatten
//!   its nutrition, image, and main-entity fields into a [`models::RecipeSchema`].
//! - **Nutrition**: resolve parsed ingredients against a [`external::FoodCatalog`]
//!   and sum their scaled per-100g profiles into a [`models::Nutrition`] total.
//!
//! ## Architecture
//!
//! - **logit-core**: errors, constants, unit catalog, and data models
//! - **logit-intelligence**: the extraction and nutrition engines (no I/O)
//! - **this crate**: environment configuration, logging, the JSON food catalog,
//!   the [`services::RecipeService`] facade, and the `logit-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use logit::config::LogitConfig;
//! use logit::errors::AppResult;
//! use logit::external::FoodCatalog;
//! use logit::services::RecipeService;
//!
//! fn main() -> AppResult<()> {
//!     let config = LogitConfig::from_env()?;
//!     let catalog = FoodCatalog::from_path(config.catalog_path(None)?)?;
//!     let mut service = RecipeService::new(config.extractor(), catalog);
//!
//!     let recipe = service.extract_from_ld_json(r#"{"@type": "Recipe", "name": "Toast"}"#);
//!     println!("{recipe:?}");
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// JSON-file food catalog backing ingredient resolution
pub mod external;

/// Production logging and structured output
pub mod logging;

/// Recipe extraction and nutrition facade
pub mod services;

pub use logit_core::{constants, errors, models, units};
pub use logit_intelligence::{builder, schema};
