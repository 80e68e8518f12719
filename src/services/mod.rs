// ABOUTME: Service layer combining recipe extraction with nutrition resolution
// ABOUTME: Protocol-agnostic logic reused by the CLI and by library callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

//! Service layer
//!
//! Binaries stay thin: they read files and print results, while parsing of
//! parser-service payloads and the extractor/catalog pairing live here.

/// Recipe extraction, ingredient payload parsing, and nutrition computation
pub mod recipes;

pub use recipes::{parse_ingredient_lines, parse_ingredients, RecipeService};
