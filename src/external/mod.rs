// ABOUTME: External data sources backing ingredient resolution
// ABOUTME: Provides the JSON-file food catalog with foods and serving portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

//! External Data Sources
//!
//! The nutrition engine only sees the `FoodSource` / `PortionSource` traits;
//! this module provides the catalog that implements them.

pub mod food_catalog;

pub use food_catalog::FoodCatalog;
