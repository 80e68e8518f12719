// ABOUTME: Core types and constants for the Logit recipe nutrition engine
// ABOUTME: Foundation crate with error handling, JSON-LD constants, unit catalog, and models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

#![deny(unsafe_code)]

//! # Logit Core
//!
//! Foundation crate providing shared types and constants for the Logit recipe
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: JSON-LD keys and nutrient keys shared by the engines
//! - **units**: Static unit and display-name lookup for nutrient keys
//! - **models**: Recipe schema, nutrition, food, portion, and ingredient types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Nutrient unit catalog (display unit and display name per nutrient key)
pub mod units;

/// Core data models (`RecipeSchema`, `Nutrition`, `Food`, `Portion`, `Ingredient`)
pub mod models;
