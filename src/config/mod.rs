// ABOUTME: Configuration module for Logit runtime settings
// ABOUTME: Environment-only configuration; no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

/// Environment variable parsing and typed settings
pub mod environment;

pub use environment::{Environment, LogitConfig};
