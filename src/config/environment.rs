// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses food catalog location, image selection policy, and seed from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

//! Environment-based configuration

use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use crate::schema::{ImageSelection, RecipeExtractor};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for extraction and nutrition resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogitConfig {
    /// Food catalog JSON file, if configured
    pub food_catalog_path: Option<PathBuf>,
    /// How a single image is chosen from an image list
    pub image_selection: ImageSelection,
    /// Fixed seed for image selection; entropy when unset
    pub image_seed: Option<u64>,
    /// Deployment environment
    pub environment: Environment,
}

impl LogitConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when `IMAGE_SEED` is not an unsigned integer
    pub fn from_env() -> AppResult<Self> {
        let food_catalog_path = non_empty_var(env_config::FOOD_CATALOG_PATH).map(PathBuf::from);

        let image_selection = non_empty_var(env_config::IMAGE_SELECTION)
            .map(|value| ImageSelection::from_str_or_default(&value))
            .unwrap_or_default();

        let image_seed = non_empty_var(env_config::IMAGE_SEED)
            .map(|value| {
                value.trim().parse::<u64>().map_err(|e| {
                    AppError::config_invalid(format!(
                        "{} must be an unsigned integer, got '{value}'",
                        env_config::IMAGE_SEED
                    ))
                    .with_source(e)
                })
            })
            .transpose()?;

        let environment = non_empty_var(env_config::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            food_catalog_path,
            image_selection,
            image_seed,
            environment,
        };
        info!(
            environment = %config.environment,
            image.selection = %config.image_selection,
            image.seeded = config.image_seed.is_some(),
            catalog.configured = config.food_catalog_path.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Override the image selection policy
    #[must_use]
    pub fn with_image_selection(mut self, selection: ImageSelection) -> Self {
        self.image_selection = selection;
        self
    }

    /// Override the image-selection seed
    #[must_use]
    pub fn with_image_seed(mut self, seed: u64) -> Self {
        self.image_seed = Some(seed);
        self
    }

    /// Build an extractor honoring the selection policy and seed
    #[must_use]
    pub fn extractor(&self) -> RecipeExtractor {
        match self.image_seed {
            Some(seed) => RecipeExtractor::seeded(seed, self.image_selection),
            None => RecipeExtractor::from_entropy(self.image_selection),
        }
    }

    /// Resolve the food catalog path, preferring an explicit override
    ///
    /// # Errors
    ///
    /// Returns a `ConfigMissing` error when neither the override nor
    /// `FOOD_CATALOG_PATH` is set
    pub fn catalog_path(&self, override_path: Option<&Path>) -> AppResult<PathBuf> {
        if let Some(path) = override_path {
            debug!(path = %path.display(), "using explicit food catalog path");
            return Ok(path.to_path_buf());
        }
        self.food_catalog_path
            .clone()
            .ok_or_else(|| AppError::config_missing(env_config::FOOD_CATALOG_PATH))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
