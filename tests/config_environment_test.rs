// ABOUTME: Integration tests for environment-based configuration
// ABOUTME: Validates env var parsing, defaults, and invalid-value handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use logit::config::{Environment, LogitConfig};
use logit::errors::ErrorCode;
use logit::logging::{LogFormat, LoggingConfig};
use logit::schema::ImageSelection;
use serde_json::json;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 4] = [
    "FOOD_CATALOG_PATH",
    "IMAGE_SELECTION",
    "IMAGE_SEED",
    "ENVIRONMENT",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_vars();

    let config = LogitConfig::from_env().unwrap();

    assert_eq!(config, LogitConfig::default());
    assert_eq!(config.image_selection, ImageSelection::Random);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.catalog_path(None).unwrap_err().code,
        ErrorCode::ConfigMissing
    );
}

#[test]
#[serial]
fn test_values_from_environment() {
    clear_vars();
    env::set_var("FOOD_CATALOG_PATH", "/srv/logit/foods.json");
    env::set_var("IMAGE_SELECTION", "First");
    env::set_var("IMAGE_SEED", " 42 ");
    env::set_var("ENVIRONMENT", "production");

    let config = LogitConfig::from_env().unwrap();
    clear_vars();

    assert_eq!(
        config.food_catalog_path,
        Some(PathBuf::from("/srv/logit/foods.json"))
    );
    assert_eq!(config.image_selection, ImageSelection::First);
    assert_eq!(config.image_seed, Some(42));
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_invalid_seed_is_config_invalid() {
    clear_vars();
    env::set_var("IMAGE_SEED", "forty-two");

    let error = LogitConfig::from_env().unwrap_err();
    clear_vars();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("IMAGE_SEED"));
}

#[test]
#[serial]
fn test_blank_values_are_ignored() {
    clear_vars();
    env::set_var("FOOD_CATALOG_PATH", "   ");
    env::set_var("IMAGE_SEED", "");

    let config = LogitConfig::from_env().unwrap();
    clear_vars();

    assert!(config.food_catalog_path.is_none());
    assert!(config.image_seed.is_none());
}

#[test]
#[serial]
fn test_seeded_extractors_agree() {
    let config = LogitConfig::default().with_image_seed(11);
    let doc = json!({
        "@type": "Recipe",
        "image": ["https://x/1.jpg", "https://x/2.jpg", "https://x/3.jpg"]
    });

    let first = config.extractor().extract(&doc).unwrap();
    let second = config.extractor().extract(&doc).unwrap();
    assert_eq!(first.image, second.image);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "logit-test");

    let config = LoggingConfig::from_env();

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "logit-test");
    assert!(config.include_location);
}

#[test]
#[serial]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "logit");
    assert!(!config.include_location);
}
