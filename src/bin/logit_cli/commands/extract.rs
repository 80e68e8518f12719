// ABOUTME: Extract command for logit-cli
// ABOUTME: Locates the recipe in a JSON-LD file and prints its canonical JSON form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use logit::config::LogitConfig;
use logit::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

/// Extract and print the recipe held in `file`
pub fn run(config: &LogitConfig, file: &Path) -> Result<()> {
    let text = fs::read_to_string(file).map_err(|e| {
        AppError::storage(format!("cannot read {}", file.display())).with_source(e)
    })?;

    let mut extractor = config.extractor();
    let Some(recipe) = extractor.extract_from_ld_json(&text) else {
        warn!(file = %file.display(), "no recipe found");
        return Err(AppError::not_found(format!("Recipe in {}", file.display())));
    };

    info!(
        file = %file.display(),
        name = recipe.name.as_deref().unwrap_or(""),
        "Recipe extracted"
    );
    print_json(&recipe)
}
