// ABOUTME: Logit CLI - command-line front end for recipe extraction and nutrition
// ABOUTME: Reads JSON-LD documents and parsed ingredient payloads, prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors
//!
//! Usage:
//! ```bash
//! # Extract the canonical recipe from a JSON-LD document
//! logit-cli extract page.jsonld --image first
//!
//! # Reproducible random image choice
//! logit-cli extract page.jsonld --seed 42
//!
//! # Compute recipe nutrition from parser output
//! logit-cli nutrition --ingredients parsed.json --lines lines.txt --catalog foods.json
//!
//! # Show totals with units and display names
//! logit-cli nutrition --ingredients parsed.json --display
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use logit::config::LogitConfig;
use logit::errors::AppResult;
use logit::logging::LoggingConfig;
use logit::schema::ImageSelection;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "logit-cli",
    about = "Logit recipe extraction and nutrition CLI",
    long_about = "Extract schema.org recipes from JSON-LD and compute recipe nutrition from parsed ingredients."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Extract the recipe from a JSON-LD document
    Extract {
        /// JSON-LD file (the text of one ld+json script block)
        file: PathBuf,

        /// Seed for image selection (overrides IMAGE_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Image selection policy (overrides IMAGE_SELECTION)
        #[arg(long, value_enum)]
        image: Option<ImageArg>,
    },

    /// Compute recipe nutrition from parsed ingredients
    Nutrition {
        /// Parsed ingredients: a JSON array or a {"data": [...]} envelope
        #[arg(long)]
        ingredients: PathBuf,

        /// Raw ingredient lines the parser was given, in the same order
        #[arg(long)]
        lines: Option<PathBuf>,

        /// Food catalog JSON file (overrides FOOD_CATALOG_PATH)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print totals as unit-annotated entries instead of raw numbers
        #[arg(long)]
        display: bool,
    },
}

/// `--image` values accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ImageArg {
    /// Pick one listed image at random
    Random,
    /// Take the first listed image
    #[value(alias = "primary")]
    First,
}

impl From<ImageArg> for ImageSelection {
    fn from(arg: ImageArg) -> Self {
        match arg {
            ImageArg::Random => Self::Random,
            ImageArg::First => Self::First,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = LogitConfig::from_env()?;
    debug!(?config, "logit-cli starting");

    match cli.command {
        Command::Extract { file, seed, image } => {
            let mut config = config;
            if let Some(seed) = seed {
                config = config.with_image_seed(seed);
            }
            if let Some(image) = image {
                config = config.with_image_selection(image.into());
            }
            commands::extract::run(&config, &file)?;
        }
        Command::Nutrition {
            ingredients,
            lines,
            catalog,
            display,
        } => {
            let catalog_path = config.catalog_path(catalog.as_deref())?;
            commands::nutrition::run(
                &config,
                &catalog_path,
                &ingredients,
                lines.as_deref(),
                display,
            )?;
        }
    }

    Ok(())
}
