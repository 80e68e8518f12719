// ABOUTME: Resolves recipe image and main-entity fields to a single URL or identifier
// ABOUTME: Image lists are sampled through an injected RNG or by taking the first entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use logit_core::constants::json_ld;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::locator::shape_name;

/// How one image is chosen when the markup lists several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSelection {
    /// Pick one entry uniformly at random
    #[default]
    Random,
    /// Always take the first entry
    First,
}

impl ImageSelection {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "first" | "primary" => Self::First,
            _ => Self::Random,
        }
    }
}

impl std::fmt::Display for ImageSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::First => write!(f, "first"),
        }
    }
}

/// Resolve the `image` field of a recipe to a single URL
///
/// - object with `url`: that value
/// - list: one entry is chosen per `selection`, then an object yields its `url`
///   and a string yields itself
/// - anything else, or a chosen entry of another shape: the input unchanged
#[must_use]
pub fn normalize_image<R: Rng + ?Sized>(
    raw: &Value,
    selection: ImageSelection,
    rng: &mut R,
) -> Value {
    match raw {
        Value::Object(image) => {
            if let Some(url) = image.get(json_ld::URL) {
                return url.clone();
            }
        }
        Value::Array(images) if images.is_empty() => {
            debug!("image list is empty");
        }
        Value::Array(images) => {
            let index = match selection {
                ImageSelection::Random => rng.gen_range(0..images.len()),
                ImageSelection::First => 0,
            };
            if let Some(url) = image_entry_url(&images[index]) {
                return url;
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
            debug!(shape = shape_name(raw), "image field is not an object or list");
        }
    }

    raw.clone()
}

fn image_entry_url(entry: &Value) -> Option<Value> {
    match entry {
        Value::Object(image) => image.get(json_ld::URL).cloned(),
        Value::String(_) => Some(entry.clone()),
        Value::Array(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
            debug!(shape = shape_name(entry), "unexpected image entry");
            None
        }
    }
}

/// Resolve the `mainEntityOfPage` field to the page identifier
///
/// An object with `@id` yields that value; any other input is returned unchanged.
#[must_use]
pub fn normalize_main_entity(raw: &Value) -> Value {
    raw.get(json_ld::ID).unwrap_or(raw).clone()
}
