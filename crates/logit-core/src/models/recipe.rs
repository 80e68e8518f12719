// ABOUTME: Canonical schema.org Recipe record produced by JSON-LD extraction
// ABOUTME: RecipeSchema plus the normalized nutrition representation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::nutrition::NutrientEntry;

/// A single key of a normalized `nutrition` node
///
/// Values with a leading number become entries; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutritionValue {
    /// Parsed nutrient
    Entry(NutrientEntry),
    /// Value passed through unconverted
    Raw(Value),
}

impl NutritionValue {
    /// The parsed entry, if this key was converted
    #[must_use]
    pub const fn as_entry(&self) -> Option<&NutrientEntry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Raw(_) => None,
        }
    }
}

/// Normalized `nutrition` field of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutritionFacts {
    /// The field was an object and has been normalized key by key
    Normalized(BTreeMap<String, NutritionValue>),
    /// The field was not an object and is passed through unchanged
    Passthrough(Value),
}

impl NutritionFacts {
    /// Look up a parsed nutrient entry by schema.org key
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&NutrientEntry> {
        match self {
            Self::Normalized(map) => map.get(key).and_then(NutritionValue::as_entry),
            Self::Passthrough(_) => None,
        }
    }
}

/// Canonical recipe record
///
/// Built once per successful extraction and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSchema {
    /// Cook time (opaque ISO-8601 duration)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    /// Prep time (opaque ISO-8601 duration)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    /// Total time (opaque ISO-8601 duration)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    /// Recipe name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Recipe description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resolved page identifier
    #[serde(rename = "mainEntityOfPage", skip_serializing_if = "Option::is_none")]
    pub main_entity: Option<Value>,
    /// Resolved image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    /// Normalized nutrition information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionFacts>,
    /// Ingredient lines, passed through unmodified
    #[serde(rename = "recipeIngredient", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Value>,
}

impl RecipeSchema {
    /// Ingredient lines, one per `recipeIngredient` entry
    ///
    /// Positions match the markup list: a non-string entry becomes its compact
    /// JSON text, and `null` becomes an empty line.
    #[must_use]
    pub fn ingredient_lines(&self) -> Vec<String> {
        match &self.ingredients {
            Some(Value::Array(items)) => items.iter().map(line_text).collect(),
            Some(Value::String(line)) => vec![line.clone()],
            _ => Vec::new(),
        }
    }
}

fn line_text(item: &Value) -> String {
    match item {
        Value::String(line) => line.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
