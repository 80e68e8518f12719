// ABOUTME: Normalizes a schema.org NutritionInformation node into nutrient entries
// ABOUTME: Parses leading quantities from free text and attaches catalog units and names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use std::collections::BTreeMap;
use std::sync::LazyLock;

use logit_core::constants::json_ld;
use logit_core::models::{NutrientEntry, NutritionFacts, NutritionValue};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// First run of digits with an optional fractional part
static QUANTITY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").ok());

/// Leading numeric quantity of a free-text nutrient value
///
/// The first run of digits (with an optional fractional part) anywhere in the
/// text is used, so `"about 12.5 g"` yields `12.5`. Signs are never part of the
/// match, which keeps quantities non-negative.
#[must_use]
pub fn parse_quantity(text: &str) -> Option<f64> {
    QUANTITY_PATTERN
        .as_ref()?
        .find(text)
        .and_then(|found| found.as_str().parse().ok())
}

/// Normalize the raw `nutrition` field of a recipe
///
/// `@type` and `@context` are dropped along with null values. String values with
/// a leading number become [`NutrientEntry`] records; other strings and
/// non-string values are kept as they are. A non-object input is passed through
/// unchanged. The input is never modified.
#[must_use]
pub fn normalize_nutrition(raw: &Value) -> NutritionFacts {
    let Value::Object(fields) = raw else {
        return NutritionFacts::Passthrough(raw.clone());
    };

    let normalized: BTreeMap<String, NutritionValue> = fields
        .iter()
        .filter(|(key, _)| key.as_str() != json_ld::TYPE && key.as_str() != json_ld::CONTEXT)
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), normalize_field(key, value)))
        .collect();

    NutritionFacts::Normalized(normalized)
}

fn normalize_field(key: &str, value: &Value) -> NutritionValue {
    let Value::String(text) = value else {
        return NutritionValue::Raw(value.clone());
    };

    parse_quantity(text).map_or_else(
        || {
            debug!(key, value = %text, "nutrient value has no leading quantity");
            NutritionValue::Raw(value.clone())
        },
        |quantity| NutritionValue::Entry(NutrientEntry::for_key(key, quantity)),
    )
}
