// ABOUTME: Parsed ingredient models returned by the ingredient parser service
// ABOUTME: Ingredient and Amount definitions with the parsability rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use serde::{Deserialize, Serialize};

/// Quantity and unit text of an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// Free-text unit ("cup", "tbsp", "g")
    #[serde(default)]
    pub unit: String,
    /// Numeric quantity
    pub value: f32,
}

impl Amount {
    /// Create a new amount
    pub fn new(value: f32, unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            value,
        }
    }
}

/// Ingredient as returned by the parser service
///
/// ```text
/// { "name": "all-purpose flour", "amounts": [...], "modifier": "sifted" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, empty when the parser found none
    #[serde(default)]
    pub name: String,
    /// Parsed amounts; a range yields more than one
    #[serde(default)]
    pub amounts: Vec<Amount>,
    /// Optional preparation modifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

impl Ingredient {
    /// Create an ingredient with a single amount
    pub fn new(name: impl Into<String>, value: f32, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amounts: vec![Amount::new(value, unit)],
            modifier: None,
        }
    }

    /// The amount used for nutrition computation
    ///
    /// Returns `None` for unparseable ingredients (empty name or no amounts).
    #[must_use]
    pub fn primary_amount(&self) -> Option<&Amount> {
        if self.name.is_empty() {
            return None;
        }
        self.amounts.first()
    }

    /// Whether the parser produced both a name and at least one amount
    #[must_use]
    pub fn is_parseable(&self) -> bool {
        self.primary_amount().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parseability() {
        assert!(Ingredient::new("flour", 2.0, "cup").is_parseable());
        assert!(!Ingredient::new("", 2.0, "cup").is_parseable());

        let no_amounts = Ingredient {
            name: "salt".into(),
            ..Ingredient::default()
        };
        assert!(!no_amounts.is_parseable());
    }

    #[test]
    fn test_primary_amount_is_first_of_range() {
        let ranged = Ingredient {
            name: "milk".into(),
            amounts: vec![Amount::new(1.0, "cup"), Amount::new(2.0, "cup")],
            modifier: None,
        };
        assert_eq!(ranged.primary_amount().map(|a| a.value), Some(1.0));
    }

    #[test]
    fn test_deserialize_parser_shape() {
        let ingredient: Ingredient = serde_json::from_str(
            r#"{"name": "butter", "amounts": [{"unit": "tbsp", "value": 2}], "modifier": ""}"#,
        )
        .unwrap();
        assert_eq!(ingredient.name, "butter");
        assert_eq!(ingredient.amounts[0].unit, "tbsp");
        assert_eq!(ingredient.modifier.as_deref(), Some(""));
    }
}
