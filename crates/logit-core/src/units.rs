// ABOUTME: Static unit catalog for schema.org nutrient keys
// ABOUTME: Maps a nutrient key to its display unit and human-readable display name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use crate::constants::{nutrient_keys, units};

/// Display unit for a nutrient key
///
/// `calories` is reported in `cals`, the macro `...Content` keys in grams, and
/// every other key falls back to milligrams.
#[must_use]
pub fn unit_for(key: &str) -> &'static str {
    if key == nutrient_keys::CALORIES {
        units::CALORIES
    } else if nutrient_keys::GRAM_KEYS.contains(&key) {
        units::GRAMS
    } else {
        units::MILLIGRAMS
    }
}

/// Human-readable display name for a nutrient key
///
/// The fat variants have fixed names. Any other key loses one trailing `Size`
/// or `Content` suffix and is title-cased word by word.
#[must_use]
pub fn display_name_for(key: &str) -> String {
    match key {
        nutrient_keys::SATURATED_FAT => "Saturated fat".to_owned(),
        nutrient_keys::TRANS_FAT => "Trans fat".to_owned(),
        nutrient_keys::UNSATURATED_FAT => "Unsaturated fat".to_owned(),
        _ => {
            let stem = key
                .strip_suffix("Size")
                .or_else(|| key.strip_suffix("Content"))
                .unwrap_or(key);
            title_case(stem)
        }
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(unit_for("calories"), "cals");
        assert_eq!(unit_for("proteinContent"), "g");
        assert_eq!(unit_for("saturatedFatContent"), "g");
        assert_eq!(unit_for("sodiumContent"), "mg");
        assert_eq!(unit_for("caloriesContent"), "mg");
        assert_eq!(unit_for("servingSize"), "mg");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name_for("saturatedFatContent"), "Saturated fat");
        assert_eq!(display_name_for("transFatContent"), "Trans fat");
        assert_eq!(display_name_for("unsaturatedFatContent"), "Unsaturated fat");
        assert_eq!(display_name_for("proteinContent"), "Protein");
        assert_eq!(display_name_for("servingSize"), "Serving");
        assert_eq!(display_name_for("calories"), "Calories");
        assert_eq!(display_name_for("cholesterolContent"), "Cholesterol");
    }

    #[test]
    fn test_only_one_suffix_is_stripped() {
        // "Size" wins and the remaining "Content" stays part of the name
        assert_eq!(display_name_for("fooContentSize"), "Foocontent");
        assert_eq!(display_name_for("Content"), "");
    }
}
