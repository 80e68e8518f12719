// ABOUTME: Constants module with domain-separated organization
// ABOUTME: JSON-LD keys, schema.org nutrient keys, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// JSON-LD structural keys and values used when locating recipe markup
pub mod json_ld {
    /// Wrapper key holding a list of nodes
    pub const GRAPH: &str = "@graph";
    /// Declared node type (string or list of strings)
    pub const TYPE: &str = "@type";
    /// JSON-LD context declaration
    pub const CONTEXT: &str = "@context";
    /// Node identifier
    pub const ID: &str = "@id";
    /// Type value identifying a recipe node (compared case-insensitively)
    pub const RECIPE_TYPE: &str = "recipe";
    /// URL field on `ImageObject` nodes
    pub const URL: &str = "url";
}

/// schema.org `Recipe` property names
pub mod recipe_fields {
    /// Cook time (ISO-8601 duration, passed through)
    pub const COOK_TIME: &str = "cookTime";
    /// Prep time (ISO-8601 duration, passed through)
    pub const PREP_TIME: &str = "prepTime";
    /// Total time (ISO-8601 duration, passed through)
    pub const TOTAL_TIME: &str = "totalTime";
    /// Recipe name
    pub const NAME: &str = "name";
    /// Recipe description
    pub const DESCRIPTION: &str = "description";
    /// Page the recipe is the main entity of
    pub const MAIN_ENTITY_OF_PAGE: &str = "mainEntityOfPage";
    /// Recipe image(s)
    pub const IMAGE: &str = "image";
    /// `NutritionInformation` node
    pub const NUTRITION: &str = "nutrition";
    /// Ingredient lines
    pub const RECIPE_INGREDIENT: &str = "recipeIngredient";
}

/// schema.org `NutritionInformation` property names
pub mod nutrient_keys {
    /// Energy
    pub const CALORIES: &str = "calories";
    /// Total fat
    pub const FAT: &str = "fatContent";
    /// Trans fat
    pub const TRANS_FAT: &str = "transFatContent";
    /// Saturated fat
    pub const SATURATED_FAT: &str = "saturatedFatContent";
    /// Unsaturated fat
    pub const UNSATURATED_FAT: &str = "unsaturatedFatContent";
    /// Cholesterol
    pub const CHOLESTEROL: &str = "cholesterolContent";
    /// Sodium
    pub const SODIUM: &str = "sodiumContent";
    /// Carbohydrates
    pub const CARBOHYDRATE: &str = "carbohydrateContent";
    /// Dietary fiber
    pub const FIBER: &str = "fiberContent";
    /// Sugars
    pub const SUGAR: &str = "sugarContent";
    /// Protein
    pub const PROTEIN: &str = "proteinContent";

    /// Keys measured in grams
    pub const GRAM_KEYS: &[&str] = &[
        CARBOHYDRATE,
        FAT,
        FIBER,
        PROTEIN,
        SUGAR,
        TRANS_FAT,
        UNSATURATED_FAT,
        SATURATED_FAT,
    ];
}

/// Display units assigned by the unit catalog
pub mod units {
    /// Calories
    pub const CALORIES: &str = "cals";
    /// Grams
    pub const GRAMS: &str = "g";
    /// Milligrams (fallback for every other key)
    pub const MILLIGRAMS: &str = "mg";
}

/// Food profile normalization
pub mod food {
    /// Food nutrient profiles are expressed per this many grams
    pub const PROFILE_BASIS_GRAMS: f64 = 100.0;
}

/// Environment variable names
pub mod env_config {
    /// Path of the JSON food catalog
    pub const FOOD_CATALOG_PATH: &str = "FOOD_CATALOG_PATH";
    /// Image selection policy (`random` or `first`)
    pub const IMAGE_SELECTION: &str = "IMAGE_SELECTION";
    /// Optional seed for the image selection RNG
    pub const IMAGE_SEED: &str = "IMAGE_SEED";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identity for structured logging
pub mod service_names {
    /// Library / CLI service name
    pub const LOGIT: &str = "logit";
}
