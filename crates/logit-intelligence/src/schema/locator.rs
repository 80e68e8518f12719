// ABOUTME: Locates the schema.org Recipe node inside an arbitrary JSON-LD document
// ABOUTME: Handles single nodes, node lists, and @graph wrappers without copying
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use logit_core::constants::json_ld;
use serde_json::{Map, Value};
use tracing::debug;

/// Find the recipe node in a decoded JSON-LD document
///
/// Accepted shapes:
/// - an object with `@graph`: the search continues inside that value
/// - an object whose `@type` is, or contains, `"recipe"` (any case)
/// - a list: the first object element with a recipe `@type` wins
///
/// Every other shape yields `None`. A page without recipe markup is an ordinary
/// outcome, so nothing here is an error.
#[must_use]
pub fn find_recipe(doc: &Value) -> Option<&Map<String, Value>> {
    match doc {
        Value::Object(node) => find_in_map(node),
        Value::Array(nodes) => find_in_list(nodes),
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
            debug!(shape = shape_name(doc), "no recipe node: unexpected document shape");
            None
        }
    }
}

fn find_in_map(node: &Map<String, Value>) -> Option<&Map<String, Value>> {
    if let Some(graph) = node.get(json_ld::GRAPH) {
        return find_recipe(graph);
    }

    if is_recipe_node(node) {
        return Some(node);
    }

    debug!("no recipe node: object is neither a graph nor a recipe");
    None
}

fn find_in_list(nodes: &[Value]) -> Option<&Map<String, Value>> {
    let found = nodes
        .iter()
        .filter_map(Value::as_object)
        .find(|node| is_recipe_node(node));

    if found.is_none() {
        debug!(nodes = nodes.len(), "no recipe node in list");
    }
    found
}

fn is_recipe_node(node: &Map<String, Value>) -> bool {
    node.get(json_ld::TYPE).is_some_and(is_recipe_type)
}

/// Whether a `@type` value declares a recipe
///
/// Accepts a bare string or a list containing a string, compared
/// case-insensitively against `recipe`. Non-string list members are ignored.
#[must_use]
pub fn is_recipe_type(schema_type: &Value) -> bool {
    match schema_type {
        Value::String(name) => name.eq_ignore_ascii_case(json_ld::RECIPE_TYPE),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .any(|name| name.eq_ignore_ascii_case(json_ld::RECIPE_TYPE)),
        Value::Object(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
            debug!(shape = shape_name(schema_type), "unexpected @type shape");
            false
        }
    }
}

/// Short name of a JSON value's shape for diagnostics
pub(crate) const fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "list",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "bool",
        Value::Null => "null",
    }
}
