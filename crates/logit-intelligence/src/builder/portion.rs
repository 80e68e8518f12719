// ABOUTME: Matches an ingredient unit against a food's serving portions
// ABOUTME: Exact, case-sensitive comparison on full or abbreviated unit name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use logit_core::models::Portion;

/// Index of the first portion whose full or abbreviated unit name equals `unit`
///
/// No unit-family conversion happens: `"tbsp"` only matches a portion that
/// literally lists `"tbsp"`.
#[must_use]
pub fn find_common_unit(portions: &[Portion], unit: &str) -> Option<usize> {
    portions.iter().position(|portion| portion.is_same_unit(unit))
}

/// The first portion measured in `unit`
#[must_use]
pub fn find_portion<'a>(portions: &'a [Portion], unit: &str) -> Option<&'a Portion> {
    find_common_unit(portions, unit).map(|index| &portions[index])
}
