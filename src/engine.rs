//! Filtering and aggregation over a dealer's stock list.
//!
//! Every function here is pure and total over well-typed input, and
//! preserves the original relative order of the items it keeps.

use std::collections::BTreeMap;

use crate::models::{FilterCriteria, StockItem};

/// Shown for listings with no photos.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/250x167/e1e1e1/bebebe?text=No%20Image&font=lato";

fn contains_ci(field: Option<&str>, needle_lower: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle_lower))
}

fn eq_ci(field: Option<&str>, expected: &str) -> bool {
    field.is_some_and(|value| value.eq_ignore_ascii_case(expected))
}

/// Retain items whose make or model contains `query`, case-insensitively.
///
/// An empty query matches everything. `limit` truncates to the first
/// matches, preserving original order.
pub fn filter_by_text(items: &[StockItem], query: &str, limit: Option<usize>) -> Vec<StockItem> {
    let needle = query.to_lowercase();
    let matches = items.iter().filter(|item| {
        needle.is_empty()
            || contains_ci(item.make.as_deref(), &needle)
            || contains_ci(item.model.as_deref(), &needle)
    });

    match limit {
        Some(limit) => matches.take(limit).cloned().collect(),
        None => matches.cloned().collect(),
    }
}

/// Retain items satisfying both supplied constraints: case-insensitive
/// equality on make, case-insensitive containment on model.
///
/// An omitted constraint is always satisfied. No limit is applied here;
/// callers compose truncation separately.
pub fn filter_by_make_and_model(
    items: &[StockItem],
    exact_make: Option<&str>,
    model_substring: Option<&str>,
) -> Vec<StockItem> {
    let model_needle = model_substring.map(str::to_lowercase);

    items
        .iter()
        .filter(|item| {
            let make_matches = exact_make.is_none_or(|make| eq_ci(item.make.as_deref(), make));
            let model_matches = model_needle
                .as_deref()
                .is_none_or(|needle| contains_ci(item.model.as_deref(), needle));
            make_matches && model_matches
        })
        .cloned()
        .collect()
}

/// Apply a full criteria set: the make/model constraints, the text query,
/// then the limit. The predicates are independent, so the result set does
/// not depend on application order.
pub fn apply_criteria(items: &[StockItem], criteria: &FilterCriteria) -> Vec<StockItem> {
    let narrowed = filter_by_make_and_model(
        items,
        criteria.exact_make.as_deref(),
        criteria.model_substring.as_deref(),
    );
    filter_by_text(
        &narrowed,
        criteria.text_query.as_deref().unwrap_or(""),
        criteria.result_limit,
    )
}

/// Count items per lowercased make, in ascending lexicographic key order.
///
/// Items with an absent or empty make do not contribute.
pub fn aggregate_by_make(items: &[StockItem]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for make in items.iter().filter_map(|item| item.make.as_deref()) {
        if make.is_empty() {
            continue;
        }
        *counts.entry(make.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// First photo of the listing, or the fixed placeholder when it has none.
pub fn resolve_image(item: &StockItem) -> &str {
    item.images
        .first()
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
}
