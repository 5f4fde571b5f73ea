//! Text search over the filterable columns (name, category, labels)
//!
//! Matching is ASCII case-insensitive substring search; every
//! whitespace-separated term of the query must match at least one column.

use super::types::ScriptItem;

/// `term` must already be lowercase
fn column_contains(column: &str, term: &str) -> bool {
    column.to_ascii_lowercase().contains(term)
}

/// Whether one row matches the search query
pub fn matches_query(item: &ScriptItem, query: &str) -> bool {
    query
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .all(|term| {
            column_contains(&item.name, &term)
                || item
                    .category
                    .as_deref()
                    .is_some_and(|category| column_contains(category, &term))
                || item
                    .labels
                    .iter()
                    .any(|label| column_contains(&label.name, &term))
        })
}

/// Rows matching `query`, in input order. An empty query keeps every row.
pub fn search_items<'a>(items: &'a [ScriptItem], query: &str) -> Vec<&'a ScriptItem> {
    items.iter().filter(|item| matches_query(item, query)).collect()
}
