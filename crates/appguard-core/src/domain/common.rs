//! List primitives shared by the rule checks.

use std::collections::HashSet;

/// `true` if no value appears twice in `items`.
pub fn list_is_unique<S: AsRef<str>>(items: &[S]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item.as_ref()))
}

/// `true` if `value` is an element of `items`.
pub fn string_in_list<S: AsRef<str>>(value: &str, items: &[S]) -> bool {
    items.iter().any(|item| item.as_ref() == value)
}

/// Comma-join a list of identifiers for diagnostics.
pub fn join_ids<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
