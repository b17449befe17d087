/// Shared utilities for list views (search, sort)
use std::cmp::Ordering;

/// Trait for data types supporting free-text search
pub trait Searchable {
    /// Whether the object matches the search filter
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for data types supporting sorting
pub trait Sortable {
    type Field: Copy;

    /// Compare two objects by the given field
    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Filter a list by a search query; an empty query keeps every item
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Stable-sort a list by the given field
///
/// Ties keep their relative input order regardless of direction, so
/// repeated re-derivation yields a deterministic, non-jittering list.
pub fn sort_list<T: Sortable>(items: &mut [T], field: T::Field, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}
