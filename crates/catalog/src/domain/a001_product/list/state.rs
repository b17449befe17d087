use std::cmp::Ordering;

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::criteria::{
    FilterCriteria, SortCriteria, SortDirection, SortField,
};
use contracts::domain::a001_product::page::CatalogPage;

use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};

/// Fetch lifecycle of the catalog list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// State of the catalog list view
///
/// Owned and mutated exclusively by `ProductListController`; the rendering
/// boundary only ever sees cloned snapshots, so `derived_rows` always
/// reflects the `current_page`, `filter` and `sort` stored next to it.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub status: ViewStatus,

    /// Last successfully fetched page; survives failed fetches
    pub current_page: Option<CatalogPage>,

    pub filter: FilterCriteria,
    pub sort: SortCriteria,

    /// Visible row set: pure function of `current_page.items`, `filter`
    /// and `sort`, recomputed synchronously whenever any of them changes
    pub derived_rows: Vec<Product>,

    /// Distinct categories of the current page in first-appearance order,
    /// for the category dropdown
    pub categories: Vec<String>,

    pub error_message: Option<String>,

    /// Tag of the most recently requested page; fetch results for any
    /// other page are stale and get dropped
    pub requested_page: Option<u32>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            status: ViewStatus::Idle,
            current_page: None,
            filter: FilterCriteria::default(),
            sort: SortCriteria::default(),
            derived_rows: Vec::new(),
            categories: Vec::new(),
            error_message: None,
            requested_page: None,
        }
    }
}

impl ViewState {
    /// Recompute the visible row set: search filter, then category
    /// filter, then a stable sort by the active criterion. Applies only
    /// to the currently held page, never the full catalog.
    pub(crate) fn recompute_derived(&mut self) {
        let items = match &self.current_page {
            Some(page) => page.items.clone(),
            None => Vec::new(),
        };

        let mut rows = filter_list(items, &self.filter.search);

        if !self.filter.category.is_empty() {
            rows.retain(|p| p.category == self.filter.category);
        }

        sort_list(
            &mut rows,
            self.sort.field,
            self.sort.direction == SortDirection::Ascending,
        );

        self.derived_rows = rows;
    }

    /// Rebuild the distinct category list from the current page
    pub(crate) fn recompute_categories(&mut self) {
        let mut categories: Vec<String> = Vec::new();
        if let Some(page) = &self.current_page {
            for item in &page.items {
                if !categories.contains(&item.category) {
                    categories.push(item.category.clone());
                }
            }
        }
        self.categories = categories;
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Sortable for Product {
    type Field = SortField;

    fn compare_by_field(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Name => self.name.cmp(&other.name),
            SortField::Price => self.price.total_cmp(&other.price),
            SortField::Category => self.category.cmp(&other.category),
        }
    }
}
