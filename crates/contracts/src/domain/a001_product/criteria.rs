use serde::{Deserialize, Serialize};

/// Client-side filter over the currently held page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the product name;
    /// empty string = no filter
    #[serde(default)]
    pub search: String,

    /// Exact category match; empty string = no filter
    #[serde(default)]
    pub category: String,
}

/// Field the visible list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Name,
    Price,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The single active sort criterion (no multi-key sort)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortCriteria {
    /// Price ascending, the initial sort model of the catalog list
    fn default() -> Self {
        Self {
            field: SortField::Price,
            direction: SortDirection::Ascending,
        }
    }
}
