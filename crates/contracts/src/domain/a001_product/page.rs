use serde::{Deserialize, Serialize};

use super::aggregate::Product;

/// One server-delivered batch of products plus a total-count hint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// 1-based page number this batch was fetched for
    #[serde(rename = "pageNumber")]
    pub page_number: u32,

    /// Normalized items in server order
    pub items: Vec<Product>,

    /// Server's claim of total items across all pages, 0 when unknown
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}
