use serde::{Deserialize, Serialize};

/// Sentinel name for products the CMS delivers without a usable name
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// Sentinel category for products the CMS delivers without a category
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Normalized catalog product
///
/// Projection of one raw CMS item after normalization. `key` is the
/// `sku_code` of the external service; it is stable across fetches of the
/// same item and serves both as the row identity in the visible list and
/// as the lookup key for detail resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier (external `sku_code`)
    pub key: String,

    /// Display name, `UNKNOWN_PRODUCT_NAME` when the source omits it
    pub name: String,

    /// Currency-agnostic amount, 0 when the source value is absent or
    /// unparsable
    pub price: f64,

    /// Category name, `UNKNOWN_CATEGORY` when the source omits it
    pub category: String,

    /// Front image URL
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,

    pub description: Option<String>,

    /// Target market from the source `mrp` block
    pub market: Option<String>,

    pub location: Option<String>,

    pub currency: Option<String>,
}
