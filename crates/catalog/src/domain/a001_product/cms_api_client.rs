use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::{
    Product, UNKNOWN_CATEGORY, UNKNOWN_PRODUCT_NAME,
};
use contracts::domain::a001_product::page::CatalogPage;
use serde::Deserialize;

use crate::error::CatalogError;

/// Access to the remote product catalog
///
/// The controller and the detail resolver receive their fetcher as an
/// injected dependency, so tests can substitute a mock.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Fetch one page of the paginated catalog; pages are 1-based
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, CatalogError>;

    /// Fetch the unparameterized catalog snapshot used for detail lookup
    ///
    /// The CMS has no fetch-by-key endpoint; detail resolution scans
    /// whatever this call returns. If the service paginates this endpoint
    /// too, keys outside the returned batch cannot be resolved.
    async fn fetch_snapshot(&self) -> Result<CatalogPage, CatalogError>;
}

/// HTTP client for the external catalog management service
pub struct CmsApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl CmsApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// GET a product list URL and decode it into a normalized page
    async fn get_products(
        &self,
        url: String,
        page_number: u32,
    ) -> Result<CatalogPage, CatalogError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::FetchFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("CMS request failed with status {}: {}", status, body);
            return Err(CatalogError::FetchFailed(format!(
                "CMS request failed with status {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::FetchFailed(e.to_string()))?;

        let decoded: CmsProductListResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse CMS response: {}", e);
            CatalogError::FetchFailed(format!("Failed to parse CMS JSON: {}", e))
        })?;

        tracing::debug!(
            "Fetched {} products of {} total",
            decoded.products.len(),
            decoded.total
        );
        Ok(decoded.into_page(page_number))
    }
}

#[async_trait]
impl CatalogFetcher for CmsApiClient {
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, CatalogError> {
        if page < 1 {
            return Err(CatalogError::InvalidArgument(format!(
                "page must be >= 1, got {}",
                page
            )));
        }
        self.get_products(format!("{}/products?page={}", self.base_url, page), page)
            .await
    }

    async fn fetch_snapshot(&self) -> Result<CatalogPage, CatalogError> {
        self.get_products(format!("{}/products", self.base_url), 1)
            .await
    }
}

// ============================================================================
// Raw CMS payload
// ============================================================================

/// Raw body of GET /products
#[derive(Debug, Clone, Deserialize)]
pub struct CmsProductListResponse {
    #[serde(default)]
    pub products: Vec<CmsRawProduct>,

    #[serde(default)]
    pub total: usize,
}

impl CmsProductListResponse {
    /// Normalize the raw items into a catalog page
    pub fn into_page(self, page_number: u32) -> CatalogPage {
        let items = self
            .products
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_product(index))
            .collect();
        CatalogPage {
            page_number,
            items,
            total_count: self.total,
        }
    }
}

/// Raw CMS item; every field is optional so partial or malformed items
/// never abort the whole page
#[derive(Debug, Clone, Deserialize)]
pub struct CmsRawProduct {
    #[serde(default)]
    pub sku_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main_category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mrp: Option<CmsMrp>,
    #[serde(default)]
    pub images: Option<CmsImages>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsMrp {
    /// Arrives as either a JSON string or a bare number
    #[serde(default)]
    pub mrp: Option<serde_json::Value>,
    #[serde(default)]
    pub target_market: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsImages {
    #[serde(default)]
    pub front: Option<String>,
}

impl CmsRawProduct {
    /// Normalize one raw item, applying field defaults
    ///
    /// `index` is the item's position within the page; it backs the key
    /// when `sku_code` is missing so every row still has an identity.
    pub fn into_product(self, index: usize) -> Product {
        let price = self
            .mrp
            .as_ref()
            .and_then(|m| m.mrp.as_ref())
            .map(parse_price)
            .unwrap_or(0.0);

        let (market, location, currency) = match self.mrp {
            Some(m) => (m.target_market, m.location, m.currency),
            None => (None, None, None),
        };

        Product {
            key: self
                .sku_code
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| index.to_string()),
            name: self
                .name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string()),
            price,
            category: self
                .main_category
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            thumbnail_url: self.images.and_then(|i| i.front),
            description: self.description,
            market,
            location,
            currency,
        }
    }
}

/// Coerce the raw price to a number; anything unparsable becomes 0
fn parse_price(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_minimal_item() {
        let body = r#"{"products":[{"sku_code":"X1","name":"Widget","mrp":{"mrp":"10"}}],"total":1}"#;
        let decoded: CmsProductListResponse = serde_json::from_str(body).unwrap();
        let page = decoded.into_page(1);

        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items.len(), 1);

        let p = &page.items[0];
        assert_eq!(p.key, "X1");
        assert_eq!(p.name, "Widget");
        assert_eq!(p.price, 10.0);
        assert_eq!(p.category, UNKNOWN_CATEGORY);
        assert!(p.thumbnail_url.is_none());
    }

    #[test]
    fn test_price_accepts_string_and_number() {
        let body = r#"{"products":[
            {"sku_code":"A","mrp":{"mrp":"12.5"}},
            {"sku_code":"B","mrp":{"mrp":42}},
            {"sku_code":"C","mrp":{"mrp":"twelve"}},
            {"sku_code":"D"}
        ],"total":4}"#;
        let page = serde_json::from_str::<CmsProductListResponse>(body)
            .unwrap()
            .into_page(1);

        assert_eq!(page.items[0].price, 12.5);
        assert_eq!(page.items[1].price, 42.0);
        assert_eq!(page.items[2].price, 0.0);
        assert_eq!(page.items[3].price, 0.0);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let body = r#"{"products":[{}],"total":1}"#;
        let page = serde_json::from_str::<CmsProductListResponse>(body)
            .unwrap()
            .into_page(1);

        let p = &page.items[0];
        assert_eq!(p.key, "0");
        assert_eq!(p.name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(p.category, UNKNOWN_CATEGORY);
        assert_eq!(p.price, 0.0);
    }

    #[test]
    fn test_full_item_keeps_detail_fields() {
        let body = r#"{"products":[{
            "sku_code":"X1",
            "name":"Widget",
            "main_category":"Tools",
            "description":"A widget",
            "mrp":{"mrp":"10","target_market":"IN","location":"Delhi","currency":"INR"},
            "images":{"front":"https://cdn.example.com/x1.jpg"}
        }],"total":1}"#;
        let page = serde_json::from_str::<CmsProductListResponse>(body)
            .unwrap()
            .into_page(1);

        let p = &page.items[0];
        assert_eq!(p.category, "Tools");
        assert_eq!(p.description.as_deref(), Some("A widget"));
        assert_eq!(p.market.as_deref(), Some("IN"));
        assert_eq!(p.location.as_deref(), Some("Delhi"));
        assert_eq!(p.currency.as_deref(), Some("INR"));
        assert_eq!(
            p.thumbnail_url.as_deref(),
            Some("https://cdn.example.com/x1.jpg")
        );
    }

    #[test]
    fn test_empty_body_decodes_to_empty_page() {
        let page = serde_json::from_str::<CmsProductListResponse>("{}")
            .unwrap()
            .into_page(3);
        assert_eq!(page.page_number, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_page_zero() {
        let client = CmsApiClient::new("http://localhost:9");
        let err = client.fetch_page(0).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }
}
