use contracts::domain::a001_product::aggregate::Product;

use crate::domain::a001_product::cms_api_client::CatalogFetcher;
use crate::error::CatalogError;

/// Resolves a single product by its catalog key
///
/// The CMS exposes no fetch-by-key endpoint, so resolution fetches the
/// unparameterized catalog snapshot and scans it linearly. Works against
/// its own fetch and never touches the list controller's state. The reach
/// of a lookup is bounded by whatever the snapshot endpoint returns: if
/// the service paginates it, keys outside the first batch resolve to
/// `None` even though the item exists.
pub struct ProductDetailsResolver<F: CatalogFetcher> {
    fetcher: F,
}

impl<F: CatalogFetcher> ProductDetailsResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Look up one product by key
    ///
    /// `Ok(None)` means the key does not exist in the scanned snapshot;
    /// callers should treat it as "no such item", not as a transient
    /// failure worth retrying.
    pub async fn resolve(&self, key: &str) -> Result<Option<Product>, CatalogError> {
        let snapshot = self.fetcher.fetch_snapshot().await?;
        tracing::debug!(
            "Scanning {} products for key {}",
            snapshot.items.len(),
            key
        );
        Ok(snapshot.items.into_iter().find(|p| p.key == key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a001_product::page::CatalogPage;

    struct SnapshotFetcher {
        snapshot: Result<CatalogPage, String>,
    }

    #[async_trait]
    impl CatalogFetcher for SnapshotFetcher {
        async fn fetch_page(&self, _page: u32) -> Result<CatalogPage, CatalogError> {
            unreachable!("detail resolution never fetches by page")
        }

        async fn fetch_snapshot(&self) -> Result<CatalogPage, CatalogError> {
            self.snapshot
                .clone()
                .map_err(CatalogError::FetchFailed)
        }
    }

    fn product(key: &str, name: &str) -> Product {
        Product {
            key: key.to_string(),
            name: name.to_string(),
            price: 10.0,
            category: "Tools".to_string(),
            thumbnail_url: None,
            description: Some("A widget".to_string()),
            market: None,
            location: None,
            currency: None,
        }
    }

    fn fetcher_with(items: Vec<Product>) -> SnapshotFetcher {
        SnapshotFetcher {
            snapshot: Ok(CatalogPage {
                page_number: 1,
                total_count: items.len(),
                items,
            }),
        }
    }

    #[tokio::test]
    async fn test_resolve_finds_matching_key() {
        let resolver = ProductDetailsResolver::new(fetcher_with(vec![
            product("X1", "Widget"),
            product("X2", "Gadget"),
        ]));

        let found = resolver.resolve("X1").await.unwrap();
        assert_eq!(found.unwrap().name, "Widget");
    }

    #[tokio::test]
    async fn test_resolve_missing_key_is_none_not_error() {
        let resolver =
            ProductDetailsResolver::new(fetcher_with(vec![product("X1", "Widget")]));

        let found = resolver.resolve("ZZZ").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_resolve_propagates_fetch_failure() {
        let resolver = ProductDetailsResolver::new(SnapshotFetcher {
            snapshot: Err("connection refused".to_string()),
        });

        let err = resolver.resolve("X1").await.unwrap_err();
        assert!(matches!(err, CatalogError::FetchFailed(_)));
    }
}
