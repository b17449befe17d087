pub mod state;

use std::sync::Mutex;

use contracts::domain::a001_product::criteria::{FilterCriteria, SortCriteria};

use crate::domain::a001_product::cms_api_client::CatalogFetcher;
use crate::error::CatalogError;

pub use state::{ViewState, ViewStatus};

/// Controller of the paginated catalog list
///
/// Reconciles server-side pagination with client-applied filtering and
/// sorting: page changes go through the injected fetcher, filter and sort
/// changes only re-derive the visible rows from the page already held.
///
/// Lifecycle: `new` -> `set_page(1)` -> respond to events. The state
/// lock is never held across the network await, and a fetch result is
/// applied only when its page is still the most recently requested one,
/// so overlapping page changes cannot apply out of order.
pub struct ProductListController<F: CatalogFetcher> {
    fetcher: F,
    state: Mutex<ViewState>,
}

impl<F: CatalogFetcher> ProductListController<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: Mutex::new(ViewState::default()),
        }
    }

    /// Read-only snapshot for the rendering boundary
    pub fn view_state(&self) -> ViewState {
        self.state.lock().unwrap().clone()
    }

    /// Request a page from the catalog service
    ///
    /// On success the fetched page replaces the current one and the rows
    /// are re-derived. On failure the previous page and rows stay visible
    /// and only `status`/`error_message` change, so a failed page change
    /// never blanks the list. Re-requesting the page already requested is
    /// a no-op unless that request failed, which lets callers retry.
    pub async fn set_page(&self, page: u32) -> Result<(), CatalogError> {
        if page < 1 {
            return Err(CatalogError::InvalidArgument(format!(
                "page must be >= 1, got {}",
                page
            )));
        }

        {
            let mut state = self.state.lock().unwrap();
            if state.requested_page == Some(page) && state.status != ViewStatus::Failed {
                return Ok(());
            }
            state.requested_page = Some(page);
            state.status = ViewStatus::Loading;
        }

        let result = self.fetcher.fetch_page(page).await;

        let mut state = self.state.lock().unwrap();
        if state.requested_page != Some(page) {
            // A newer page was requested while this fetch was in flight.
            tracing::debug!("Dropping stale response for page {}", page);
            return Ok(());
        }

        match result {
            Ok(fetched) => {
                state.current_page = Some(fetched);
                state.status = ViewStatus::Loaded;
                state.error_message = None;
                state.recompute_categories();
                state.recompute_derived();
            }
            Err(e) => {
                tracing::warn!("Fetch for page {} failed: {}", page, e);
                state.status = ViewStatus::Failed;
                state.error_message = Some(e.to_string());
            }
        }
        Ok(())
    }

    /// Update the filter and re-derive the rows; no fetch
    pub fn set_filter(&self, filter: FilterCriteria) {
        let mut state = self.state.lock().unwrap();
        state.filter = filter;
        state.recompute_derived();
    }

    /// Update the sort criterion and re-derive the rows; no fetch
    pub fn set_sort(&self, sort: SortCriteria) {
        let mut state = self.state.lock().unwrap();
        state.sort = sort;
        state.recompute_derived();
    }
}
