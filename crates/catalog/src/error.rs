use thiserror::Error;

/// Errors surfaced by the catalog core
///
/// Both variants are non-fatal: the controller recovers locally by keeping
/// the last-known-good page and exposing the message through its view
/// state. A missing product in detail resolution is not an error; it is
/// the `Ok(None)` outcome of `ProductDetailsResolver::resolve`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Caller supplied an out-of-contract value (e.g. page < 1);
    /// reported synchronously, no state change
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport or decoding failure while talking to the CMS
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
}
