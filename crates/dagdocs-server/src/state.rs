//! Application state.
//!
//! Shared state for all request handlers.

use dagdocs_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Documentation site for both namespaces.
    pub(crate) site: Site,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
