//! Application state.
//!
//! Shared state for all request handlers.

use mdweb_site::Site;

/// Application state shared across all handlers.
///
/// Entirely read-only after startup; concurrent requests need no
/// coordination.
pub struct AppState {
    /// Page assembly over the markdown tree.
    pub site: Site,
    /// Static base URL for the page template.
    pub static_url: String,
    /// Application version for cache invalidation.
    pub version: String,
}
