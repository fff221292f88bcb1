//! Static file serving.
//!
//! Serves raw files from the configured static folder under the static
//! base path, plus `robots.txt` at the site root. No markdown processing
//! happens on this namespace.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

/// Cache policy for static assets.
const STATIC_CACHE_CONTROL: &str = "public, max-age=3600";

/// Create router for static file serving.
///
/// The static folder is mounted at `static_url` when that URL is
/// root-relative; an absolute URL means an external host serves the
/// assets and nothing is mounted. `robots.txt` is served from the static
/// folder when present.
pub(crate) fn static_router(static_dir: &Path, static_url: &str) -> Router<Arc<AppState>> {
    let mut router = Router::new();

    let robots_path = static_dir.join("robots.txt");
    if robots_path.exists() {
        router = router.route_service("/robots.txt", ServeFile::new(robots_path));
    }

    // Trailing slashes would trip axum's nest path rules; a bare "/" or an
    // absolute URL means nothing to mount locally.
    let mount = static_url.trim_end_matches('/');
    if mount.starts_with('/') && static_dir.is_dir() {
        router = router.nest_service(mount, ServeDir::new(static_dir));
    }

    router.layer(SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static(STATIC_CACHE_CONTROL),
    ))
}
