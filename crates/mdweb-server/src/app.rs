//! Router assembly.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::pages::{get_page, get_root_page};
use crate::state::AppState;
use crate::static_files::static_router;

/// Create the application router.
///
/// Page routes are GET-only; other methods get 405 from the router. The
/// static namespace takes precedence over the page wildcard.
pub(crate) fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(get_root_page))
        .route("/{*path}", get(get_page))
        .merge(static_router(static_dir, &state.static_url))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
