//! Page rendering endpoint.
//!
//! Resolves the request path against the markdown tree and returns a
//! rendered HTML page. Every resolution failure collapses into the same
//! not-found fallback page.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use md5::{Digest, Md5};
use mdweb_site::PageView;

use crate::state::AppState;
use crate::template;

/// Cache policy for rendered pages.
const PAGE_CACHE_CONTROL: &str = "public, max-age=3600";

/// Handle GET / (root page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    get_page_impl(String::new(), &state, &headers)
}

/// Handle GET /{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    get_page_impl(path, &state, &headers)
}

/// Shared implementation for page rendering.
fn get_page_impl(path: String, state: &AppState, headers: &HeaderMap) -> Response {
    let (view, status) = match state.site.render_page(&path) {
        Ok(view) => (view, StatusCode::OK),
        Err(err) => {
            tracing::debug!(path = %path, error = %err, "serving fallback page");
            (PageView::fallback(&path), StatusCode::NOT_FOUND)
        }
    };

    let body = template::render_page(&view, &state.static_url);

    // Compute ETag and answer conditional requests for successful pages
    let etag = compute_etag(&state.version, &body);
    if status == StatusCode::OK
        && let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    let mut response = (status, Html(body)).into_response();
    if status == StatusCode::OK {
        let headers = response.headers_mut();
        if let Ok(value) = etag.parse() {
            headers.insert(header::ETAG, value);
        }
        headers.insert(
            header::CACHE_CONTROL,
            header::HeaderValue::from_static(PAGE_CACHE_CONTROL),
        );
    }
    response
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
