//! Request path to file path resolution.

/// Map a request path to the relative path of its markdown file.
///
/// An empty path or a path ending in `/` denotes a directory index and
/// resolves to that directory's `main.md`; anything else gets a `.md`
/// suffix appended. Resolution never fails here; a missing or unreadable
/// file surfaces when the content is loaded.
///
/// Examples:
/// - `""` -> `"main.md"`
/// - `"guide"` -> `"guide.md"`
/// - `"a/"` -> `"a/main.md"`
/// - `"a/b"` -> `"a/b.md"`
#[must_use]
pub fn resolve(request_path: &str) -> String {
    let mut path = request_path.to_owned();
    if path.is_empty() || path.ends_with('/') {
        path.push_str("main");
    }
    path.push_str(".md");
    path
}
