//! Per-request page assembly.

use std::path::{Component, Path, PathBuf};

use crate::content::load_content;
use crate::error::PageError;
use crate::exclude::ExclusionSet;
use crate::links::{LinkPair, header_links, nav_links};
use crate::resolve::resolve;
use crate::util::{escape_html, strip_md};

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Directory containing the markdown tree.
    pub source_dir: PathBuf,
    /// Base URL substituted for the static placeholder token.
    pub static_url: String,
    /// Names hidden from rendering and linking.
    pub excludes: ExclusionSet,
}

/// A fully assembled page, ready for the HTML template.
#[derive(Clone, Debug)]
pub struct PageView {
    /// Page title: the final request-path segment, `/` for the root.
    pub title: String,
    /// Breadcrumb links, root pair first.
    pub header_links: Vec<LinkPair>,
    /// Sibling links in sorted filename order.
    pub nav_links: Vec<LinkPair>,
    /// Rendered HTML content, inserted into the template unescaped.
    pub content: String,
}

impl PageView {
    /// The payload rendered when a request fails for any reason.
    ///
    /// Header links reduce to the root pair, nav links are empty, and the
    /// content is a generic message naming the requested path.
    #[must_use]
    pub fn fallback(request_path: &str) -> Self {
        Self {
            title: page_title(request_path),
            header_links: vec![LinkPair::new("/", "/")],
            nav_links: Vec::new(),
            content: format!("/{} couldn't be served.", escape_html(request_path)),
        }
    }
}

/// Page assembly over a source directory.
///
/// Stateless per request: every call resolves, reads and builds links
/// fresh. The only long-lived pieces are the configuration fields, all
/// immutable after construction.
#[derive(Clone, Debug)]
pub struct Site {
    source_dir: PathBuf,
    static_url: String,
    excludes: ExclusionSet,
}

impl Site {
    /// Create a site from its configuration.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            source_dir: config.source_dir,
            static_url: config.static_url,
            excludes: config.excludes,
        }
    }

    /// Assemble the page for a request path.
    ///
    /// # Errors
    ///
    /// Returns a [`PageError`] when the path is excluded, escapes the
    /// source directory, does not resolve to a readable markdown file, or
    /// its directory cannot be listed. Callers render
    /// [`PageView::fallback`] in every error case.
    pub fn render_page(&self, request_path: &str) -> Result<PageView, PageError> {
        let rel = resolve(request_path);
        validate_path(Path::new(&rel))?;
        if self.excludes.matches_path(&rel) {
            return Err(PageError::Excluded(rel));
        }

        let file_path = self.source_dir.join(&rel);
        let content = load_content(&file_path, &self.static_url)?;
        let header_links = header_links(&rel, &self.excludes)?;
        let dir = file_path.parent().unwrap_or(&self.source_dir);
        let nav_links = nav_links(dir, &self.excludes)?;

        Ok(PageView {
            title: page_title(request_path),
            header_links,
            nav_links,
            content,
        })
    }
}

/// Title for a request path: the final segment with `.md` stripped, or the
/// literal `/` for the root.
#[must_use]
pub(crate) fn page_title(request_path: &str) -> String {
    request_path
        .split('/')
        .rev()
        .find(|s| !s.is_empty())
        .map_or_else(|| "/".to_owned(), |s| strip_md(s).to_owned())
}

/// Reject paths that escape the source directory.
fn validate_path(path: &Path) -> Result<(), PageError> {
    let escapes = path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir));
    if escapes {
        return Err(PageError::Excluded(path.to_string_lossy().into_owned()));
    }
    Ok(())
}
