//! Breadcrumb ("header") and sibling ("nav") link building.

use std::fs;
use std::path::Path;

use crate::error::PageError;
use crate::exclude::ExclusionSet;
use crate::util::strip_md;

/// A link target and its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkPair {
    /// Link href. Directory targets keep a trailing `/`.
    pub target: String,
    /// Display label. Markdown files have `.md` stripped.
    pub label: String,
}

impl LinkPair {
    /// Create a link pair.
    pub fn new(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
        }
    }
}

/// Build breadcrumb links for the resolved file path.
///
/// Walks the path segment by segment from the root, accumulating a
/// sub-path. The walk stops at the first `.md` segment: neither the
/// implicit `main.md` index nor the page's own file gets a breadcrumb.
/// The fixed root pair `("/", "/")` is always first.
///
/// # Errors
///
/// Returns [`PageError::Excluded`] if an accumulated sub-path or bare
/// segment is in the exclusion set; the whole trail is discarded.
pub fn header_links(rel_path: &str, excludes: &ExclusionSet) -> Result<Vec<LinkPair>, PageError> {
    let mut links = vec![LinkPair::new("/", "/")];
    let mut accumulated = String::with_capacity(rel_path.len());
    for segment in rel_path.split('/') {
        if segment.ends_with(".md") {
            break;
        }
        if !accumulated.is_empty() {
            accumulated.push('/');
        }
        accumulated.push_str(segment);
        if excludes.contains(segment) || excludes.contains(&accumulated) {
            return Err(PageError::Excluded(accumulated));
        }
        links.push(LinkPair::new(format!("/{accumulated}/"), segment));
    }
    Ok(links)
}

/// Build sibling links for the directory containing the resolved file.
///
/// Directory entries keep a trailing `/` on the target; markdown files
/// have `.md` stripped from target and label. `main.md` and excluded
/// names never appear, nor do non-markdown files. Targets are relative to
/// the current directory. Entries are emitted in sorted filename order.
///
/// # Errors
///
/// Returns [`PageError::DirectoryRead`] if the directory cannot be
/// enumerated.
pub fn nav_links(dir: &Path, excludes: &ExclusionSet) -> Result<Vec<LinkPair>, PageError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(PageError::DirectoryRead)? {
        let entry = entry.map_err(PageError::DirectoryRead)?;
        let is_dir = entry.file_type().map_err(PageError::DirectoryRead)?.is_dir();
        entries.push((entry.file_name().to_string_lossy().into_owned(), is_dir));
    }
    entries.sort();

    let mut links = Vec::new();
    for (name, is_dir) in entries {
        if excludes.matches_entry(&name) {
            continue;
        }
        if is_dir {
            links.push(LinkPair::new(format!("{name}/"), name));
        } else if name.ends_with(".md") && name != "main.md" {
            let stem = strip_md(&name);
            links.push(LinkPair::new(stem, stem));
        }
    }
    Ok(links)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn excludes(extra: &[&str]) -> ExclusionSet {
        ExclusionSet::with_defaults("static", extra.iter().map(|s| (*s).to_owned()))
    }

    fn pairs(links: &[LinkPair]) -> Vec<(&str, &str)> {
        links
            .iter()
            .map(|l| (l.target.as_str(), l.label.as_str()))
            .collect()
    }

    #[test]
    fn header_links_start_with_root_pair() {
        let links = header_links("main.md", &excludes(&[])).unwrap();

        assert_eq!(pairs(&links), vec![("/", "/")]);
    }

    #[test]
    fn header_links_skip_own_file() {
        let links = header_links("guide.md", &excludes(&[])).unwrap();

        assert_eq!(pairs(&links), vec![("/", "/")]);
    }

    #[test]
    fn header_links_list_parent_directories() {
        let links = header_links("a/b/page.md", &excludes(&[])).unwrap();

        assert_eq!(pairs(&links), vec![("/", "/"), ("/a/", "a"), ("/a/b/", "b")]);
    }

    #[test]
    fn header_links_directory_index_lists_directory() {
        let links = header_links("a/main.md", &excludes(&[])).unwrap();

        assert_eq!(pairs(&links), vec![("/", "/"), ("/a/", "a")]);
    }

    #[test]
    fn header_links_fail_on_excluded_segment() {
        let result = header_links("secrets/x.md", &excludes(&["secrets"]));

        assert!(matches!(result, Err(PageError::Excluded(_))));
    }

    #[test]
    fn header_links_fail_on_nested_excluded_segment() {
        let result = header_links("a/secrets/x.md", &excludes(&["secrets"]));

        assert!(matches!(result, Err(PageError::Excluded(_))));
    }

    #[test]
    fn header_links_fail_on_excluded_subpath() {
        let result = header_links("a/b/x.md", &excludes(&["a/b"]));

        assert!(matches!(result, Err(PageError::Excluded(_))));
    }

    #[test]
    fn nav_links_list_siblings_in_sorted_order() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("main.md"), "# Index").unwrap();
        fs::write(temp.path().join("one.md"), "# One").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let links = nav_links(temp.path(), &excludes(&[])).unwrap();

        assert_eq!(pairs(&links), vec![("one", "one"), ("sub/", "sub")]);
    }

    #[test]
    fn nav_links_skip_excluded_and_non_markdown() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("guide.md"), "# Guide").unwrap();
        fs::write(temp.path().join("README.md"), "# Readme").unwrap();
        fs::write(temp.path().join("logo.png"), [0u8; 4]).unwrap();
        fs::create_dir(temp.path().join("static")).unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        let links = nav_links(temp.path(), &excludes(&["README.md"])).unwrap();

        assert_eq!(pairs(&links), vec![("guide", "guide")]);
    }

    #[test]
    fn nav_links_strip_md_from_target_and_label() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("notes.md"), "# Notes").unwrap();

        let links = nav_links(temp.path(), &excludes(&[])).unwrap();

        assert_eq!(links, vec![LinkPair::new("notes", "notes")]);
    }

    #[test]
    fn nav_links_fail_on_missing_directory() {
        let temp = tempfile::tempdir().unwrap();

        let result = nav_links(&temp.path().join("nope"), &excludes(&[]));

        assert!(matches!(result, Err(PageError::DirectoryRead(_))));
    }

    #[test]
    fn nav_links_empty_directory_is_empty() {
        let temp = tempfile::tempdir().unwrap();

        let links = nav_links(temp.path(), &excludes(&[])).unwrap();

        assert!(links.is_empty());
    }
}
