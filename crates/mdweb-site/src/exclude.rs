//! Exclusion set for names hidden from rendering and linking.

use std::collections::HashSet;

use crate::util::strip_md;

/// Names always hidden regardless of configuration.
const DEFAULT_EXCLUDES: &[&str] = &[".git", ".gitignore"];

/// Set of names and relative paths that must never be resolved, linked,
/// or listed.
///
/// Built once at startup and shared read-only across requests. Always
/// contains the static-asset folder name and VCS metadata names; augmented
/// by configured names (e.g. `README.md`).
#[derive(Clone, Debug)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// Create an exclusion set from the static folder name and extra names.
    #[must_use]
    pub fn with_defaults(static_dir: &str, extra: impl IntoIterator<Item = String>) -> Self {
        let mut names: HashSet<String> =
            DEFAULT_EXCLUDES.iter().map(|s| (*s).to_owned()).collect();
        names.insert(static_dir.to_owned());
        names.extend(extra);
        Self { names }
    }

    /// Check a single name or relative path for membership.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Check a relative path against the set.
    ///
    /// Matches on every accumulated sub-path and every bare segment, so
    /// excluding `secrets` hides `secrets/x.md` at any depth and excluding
    /// `a/b` hides that one sub-tree only.
    #[must_use]
    pub fn matches_path(&self, rel_path: &str) -> bool {
        let mut accumulated = String::with_capacity(rel_path.len());
        for segment in rel_path.split('/') {
            if !accumulated.is_empty() {
                accumulated.push('/');
            }
            accumulated.push_str(segment);
            if self.contains(segment) || self.contains(&accumulated) {
                return true;
            }
        }
        false
    }

    /// Check a directory entry name, both raw and with `.md` stripped.
    ///
    /// Excluding either `README.md` or `README` hides the file.
    #[must_use]
    pub fn matches_entry(&self, name: &str) -> bool {
        self.contains(name) || self.contains(strip_md(name))
    }
}
