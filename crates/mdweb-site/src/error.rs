//! Error types for page resolution and rendering.

use std::path::PathBuf;

/// Error returned when a request path cannot be turned into a page.
///
/// All variants collapse into the same user-visible outcome (a not-found
/// fallback page); the distinction exists for logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Resolved path does not end in `.md`.
    #[error("Not a markdown file: {}", .0.display())]
    NotMarkdown(PathBuf),

    /// Source file could not be opened or read.
    #[error("I/O error: {0}")]
    Read(#[source] std::io::Error),

    /// A segment or sub-path of the resolved path is in the exclusion set.
    #[error("Excluded path: {0}")]
    Excluded(String),

    /// The sibling-listing directory could not be enumerated.
    #[error("Directory listing failed: {0}")]
    DirectoryRead(#[source] std::io::Error),
}
