//! Error types for the HTTP server.

/// Server startup/runtime error.
///
/// Per-request failures never reach this type; they collapse into the
/// rendered fallback page inside the handlers.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// I/O error binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
