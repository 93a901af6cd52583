//! Error types for the docsearch crate.
//!
//! All errors carry stable string messages suitable for logging and for the
//! generic error page. Search terms never appear in error messages.

/// Errors that can occur while loading indices or serving a search page.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid service configuration.
    #[error("config error: {0}")]
    Config(String),

    /// An index file could not be loaded or parsed.
    #[error("index error: {0}")]
    Index(String),

    /// A search provider failed to answer a query.
    #[error("provider error: {0}")]
    Provider(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for docsearch results.
pub type Result<T> = std::result::Result<T, SearchError>;
