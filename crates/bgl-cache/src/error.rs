//! Error types for bgl-cache.

use thiserror::Error;

/// Errors raised by cache backends.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, CacheError>`.
pub type CacheResult<T> = Result<T, CacheError>;
