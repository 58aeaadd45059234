use bgl_cache::CacheError;
use bgl_core::CoreError;
use thiserror::Error;

/// Construction-time failures.  Runtime failures are delivered to the
/// tracking listener as [`LocationError`][bgl_core::LocationError]s instead.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("tracker configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("region cache error: {0}")]
    Cache(#[from] CacheError),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
