//! Error types for the cache pool
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key contains a reserved character
    #[error("Invalid cache key: {0:?}")]
    InvalidKey(String),
}

impl CacheError {
    /// Returns the offending key.
    pub fn key(&self) -> &str {
        match self {
            CacheError::InvalidKey(key) => key,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache pool.
pub type Result<T> = std::result::Result<T, CacheError>;
