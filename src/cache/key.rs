//! Key Validation Module
//!
//! Rejects keys containing reserved characters.

use tracing::debug;

use crate::cache::RESERVED_CHARACTERS;
use crate::error::{CacheError, Result};

// == Validate Key ==
/// Checks that `key` contains none of the [`RESERVED_CHARACTERS`].
///
/// The empty key is accepted.
pub fn validate_key(key: &str) -> Result<()> {
    if key.chars().any(|c| RESERVED_CHARACTERS.contains(&c)) {
        debug!(key, "rejected cache key");
        return Err(CacheError::InvalidKey(key.to_string()));
    }

    Ok(())
}

// == Validate Keys ==
/// Checks every key in a batch, failing on the first invalid one.
pub fn validate_keys(keys: &[&str]) -> Result<()> {
    keys.iter().try_for_each(|key| validate_key(key))
}
