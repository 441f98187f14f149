//! Cache Contract Module
//!
//! The capability interfaces host code programs against: one for a single
//! cache slot and one for the pool that stores slots.

use chrono::{DateTime, Utc};

use crate::cache::Ttl;
use crate::error::Result;

/// Keyed entries returned by a batch lookup, in first-requested order.
pub type ItemBatch<I> = Vec<(String, I)>;

// == Cache Item ==
/// A single cache slot: a key, an optional value and an optional expiration.
pub trait CacheItem {
    /// Type of the cached value
    type Value;

    /// Returns the key this item was created for.
    fn key(&self) -> &str;

    /// Returns the value if the item is a hit, `None` otherwise.
    fn get(&self) -> Option<&Self::Value>;

    /// Whether the item holds a value that has not expired.
    ///
    /// Evaluated against the wall clock on every call.
    fn is_hit(&self) -> bool;

    /// Stores a value and marks the item as a hit.
    ///
    /// Leaves the expiration untouched.
    fn set(&mut self, value: Self::Value) -> &mut Self;

    /// Sets an absolute expiration instant, or clears it with `None`.
    fn expires_at(&mut self, expiration: Option<DateTime<Utc>>) -> &mut Self;

    /// Sets the expiration relative to now.
    ///
    /// Accepts whole seconds, a duration, or [`Ttl::Never`] to clear it.
    fn expires_after<T: Into<Ttl>>(&mut self, ttl: T) -> &mut Self;
}

// == Cache Item Pool ==
/// Key-indexed storage for cache items.
///
/// Every operation that accepts keys validates all of them before touching
/// storage and fails with [`CacheError::InvalidKey`](crate::CacheError::InvalidKey)
/// without side effects if any is rejected.
pub trait CacheItemPool {
    /// Item type handed out and accepted by the pool
    type Item: CacheItem;

    /// Returns a copy of the stored item for `key`, or a blank item if there
    /// is no live entry.
    fn get_item(&self, key: &str) -> Result<Self::Item>;

    /// Looks up every key, preserving the order of first occurrence.
    ///
    /// Duplicate keys collapse to a single entry.
    fn get_items(&self, keys: &[&str]) -> Result<ItemBatch<Self::Item>>;

    /// Whether a live (stored and unexpired) entry exists for `key`.
    fn has_item(&self, key: &str) -> Result<bool>;

    /// Removes every stored and deferred item.
    fn clear(&self) -> bool;

    /// Removes the stored item for `key`, if any.
    fn delete_item(&self, key: &str) -> Result<bool> {
        self.delete_items(&[key])
    }

    /// Removes the stored items for all `keys`. Missing keys are ignored.
    fn delete_items(&self, keys: &[&str]) -> Result<bool>;

    /// Stores an item immediately, replacing any previous item for its key.
    fn save(&self, item: Self::Item) -> bool;

    /// Stages an item for the next [`commit`](CacheItemPool::commit).
    fn save_deferred(&self, item: Self::Item) -> bool;

    /// Moves every staged item into the store.
    fn commit(&self) -> bool;
}
