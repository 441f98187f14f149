//! Memory Pool Module
//!
//! In-memory cache pool with a live store and a deferred store that is merged
//! into it on commit.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::stats::StatsRecorder;
use crate::cache::{
    validate_key, validate_keys, CacheEntry, CacheItem, CacheItemPool, CacheStats, ItemBatch,
};
use crate::config::Config;
use crate::error::Result;

// == Pool State ==
#[derive(Debug)]
struct PoolState<V> {
    /// Live entries, visible to lookups
    store: HashMap<String, CacheEntry<V>>,
    /// Entries staged by deferred saves
    pending: HashMap<String, CacheEntry<V>>,
}

// == Memory Pool ==
/// Thread-safe in-memory cache pool.
///
/// Lookups hand out clones of stored entries; changes only reach the pool
/// through [`save`](CacheItemPool::save) or
/// [`save_deferred`](CacheItemPool::save_deferred) followed by
/// [`commit`](CacheItemPool::commit).
#[derive(Debug)]
pub struct MemoryPool<V> {
    state: RwLock<PoolState<V>>,
    stats: StatsRecorder,
}

impl<V: Clone> MemoryPool<V> {
    // == Constructor ==
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty pool with room for `capacity` stored entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: RwLock::new(PoolState {
                store: HashMap::with_capacity(capacity),
                pending: HashMap::new(),
            }),
            stats: StatsRecorder::default(),
        }
    }

    /// Creates an empty pool sized from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    // == Length ==
    /// Returns the number of entries physically held in the live store.
    ///
    /// Expired entries count until they are purged, deleted or overwritten.
    pub fn len(&self) -> usize {
        self.state.read().store.len()
    }

    /// Returns true if the live store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.state.read().store.is_empty()
    }

    /// Returns the number of entries awaiting commit.
    pub fn pending_len(&self) -> usize {
        self.state.read().pending.len()
    }

    // == Purge Expired ==
    /// Removes all stored entries that are no longer hits.
    ///
    /// Returns the number of entries removed. Deferred entries are left alone.
    pub fn purge_expired(&self) -> usize {
        let mut state = self.state.write();
        let before = state.store.len();
        state.store.retain(|_, entry| entry.is_hit());
        let removed = before - state.store.len();

        self.stats.record_purged(removed);
        if removed > 0 {
            debug!(removed, "purged expired entries");
        }
        removed
    }

    // == Stats ==
    /// Returns current pool statistics.
    pub fn stats(&self) -> CacheStats {
        let state = self.state.read();
        self.stats.snapshot(state.store.len(), state.pending.len())
    }

    /// Resolves a validated key against the live store.
    fn lookup(&self, state: &PoolState<V>, key: &str) -> CacheEntry<V> {
        match state.store.get(key) {
            Some(entry) if entry.is_hit() => {
                self.stats.record_hit();
                entry.clone()
            }
            _ => {
                self.stats.record_miss();
                CacheEntry::new(key)
            }
        }
    }
}

impl<V: Clone> Default for MemoryPool<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> CacheItemPool for MemoryPool<V> {
    type Item = CacheEntry<V>;

    fn get_item(&self, key: &str) -> Result<CacheEntry<V>> {
        validate_key(key)?;

        let state = self.state.read();
        Ok(self.lookup(&state, key))
    }

    fn get_items(&self, keys: &[&str]) -> Result<ItemBatch<CacheEntry<V>>> {
        validate_keys(keys)?;

        let state = self.state.read();
        let mut items: ItemBatch<CacheEntry<V>> = Vec::with_capacity(keys.len());
        let mut seen: HashSet<&str> = HashSet::with_capacity(keys.len());

        // Repeats resolve to the same entry within one snapshot
        for &key in keys {
            if seen.insert(key) {
                items.push((key.to_string(), self.lookup(&state, key)));
            }
        }

        Ok(items)
    }

    fn has_item(&self, key: &str) -> Result<bool> {
        validate_key(key)?;

        let state = self.state.read();
        Ok(state.store.get(key).is_some_and(|entry| entry.is_hit()))
    }

    fn clear(&self) -> bool {
        let mut state = self.state.write();
        state.store.clear();
        state.pending.clear();

        debug!("cleared pool");
        true
    }

    fn delete_items(&self, keys: &[&str]) -> Result<bool> {
        validate_keys(keys)?;

        let mut state = self.state.write();
        let removed = keys
            .iter()
            .filter(|key| state.store.remove(**key).is_some())
            .count();

        debug!(requested = keys.len(), removed, "deleted entries");
        Ok(true)
    }

    fn save(&self, item: CacheEntry<V>) -> bool {
        let mut state = self.state.write();
        state.store.insert(item.key().to_string(), item);
        true
    }

    fn save_deferred(&self, item: CacheEntry<V>) -> bool {
        let mut state = self.state.write();
        state.pending.insert(item.key().to_string(), item);
        true
    }

    fn commit(&self) -> bool {
        let mut state = self.state.write();
        let PoolState { store, pending } = &mut *state;
        let committed = pending.len();
        store.extend(pending.drain());

        self.stats.record_commit();
        debug!(committed, "committed deferred entries");
        true
    }
}
