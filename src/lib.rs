//! Memory Pool - An in-process cache item pool
//!
//! Provides key-indexed cache entries with TTL expiration, batch retrieval,
//! and deferred saves that become visible on commit.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheEntry, CacheItem, CacheItemPool, CacheStats, MemoryPool, Ttl};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::{spawn_cleanup_task, spawn_cleanup_task_from_config};
