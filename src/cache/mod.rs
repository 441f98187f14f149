//! Cache Module
//!
//! Provides cache entries with TTL expiration and a pool that stores them,
//! with batch lookups and deferred commits.

mod contract;
mod entry;
mod key;
mod pool;
mod stats;


// Re-export public types
pub use contract::{CacheItem, CacheItemPool, ItemBatch};
pub use entry::{CacheEntry, Ttl};
pub use key::{validate_key, validate_keys};
pub use pool::MemoryPool;
pub use stats::CacheStats;

// == Public Constants ==
/// Characters that may not appear anywhere in a cache key
pub const RESERVED_CHARACTERS: [char; 8] = ['{', '}', '(', ')', '/', '\\', '@', ':'];
