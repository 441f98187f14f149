//! Expired Entry Cleanup Task
//!
//! Background task that periodically purges expired entries from a pool.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryPool;
use crate::config::Config;

/// Shortest interval between cleanup runs, in seconds
pub const MIN_CLEANUP_INTERVAL_SECS: u64 = 1;

/// Converts a configured interval to a sleep duration, raising zero to the minimum.
fn cleanup_interval(secs: u64) -> Duration {
    Duration::from_secs(secs.max(MIN_CLEANUP_INTERVAL_SECS))
}

/// Spawns a background task that periodically purges expired pool entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between runs. Purging never changes what lookups observe; it only frees
/// entries that already read as misses.
///
/// # Arguments
/// * `pool` - Shared reference to the pool
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs,
///   raised to [`MIN_CLEANUP_INTERVAL_SECS`] if smaller
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort it.
///
/// # Example
/// ```ignore
/// let pool = Arc::new(MemoryPool::<String>::new());
/// let cleanup_handle = spawn_cleanup_task(pool.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(
    pool: Arc<MemoryPool<V>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = cleanup_interval(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = pool.purge_expired();

            if removed > 0 {
                info!("Cleanup: purged {} expired entries", removed);
            } else {
                debug!("Cleanup: no expired entries found");
            }
        }
    })
}

/// Spawns the cleanup task using the interval from `config`.
pub fn spawn_cleanup_task_from_config<V>(
    pool: Arc<MemoryPool<V>>,
    config: &Config,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    spawn_cleanup_task(pool, config.cleanup_interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheItem, CacheItemPool};
    use chrono::TimeDelta;

    #[tokio::test]
    async fn test_cleanup_task_purges_expired_entries() {
        let pool = Arc::new(MemoryPool::new());

        let mut item = pool.get_item("expire_soon").unwrap();
        item.set("value".to_string())
            .expires_after(TimeDelta::milliseconds(200));
        pool.save(item);
        assert_eq!(pool.len(), 1);

        let handle = spawn_cleanup_task(pool.clone(), 1);

        // Wait for the entry to expire and cleanup to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(pool.is_empty(), "Expired entry should have been purged");
        assert_eq!(pool.stats().purged, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_live_entries() {
        let pool = Arc::new(MemoryPool::new());

        let mut item = pool.get_item("long_lived").unwrap();
        item.set("value".to_string()).expires_after(3600);
        pool.save(item);

        let handle = spawn_cleanup_task(pool.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(pool.has_item("long_lived").unwrap());
        let item = pool.get_item("long_lived").unwrap();
        assert_eq!(item.get().map(String::as_str), Some("value"));

        handle.abort();
    }

    #[test]
    fn test_cleanup_interval_has_floor() {
        assert_eq!(cleanup_interval(0), Duration::from_secs(1));
        assert_eq!(cleanup_interval(1), Duration::from_secs(1));
        assert_eq!(cleanup_interval(30), Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_cleanup_task_from_config_with_zero_interval() {
        let pool = Arc::new(MemoryPool::new());

        let mut item = pool.get_item("expire_soon").unwrap();
        item.set(1).expires_after(TimeDelta::milliseconds(200));
        pool.save(item);

        let config = Config {
            cleanup_interval: 0,
            ..Config::default()
        };
        let handle = spawn_cleanup_task_from_config(pool.clone(), &config);

        // A zero interval runs once per second rather than spinning
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(pool.stats().purged, 0);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(pool.is_empty(), "Expired entry should have been purged");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let pool: Arc<MemoryPool<String>> = Arc::new(MemoryPool::new());

        let handle = spawn_cleanup_task(pool, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
