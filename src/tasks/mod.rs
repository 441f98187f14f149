//! Background Tasks Module
//!
//! Contains background tasks that maintain a shared pool.
//!
//! # Tasks
//! - Cleanup: Purges expired entries at a configured interval

mod cleanup;

pub use cleanup::{
    spawn_cleanup_task, spawn_cleanup_task_from_config, MIN_CLEANUP_INTERVAL_SECS,
};
