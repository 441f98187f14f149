//! Cache Entry Module
//!
//! Defines individual cache entries with hit tracking and expiration.

use chrono::{DateTime, TimeDelta, Utc};

use crate::cache::CacheItem;

// == Time To Live ==
/// Relative lifetime accepted by [`CacheItem::expires_after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Whole seconds from now; zero or negative values expire immediately
    Seconds(i64),
    /// Arbitrary duration from now
    Duration(TimeDelta),
    /// No expiration
    Never,
}

impl Ttl {
    /// Resolves the lifetime to an absolute instant relative to `now`.
    ///
    /// Lifetimes past the end of the representable range never expire;
    /// lifetimes before its start clamp to the earliest instant.
    pub fn deadline_from(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let delta = match self {
            Ttl::Seconds(secs) => TimeDelta::try_seconds(secs).unwrap_or(if secs < 0 {
                TimeDelta::MIN
            } else {
                TimeDelta::MAX
            }),
            Ttl::Duration(delta) => delta,
            Ttl::Never => return None,
        };

        match now.checked_add_signed(delta) {
            Some(deadline) => Some(deadline),
            None if delta < TimeDelta::zero() => Some(DateTime::<Utc>::MIN_UTC),
            None => None,
        }
    }
}

impl From<i64> for Ttl {
    fn from(secs: i64) -> Self {
        Ttl::Seconds(secs)
    }
}

impl From<i32> for Ttl {
    fn from(secs: i32) -> Self {
        Ttl::Seconds(i64::from(secs))
    }
}

impl From<u32> for Ttl {
    fn from(secs: u32) -> Self {
        Ttl::Seconds(i64::from(secs))
    }
}

impl From<u64> for Ttl {
    fn from(secs: u64) -> Self {
        i64::try_from(secs).map_or(Ttl::Never, Ttl::Seconds)
    }
}

impl From<TimeDelta> for Ttl {
    fn from(delta: TimeDelta) -> Self {
        Ttl::Duration(delta)
    }
}

impl From<std::time::Duration> for Ttl {
    fn from(duration: std::time::Duration) -> Self {
        TimeDelta::from_std(duration).map_or(Ttl::Never, Ttl::Duration)
    }
}

impl<T: Into<Ttl>> From<Option<T>> for Ttl {
    fn from(ttl: Option<T>) -> Self {
        ttl.map_or(Ttl::Never, Into::into)
    }
}

// == Cache Entry ==
/// A single cache slot holding an optional value and expiration.
///
/// An entry is a hit once a value has been set, until its expiration passes.
/// Cloning an entry clones the value, so a copy handed out by a pool is
/// independent of the stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// Key, fixed at construction
    key: String,
    /// Stored value, present once set
    value: Option<V>,
    /// Absolute expiration instant, None = no expiration
    expiration: Option<DateTime<Utc>>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a blank entry (a miss) for `key`.
    ///
    /// The key is not validated here; pools validate keys on lookup.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            expiration: None,
        }
    }

    /// Returns the expiration instant, if any.
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        self.expiration
    }

    // == Is Expired ==
    /// Whether an expiration is set and has been reached.
    ///
    /// An entry expiring exactly now is already expired.
    pub fn is_expired(&self) -> bool {
        self.expiration.is_some_and(|expires| Utc::now() >= expires)
    }

    // == Time To Live ==
    /// Returns the time left before expiration, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(TimeDelta::zero())` if the expiration has passed
    /// - `Some(remaining)` if the entry expires in the future
    /// - `None` if the entry never expires
    pub fn ttl_remaining(&self) -> Option<TimeDelta> {
        self.expiration
            .map(|expires| (expires - Utc::now()).max(TimeDelta::zero()))
    }

    /// Consumes the entry, returning the value if it is a hit.
    pub fn into_value(self) -> Option<V> {
        if self.is_expired() {
            None
        } else {
            self.value
        }
    }
}

impl<V> CacheItem for CacheEntry<V> {
    type Value = V;

    fn key(&self) -> &str {
        &self.key
    }

    fn get(&self) -> Option<&V> {
        if self.is_hit() {
            self.value.as_ref()
        } else {
            None
        }
    }

    fn is_hit(&self) -> bool {
        self.value.is_some() && !self.is_expired()
    }

    fn set(&mut self, value: V) -> &mut Self {
        self.value = Some(value);
        self
    }

    fn expires_at(&mut self, expiration: Option<DateTime<Utc>>) -> &mut Self {
        self.expiration = expiration;
        self
    }

    fn expires_after<T: Into<Ttl>>(&mut self, ttl: T) -> &mut Self {
        self.expiration = ttl.into().deadline_from(Utc::now());
        self
    }
}
