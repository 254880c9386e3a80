//! Individual cache entries with insertion timestamps

use std::time::{Duration, Instant};

/// A single cached response together with the moment it was stored.
///
/// Entries are owned exclusively by the cache; callers receive a clone of
/// the value, never the entry itself.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached payload
    pub value: V,
    /// When the entry was inserted
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Creates an entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    /// Returns true once the entry's age has reached the TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is
    /// already expired, so a zero TTL means nothing is ever visible.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_fresh_entry_is_not_expired() {
        let entry = CacheEntry::new("payload");
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let entry = CacheEntry::new("payload");
        sleep(Duration::from_millis(30));
        assert!(entry.is_expired(Duration::from_millis(20)));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let entry = CacheEntry::new("payload");
        assert!(entry.is_expired(Duration::ZERO));
    }
}
