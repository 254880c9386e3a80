//! Bounded TTL cache with insertion-order eviction

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::cache::CacheEntry;

/// In-memory cache mapping resource keys to response payloads.
///
/// Holds at most `max_size` entries. When a new key is inserted at capacity,
/// the oldest-*inserted* entry is evicted; reads do not reorder keys, so the
/// policy is FIFO by insertion rather than access-recency LRU. Re-inserting
/// an existing key refreshes its value and timestamp and moves it to the
/// newest position.
///
/// Expiry is lazy: an expired entry is treated as absent and removed the
/// next time it is looked up. None of the operations can fail; absence is a
/// normal, silent outcome.
#[derive(Debug)]
pub struct ResponseCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Keys ordered oldest-inserted first
    order: VecDeque<String>,
    /// Maximum number of entries allowed
    max_size: usize,
    /// How long an entry stays visible after insertion
    ttl: Duration,
}

impl<V: Clone> ResponseCache<V> {
    /// Creates an empty cache with the given capacity and TTL.
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_size,
            ttl,
        }
    }

    /// Returns the cached value for `key` iff it is present and unexpired.
    ///
    /// As a side effect, removes the entry when it is found but expired.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = self.entries.get(key)?.is_expired(self.ttl);
        if expired {
            self.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// Overwriting an existing key relocates it to the newest position. When
    /// the cache is at capacity, the single oldest-inserted entry is evicted
    /// first.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        // A zero-capacity cache stores nothing.
        if self.max_size == 0 {
            return;
        }

        let key = key.into();
        if self.entries.contains_key(&key) {
            // Refresh the insertion-order position of the existing key.
            self.order.retain(|k| k != &key);
        } else if self.entries.len() >= self.max_size {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value));
        self.order.push_back(key);
    }

    /// Removes the entry for `key` if present; no-op otherwise.
    pub fn invalidate(&mut self, key: &str) {
        self.remove(key);
    }

    /// Empties the cache entirely.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of entries currently stored, expired ones included until their
    /// next lookup.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }
}
