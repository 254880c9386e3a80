//! In-memory cache for API responses
//!
//! This module provides a bounded response cache that sits between the forum
//! client and the network. Entries expire after a configurable TTL (checked
//! lazily on read, there is no background sweep) and the cache holds at most
//! a fixed number of entries, evicting the oldest-inserted one when full.

mod entry;
mod store;

pub use entry::CacheEntry;
pub use store::ResponseCache;
