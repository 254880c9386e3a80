//! Client configuration
//!
//! Timeouts, retry policy, cache sizing, and the input limits applied before
//! any network traffic. Defaults match the backend's development setup.

use std::time::Duration;

/// Minimum length of a thread title
pub const MIN_THREAD_TITLE_LEN: usize = 1;

/// Maximum length of a thread title
pub const MAX_THREAD_TITLE_LEN: usize = 200;

/// Minimum length of a post body
pub const MIN_POST_LEN: usize = 1;

/// Maximum length of a post body
pub const MAX_POST_LEN: usize = 10_000;

/// Settings for the in-memory response cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Whether responses are cached at all
    pub enabled: bool,
    /// How long a cached response stays visible
    pub ttl: Duration,
    /// Maximum number of cached responses
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: Duration::from_secs(300), // 5 minutes
            max_size: 100,
        }
    }
}

/// Settings for the forum client and its request layer
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the forum backend, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Total number of attempts per logical request (first try included)
    pub retry_attempts: u32,
    /// Base delay between attempts; grows linearly with the attempt number
    pub retry_delay: Duration,
    /// Response cache settings
    pub cache: CacheConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8088".to_string(),
            timeout: Duration::from_secs(10),
            retry_attempts: 3,
            retry_delay: Duration::from_secs(1),
            cache: CacheConfig::default(),
        }
    }
}
