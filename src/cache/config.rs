/// Cache configuration per entity type
///
/// TTLs tuned per use case: the social feed refreshes every 5 minutes
/// upstream, so holding entries longer only serves stale sentiment.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live for cached entries
    pub ttl: Duration,

    /// Maximum number of entries (LRU eviction when exceeded)
    pub capacity: usize,
}

impl CacheConfig {
    /// Social feed results, keyed by (symbol, limit)
    pub fn social_feed() -> Self {
        Self {
            ttl: Duration::from_secs(300), // 5 minutes
            capacity: 1000,
        }
    }

    /// Custom configuration
    pub fn custom(ttl_secs: u64, capacity: usize) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
            capacity,
        }
    }
}
