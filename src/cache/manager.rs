/// Generic in-memory cache with TTL and LRU eviction
///
/// Thread-safe, generic over key/value types. Expiry is lazy: entries are
/// only dropped when a read finds them past the TTL, never by a background
/// sweep. The current time is an argument to `get` and `insert`, not read
/// from the system clock.

use super::config::CacheConfig;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Cache entry with TTL tracking
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V, now: Instant) -> Self {
        Self {
            value,
            inserted_at: now,
        }
    }

    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) >= ttl
    }
}

/// Cache metrics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub inserts: u64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Generic cache manager
pub struct CacheManager<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    config: CacheConfig,
    data: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    access_order: Arc<RwLock<VecDeque<K>>>, // For LRU tracking
    metrics: Arc<RwLock<CacheMetrics>>,
}

impl<K, V> CacheManager<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    /// Create new cache with given configuration
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            data: Arc::new(RwLock::new(HashMap::new())),
            access_order: Arc::new(RwLock::new(VecDeque::new())),
            metrics: Arc::new(RwLock::new(CacheMetrics::default())),
        }
    }

    /// Get value from cache as of `now` (returns None if expired or missing)
    pub fn get(&self, key: &K, now: Instant) -> Option<V> {
        let mut data = self.data.write().unwrap();

        if let Some(entry) = data.get(key) {
            if entry.is_expired(self.config.ttl, now) {
                data.remove(key);
                self.remove_from_access_order(key);

                let mut metrics = self.metrics.write().unwrap();
                metrics.misses += 1;
                metrics.expirations += 1;

                return None;
            }

            let value = entry.value.clone();
            self.update_access_order(key);

            let mut metrics = self.metrics.write().unwrap();
            metrics.hits += 1;

            Some(value)
        } else {
            let mut metrics = self.metrics.write().unwrap();
            metrics.misses += 1;
            None
        }
    }

    /// Insert value into cache stamped with `now` (evicts LRU if at capacity)
    pub fn insert(&self, key: K, value: V, now: Instant) {
        let mut data = self.data.write().unwrap();

        if data.len() >= self.config.capacity && !data.contains_key(&key) {
            self.evict_lru(&mut data);
        }

        data.insert(key.clone(), CacheEntry::new(value, now));
        self.update_access_order(&key);

        let mut metrics = self.metrics.write().unwrap();
        metrics.inserts += 1;
    }

    /// Remove specific key from cache
    pub fn remove(&self, key: &K) {
        let mut data = self.data.write().unwrap();
        data.remove(key);
        self.remove_from_access_order(key);
    }

    /// Clear all entries
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.clear();

        let mut access_order = self.access_order.write().unwrap();
        access_order.clear();
    }

    /// Get current metrics
    pub fn metrics(&self) -> CacheMetrics {
        self.metrics.read().unwrap().clone()
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.data.read().unwrap().len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Private: Evict least recently used entry
    fn evict_lru(&self, data: &mut HashMap<K, CacheEntry<V>>) {
        let mut access_order = self.access_order.write().unwrap();

        if let Some(lru_key) = access_order.pop_front() {
            data.remove(&lru_key);

            let mut metrics = self.metrics.write().unwrap();
            metrics.evictions += 1;
        }
    }

    // Private: Update access order for LRU tracking
    fn update_access_order(&self, key: &K) {
        let mut access_order = self.access_order.write().unwrap();

        // Remove from current position
        access_order.retain(|k| k != key);

        // Add to back (most recently used)
        access_order.push_back(key.clone());
    }

    // Private: Remove key from access order
    fn remove_from_access_order(&self, key: &K) {
        let mut access_order = self.access_order.write().unwrap();
        access_order.retain(|k| k != key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let config = CacheConfig::custom(60, 100);
        let cache = CacheManager::new(config);
        let now = Instant::now();

        // Insert and get
        cache.insert("key1".to_string(), "value1".to_string(), now);
        assert_eq!(cache.get(&"key1".to_string(), now), Some("value1".to_string()));

        // Miss
        assert_eq!(cache.get(&"nonexistent".to_string(), now), None);

        // Metrics
        let metrics = cache.metrics();
        assert_eq!(metrics.hits, 1);
        assert_eq!(metrics.misses, 1);
    }

    #[test]
    fn test_ttl_expiration() {
        let config = CacheConfig::custom(60, 100);
        let cache = CacheManager::new(config);
        let start = Instant::now();

        cache.insert("key".to_string(), "value".to_string(), start);

        // Just under the TTL: still served
        let almost = start + Duration::from_secs(59);
        assert_eq!(cache.get(&"key".to_string(), almost), Some("value".to_string()));

        // Past the TTL: lazily dropped on read
        let later = start + Duration::from_secs(61);
        assert_eq!(cache.get(&"key".to_string(), later), None);
        assert_eq!(cache.metrics().expirations, 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lru_eviction() {
        let config = CacheConfig::custom(60, 2); // Capacity of 2
        let cache = CacheManager::new(config);
        let now = Instant::now();

        cache.insert("key1".to_string(), "value1".to_string(), now);
        cache.insert("key2".to_string(), "value2".to_string(), now);
        cache.insert("key3".to_string(), "value3".to_string(), now); // Should evict key1

        assert_eq!(cache.get(&"key1".to_string(), now), None); // Evicted
        assert_eq!(cache.get(&"key2".to_string(), now), Some("value2".to_string()));
        assert_eq!(cache.get(&"key3".to_string(), now), Some("value3".to_string()));
    }

    #[test]
    fn test_overwrite_resets_age() {
        let config = CacheConfig::custom(60, 100);
        let cache = CacheManager::new(config);
        let start = Instant::now();

        cache.insert("key".to_string(), "old".to_string(), start);

        // Re-insert later with a fresh timestamp
        let mid = start + Duration::from_secs(50);
        cache.insert("key".to_string(), "new".to_string(), mid);

        // 70s after the first insert, 20s after the second: still valid
        let later = start + Duration::from_secs(70);
        assert_eq!(cache.get(&"key".to_string(), later), Some("new".to_string()));
    }
}
