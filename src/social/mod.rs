/// Social feed retrieval with sentiment classification and caching
///
/// Wraps the post search provider behind a (symbol, limit)-keyed TTL cache.
/// A cache hit returns the stored list unchanged; a miss performs exactly
/// one upstream fetch, classifies each post, truncates to the requested
/// limit and stores the result. Upstream failures degrade to an empty list
/// and are not cached, so the next request retries.

use crate::apis::twitter::{TimelinePost, TwitterSearchClient};
use crate::cache::{CacheConfig, CacheManager};
use crate::logger::{self, LogTag};
use crate::sentiment::{self, Sentiment};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One classified social post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub text: String,
    pub created_at: String,
    pub author_id: String,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
}

impl PostRecord {
    /// Classify a raw timeline post
    pub fn from_timeline(post: TimelinePost) -> Self {
        let (sentiment, sentiment_score) = sentiment::classify(&post.text);
        Self {
            id: post.id,
            text: post.text,
            created_at: post.created_at,
            author_id: post.author_id,
            sentiment,
            sentiment_score,
        }
    }
}

/// Upstream post search provider
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn search_posts(&self, symbol: &str) -> Result<Vec<TimelinePost>, String>;
}

#[async_trait]
impl PostSource for TwitterSearchClient {
    async fn search_posts(&self, symbol: &str) -> Result<Vec<TimelinePost>, String> {
        TwitterSearchClient::search_posts(self, symbol).await
    }
}

/// Cached social feed over a post source
pub struct SocialFeed<S: PostSource> {
    source: S,
    cache: CacheManager<(String, usize), Vec<PostRecord>>,
}

impl<S: PostSource> SocialFeed<S> {
    pub fn new(source: S, cache_config: CacheConfig) -> Self {
        Self {
            source,
            cache: CacheManager::new(cache_config),
        }
    }

    /// Fetch up to `limit` classified posts for a token symbol as of `now`.
    ///
    /// The cache key is the literal (symbol, limit) pair; different limits
    /// for the same symbol are independent entries.
    pub async fn posts(&self, symbol: &str, limit: usize, now: Instant) -> Vec<PostRecord> {
        let key = (symbol.to_string(), limit);

        if let Some(cached) = self.cache.get(&key, now) {
            logger::debug(
                LogTag::Social,
                &format!("Cache hit for (${}, {})", symbol, limit),
            );
            return cached;
        }

        logger::debug(
            LogTag::Social,
            &format!("Cache miss for (${}, {}), fetching", symbol, limit),
        );

        let fetched = match self.source.search_posts(symbol).await {
            Ok(posts) => posts,
            Err(e) => {
                logger::warning(
                    LogTag::Social,
                    &format!("Post search failed for ${}: {}", symbol, e),
                );
                return Vec::new();
            }
        };

        let mut records: Vec<PostRecord> = fetched
            .into_iter()
            .map(PostRecord::from_timeline)
            .collect();
        records.truncate(limit);

        let positive = records
            .iter()
            .filter(|r| r.sentiment == Sentiment::Positive)
            .count();
        let negative = records
            .iter()
            .filter(|r| r.sentiment == Sentiment::Negative)
            .count();
        logger::debug(
            LogTag::Sentiment,
            &format!(
                "Classified {} posts for ${}: {} positive, {} negative",
                records.len(),
                symbol,
                positive,
                negative
            ),
        );

        self.cache.insert(key, records.clone(), now);
        records
    }

    /// Access the underlying post source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Cache metrics for diagnostics
    pub fn cache_metrics(&self) -> crate::cache::CacheMetrics {
        self.cache.metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct StubSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubSource {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PostSource for StubSource {
        async fn search_posts(&self, _symbol: &str) -> Result<Vec<TimelinePost>, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err("HTTP 500".to_string());
            }
            Ok(vec![
                TimelinePost {
                    id: "1".to_string(),
                    text: "moon soon".to_string(),
                    created_at: String::new(),
                    author_id: "a".to_string(),
                },
                TimelinePost {
                    id: "2".to_string(),
                    text: "rug incoming".to_string(),
                    created_at: String::new(),
                    author_id: "b".to_string(),
                },
                TimelinePost {
                    id: "3".to_string(),
                    text: "nothing to see".to_string(),
                    created_at: String::new(),
                    author_id: "c".to_string(),
                },
            ])
        }
    }

    #[tokio::test]
    async fn test_hit_within_ttl_skips_fetch() {
        let feed = SocialFeed::new(StubSource::new(false), CacheConfig::custom(300, 100));
        let start = Instant::now();

        let first = feed.posts("SOL", 50, start).await;
        assert_eq!(first.len(), 3);
        assert_eq!(feed.source.call_count(), 1);

        // Second call inside the TTL window: served from cache
        let second = feed.posts("SOL", 50, start + Duration::from_secs(200)).await;
        assert_eq!(feed.source.call_count(), 1);
        assert_eq!(second.len(), first.len());
        assert_eq!(second[0].id, first[0].id);
    }

    #[tokio::test]
    async fn test_expired_entry_refetches() {
        let feed = SocialFeed::new(StubSource::new(false), CacheConfig::custom(300, 100));
        let start = Instant::now();

        feed.posts("SOL", 50, start).await;
        feed.posts("SOL", 50, start + Duration::from_secs(301)).await;
        assert_eq!(feed.source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_limits_are_independent_keys() {
        let feed = SocialFeed::new(StubSource::new(false), CacheConfig::custom(300, 100));
        let now = Instant::now();

        let two = feed.posts("SOL", 2, now).await;
        let fifty = feed.posts("SOL", 50, now).await;
        assert_eq!(two.len(), 2);
        assert_eq!(fifty.len(), 3);
        assert_eq!(feed.source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_and_is_not_cached() {
        let feed = SocialFeed::new(StubSource::new(true), CacheConfig::custom(300, 100));
        let now = Instant::now();

        assert!(feed.posts("SOL", 50, now).await.is_empty());
        assert!(feed.posts("SOL", 50, now).await.is_empty());
        // Failures are retried, not served from cache
        assert_eq!(feed.source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_posts_are_classified() {
        let feed = SocialFeed::new(StubSource::new(false), CacheConfig::custom(300, 100));
        let posts = feed.posts("SOL", 50, Instant::now()).await;

        assert_eq!(posts[0].sentiment, Sentiment::Positive);
        assert_eq!(posts[1].sentiment, Sentiment::Negative);
        assert_eq!(posts[2].sentiment, Sentiment::Neutral);
    }
}
