/// Twitter search client (RapidAPI provider)
///
/// Endpoint: GET /v2/search?query=$SYMBOL&type=Top
/// Authentication is the standard RapidAPI header pair.
pub mod types;

pub use self::types::{SearchResponse, TimelinePost};

use crate::apis::client::RateLimiter;
use crate::apis::stats::{ApiStats, ApiStatsTracker};
use crate::logger::{self, LogTag};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};

// ============================================================================
// API CONFIGURATION
// ============================================================================

const RAPIDAPI_HOST: &str = "twitter-api47.p.rapidapi.com";
const SEARCH_URL: &str = "https://twitter-api47.p.rapidapi.com/v2/search";

/// Request timeout in seconds
pub const TIMEOUT_SECS: u64 = 10;

/// Rate limit per minute - conservative for the free RapidAPI tier
pub const RATE_LIMIT_PER_MINUTE: usize = 30;

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

/// Twitter search client with rate limiting and stats tracking
pub struct TwitterSearchClient {
    client: Client,
    rate_limiter: RateLimiter,
    stats: Arc<ApiStatsTracker>,
    timeout: Duration,
    api_key: String,
    enabled: bool,
}

impl TwitterSearchClient {
    pub fn new(
        enabled: bool,
        rate_limit: usize,
        timeout_seconds: u64,
        api_key: String,
    ) -> Result<Self, String> {
        if timeout_seconds == 0 {
            return Err("Timeout must be greater than zero".to_string());
        }

        Ok(Self {
            client: Client::new(),
            rate_limiter: RateLimiter::new(rate_limit),
            stats: Arc::new(ApiStatsTracker::new()),
            timeout: Duration::from_secs(timeout_seconds),
            api_key,
            enabled,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.stats.get_stats().await
    }

    /// Search recent posts mentioning the token symbol (as a `$SYMBOL` cashtag)
    pub async fn search_posts(&self, symbol: &str) -> Result<Vec<TimelinePost>, String> {
        if !self.enabled {
            return Err("Twitter client disabled via configuration".to_string());
        }
        if self.api_key.is_empty() {
            return Err("RapidAPI key not configured".to_string());
        }

        let query = format!("${}", symbol);

        logger::debug(
            LogTag::Api,
            &format!("[TWITTER] Searching posts: query={}", query),
        );

        let guard = self
            .rate_limiter
            .acquire()
            .await
            .map_err(|e| format!("Rate limiter error: {}", e))?;

        let start = Instant::now();
        let response_result = self
            .client
            .get(SEARCH_URL)
            .query(&[("query", query.as_str()), ("type", "Top")])
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .header("x-rapidapi-key", &self.api_key)
            .timeout(self.timeout)
            .send()
            .await;
        drop(guard);
        let elapsed = start.elapsed().as_millis() as f64;

        let response = match response_result {
            Ok(response) => response,
            Err(err) => {
                self.stats.record_request(false, elapsed).await;
                self.stats
                    .record_error_with_event(
                        "Twitter",
                        "v2/search",
                        format!("Request failed: {}", err),
                    )
                    .await;
                return Err(format!("Request failed: {}", err));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.stats.record_request(false, elapsed).await;
            self.stats
                .record_error_with_event("Twitter", "v2/search", format!("HTTP {}: {}", status, body))
                .await;
            return Err(format!("Twitter API error {}: {}", status, body));
        }

        match response.json::<SearchResponse>().await {
            Ok(search) => {
                self.stats.record_request(true, elapsed).await;
                Ok(search.timeline_posts())
            }
            Err(err) => {
                self.stats.record_request(false, elapsed).await;
                self.stats
                    .record_error_with_event("Twitter", "v2/search", format!("Parse error: {}", err))
                    .await;
                Err(format!("Failed to parse response: {}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(
            TwitterSearchClient::new(true, RATE_LIMIT_PER_MINUTE, 0, "key".to_string()).is_err()
        );
    }

    #[tokio::test]
    async fn test_missing_key_errors() {
        let client =
            TwitterSearchClient::new(true, RATE_LIMIT_PER_MINUTE, TIMEOUT_SECS, String::new())
                .unwrap();
        assert!(client.search_posts("SOL").await.is_err());
    }
}
