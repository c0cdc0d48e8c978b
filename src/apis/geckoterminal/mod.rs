/// GeckoTerminal API client
///
/// API Documentation: https://www.geckoterminal.com/dex-api
///
/// Endpoints implemented:
/// 1. /networks/{network}/tokens/{token}/pools - All pools for a token (primary)
/// 2. /networks/{network}/trending_pools - Trending pools per network
pub mod types;

pub use self::types::{PoolRecord, PoolsResponse};

use crate::apis::client::RateLimiter;
use crate::apis::stats::{ApiStats, ApiStatsTracker};
use crate::logger::{self, LogTag};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};

// ============================================================================
// API CONFIGURATION
// ============================================================================

const GECKOTERMINAL_BASE_URL: &str = "https://api.geckoterminal.com/api/v2";

/// User agent sent with every pool request
const USER_AGENT: &str = "BelocityTrendingAnalyzer/1.0";

/// Maximum page number for trending pools pagination
const MAX_TRENDING_PAGE: u32 = 10;

/// Request timeout in seconds - GeckoTerminal can have latency spikes, 10s is safe
pub const TIMEOUT_SECS: u64 = 10;

/// Rate limit per minute - GeckoTerminal has strict limits, 30/min is safe
pub const RATE_LIMIT_PER_MINUTE: usize = 30;

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

/// GeckoTerminal API client with rate limiting and stats tracking
pub struct GeckoTerminalClient {
    client: Client,
    rate_limiter: RateLimiter,
    stats: Arc<ApiStatsTracker>,
    timeout: Duration,
    enabled: bool,
}

impl GeckoTerminalClient {
    pub fn new(enabled: bool, rate_limit: usize, timeout_seconds: u64) -> Result<Self, String> {
        if timeout_seconds == 0 {
            return Err("Timeout must be greater than zero".to_string());
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(rate_limit),
            stats: Arc::new(ApiStatsTracker::new()),
            timeout: Duration::from_secs(timeout_seconds),
            enabled,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.stats.get_stats().await
    }

    fn ensure_enabled(&self, endpoint: &str) -> Result<(), String> {
        if self.enabled {
            Ok(())
        } else {
            Err(format!(
                "GeckoTerminal client disabled via configuration (endpoint={})",
                endpoint
            ))
        }
    }

    async fn execute_request(
        &self,
        endpoint: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<(reqwest::Response, f64), String> {
        self.ensure_enabled(endpoint)?;

        let guard = self
            .rate_limiter
            .acquire()
            .await
            .map_err(|e| format!("Rate limiter error: {}", e))?;

        let start = Instant::now();
        let response_result = builder.timeout(self.timeout).send().await;
        drop(guard);
        let elapsed = start.elapsed().as_millis() as f64;

        match response_result {
            Ok(response) => Ok((response, elapsed)),
            Err(err) => {
                self.stats.record_request(false, elapsed).await;
                self.stats
                    .record_error_with_event(
                        "GeckoTerminal",
                        endpoint,
                        format!("Request failed: {}", err),
                    )
                    .await;
                Err(format!("Request failed: {}", err))
            }
        }
    }

    async fn get_json<T>(
        &self,
        endpoint: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, String>
    where
        T: DeserializeOwned,
    {
        let (response, elapsed) = self.execute_request(endpoint, builder).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.stats.record_request(false, elapsed).await;
            self.stats
                .record_error_with_event(
                    "GeckoTerminal",
                    endpoint,
                    format!("HTTP {}: {}", status, body),
                )
                .await;
            return Err(format!("GeckoTerminal API error {}: {}", status, body));
        }

        match response.json::<T>().await {
            Ok(value) => {
                self.stats.record_request(true, elapsed).await;
                Ok(value)
            }
            Err(err) => {
                self.stats.record_request(false, elapsed).await;
                self.stats
                    .record_error_with_event(
                        "GeckoTerminal",
                        endpoint,
                        format!("Parse error: {}", err),
                    )
                    .await;
                Err(format!("Failed to parse response: {}", err))
            }
        }
    }

    /// Fetch every pool pairing the token on the given network
    ///
    /// Upstream ordering is preserved. One outbound request per call,
    /// no retry, no backoff.
    pub async fn fetch_token_pools(
        &self,
        network: &str,
        token_address: &str,
    ) -> Result<Vec<PoolRecord>, String> {
        let endpoint = format!("networks/{}/tokens/{}/pools", network, token_address);
        let url = format!("{}/{}", GECKOTERMINAL_BASE_URL, endpoint);

        logger::debug(
            LogTag::Api,
            &format!(
                "[GECKOTERMINAL] Fetching pools: token={}, network={}",
                token_address, network
            ),
        );

        let api_response: PoolsResponse = self.get_json(&endpoint, self.client.get(&url)).await?;

        Ok(api_response
            .data
            .iter()
            .map(|p| p.to_pool(network))
            .collect())
    }

    /// Fetch trending pools for a network
    pub async fn fetch_trending_pools(
        &self,
        network: &str,
        page: Option<u32>,
    ) -> Result<Vec<PoolRecord>, String> {
        let endpoint = format!("networks/{}/trending_pools", network);
        let url = format!("{}/{}", GECKOTERMINAL_BASE_URL, endpoint);

        let mut query_params: Vec<(String, String)> = Vec::new();
        if let Some(p) = page {
            query_params.push(("page".to_string(), p.min(MAX_TRENDING_PAGE).to_string()));
        }

        let builder = if query_params.is_empty() {
            self.client.get(&url)
        } else {
            self.client.get(&url).query(&query_params)
        };

        logger::debug(
            LogTag::Api,
            &format!(
                "[GECKOTERMINAL] Fetching trending pools: network={}, page={:?}",
                network, page
            ),
        );

        let api_response: PoolsResponse = self.get_json(&endpoint, builder).await?;

        Ok(api_response
            .data
            .iter()
            .map(|p| p.to_pool(network))
            .collect())
    }
}
