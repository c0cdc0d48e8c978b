/// Per-client API statistics tracking
///
/// Every client carries one tracker so request volume, failure rate and
/// latency are observable per upstream provider.
use serde::Serialize;
use tokio::sync::RwLock;

use crate::logger::{self, LogTag};

/// Snapshot of a client's request statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiStats {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub average_latency_ms: f64,
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
struct StatsInner {
    total_requests: u64,
    successful_requests: u64,
    failed_requests: u64,
    total_latency_ms: f64,
    last_error: Option<String>,
}

/// Thread-safe stats tracker shared by a single API client
#[derive(Debug, Default)]
pub struct ApiStatsTracker {
    inner: RwLock<StatsInner>,
}

impl ApiStatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request attempt
    pub async fn record_request(&self, success: bool, latency_ms: f64) {
        let mut inner = self.inner.write().await;
        inner.total_requests += 1;
        inner.total_latency_ms += latency_ms;
        if success {
            inner.successful_requests += 1;
        } else {
            inner.failed_requests += 1;
        }
    }

    /// Record an error event with its source endpoint
    pub async fn record_error_with_event(&self, api: &str, endpoint: &str, message: String) {
        logger::verbose(
            LogTag::Api,
            &format!("[{}] error on {}: {}", api, endpoint, message),
        );
        let mut inner = self.inner.write().await;
        inner.last_error = Some(message);
    }

    /// Get a snapshot of the current statistics
    pub async fn get_stats(&self) -> ApiStats {
        let inner = self.inner.read().await;
        let average_latency_ms = if inner.total_requests > 0 {
            inner.total_latency_ms / inner.total_requests as f64
        } else {
            0.0
        };

        ApiStats {
            total_requests: inner.total_requests,
            successful_requests: inner.successful_requests,
            failed_requests: inner.failed_requests,
            average_latency_ms,
            last_error: inner.last_error.clone(),
        }
    }
}
