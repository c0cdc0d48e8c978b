/// Scoring data model
use serde::{Deserialize, Serialize};

use crate::apis::geckoterminal::PoolRecord;
use crate::social::PostRecord;

/// Sentiment roll-up over one batch of classified posts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total_posts: usize,
    pub positive_posts: usize,
    pub negative_posts: usize,
    pub neutral_posts: usize,
    /// Arithmetic mean of per-post scores, 0 when there are no posts
    pub sentiment_score: f64,
    /// Up to 5 posts, most positive first
    pub top_positive_posts: Vec<PostRecord>,
    /// Up to 5 posts, most negative first
    pub top_negative_posts: Vec<PostRecord>,
}

/// Per-token totals and liquidity-weighted averages across all pools,
/// with the sentiment summary folded in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    pub token_address: String,
    pub network: String,
    pub token_symbol: String,
    pub token_name: String,
    pub total_pools: usize,
    pub total_volume_24h: f64,
    pub total_volume_1h: f64,
    pub total_volume_6h: f64,
    pub total_liquidity: f64,
    pub total_market_cap: f64,
    pub total_fdv: f64,
    pub total_transactions_24h: i64,
    pub total_transactions_1h: i64,
    pub total_unique_transactions_24h: i64,
    pub weighted_avg_price_usd: f64,
    pub weighted_avg_price_change_24h: f64,
    pub weighted_avg_price_change_1h: f64,
    pub weighted_avg_price_change_6h: f64,
    pub sentiment: SentimentSummary,
    pub pools: Vec<PoolRecord>,
}

/// One named sub-score of the belief score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub name: String,
    pub score: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// One projected trajectory point ("D1".."D7")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub day: String,
    pub score: f64,
}

/// Final engine output, recomputed in full on every request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeliefScoreResult {
    pub token_address: String,
    pub network: String,
    pub token_symbol: String,
    pub token_name: String,
    pub overall_belief_score: f64,
    pub score_components: Vec<ScoreComponent>,
    pub predicted_score_trajectory: Vec<TrajectoryPoint>,
    pub price_change_24h_usd: Option<f64>,
    pub liquidity_usd: f64,
    pub volume_24h_usd: f64,
}
