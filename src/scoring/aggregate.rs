/// Pool and sentiment aggregation
///
/// Pool totals are plain sums; averages are liquidity-weighted, with the
/// weight denominator forced to 1 when total liquidity is 0 so the math
/// never divides by zero. Token identity comes from the first pool in
/// upstream order - no cross-pool consensus.

use crate::apis::geckoterminal::PoolRecord;
use crate::logger::{self, LogTag};
use crate::sentiment::Sentiment;
use crate::social::PostRecord;

use super::types::{AggregateSnapshot, SentimentSummary};

/// How many posts to keep on each end of the sentiment ranking
const TOP_POSTS: usize = 5;

/// Roll up a batch of classified posts into a sentiment summary
pub fn summarize_posts(posts: &[PostRecord]) -> SentimentSummary {
    if posts.is_empty() {
        return SentimentSummary::default();
    }

    let positive: Vec<&PostRecord> = posts
        .iter()
        .filter(|p| p.sentiment == Sentiment::Positive)
        .collect();
    let negative: Vec<&PostRecord> = posts
        .iter()
        .filter(|p| p.sentiment == Sentiment::Negative)
        .collect();

    let mean_score =
        posts.iter().map(|p| p.sentiment_score).sum::<f64>() / posts.len() as f64;

    let mut top_positive: Vec<PostRecord> = positive.iter().map(|p| (*p).clone()).collect();
    top_positive.sort_by(|a, b| {
        b.sentiment_score
            .partial_cmp(&a.sentiment_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top_positive.truncate(TOP_POSTS);

    let mut top_negative: Vec<PostRecord> = negative.iter().map(|p| (*p).clone()).collect();
    top_negative.sort_by(|a, b| {
        a.sentiment_score
            .partial_cmp(&b.sentiment_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    top_negative.truncate(TOP_POSTS);

    SentimentSummary {
        total_posts: posts.len(),
        positive_posts: positive.len(),
        negative_posts: negative.len(),
        neutral_posts: posts.len() - positive.len() - negative.len(),
        sentiment_score: mean_score,
        top_positive_posts: top_positive,
        top_negative_posts: top_negative,
    }
}

/// Combine a token's pools (non-empty, upstream order) with its sentiment
/// summary into one snapshot
pub fn aggregate_pools(pools: &[PoolRecord], sentiment: SentimentSummary) -> AggregateSnapshot {
    let first = &pools[0];

    let total_liquidity: f64 = pools.iter().map(|p| p.liquidity).sum();
    // Degenerate case: all-zero liquidity leaves the weighted sums divided by 1
    let weight_denominator = if total_liquidity > 0.0 {
        total_liquidity
    } else {
        1.0
    };

    let weighted_avg = |get: fn(&PoolRecord) -> f64| -> f64 {
        pools.iter().map(|p| get(p) * p.liquidity).sum::<f64>() / weight_denominator
    };

    logger::debug(
        LogTag::Score,
        &format!(
            "Aggregating {} pools for {} (total liquidity ${:.2})",
            pools.len(),
            first.symbol,
            total_liquidity
        ),
    );

    AggregateSnapshot {
        token_address: first.token_address.clone(),
        network: first.network.clone(),
        token_symbol: first.symbol.clone(),
        token_name: first.name.clone(),
        total_pools: pools.len(),
        total_volume_24h: pools.iter().map(|p| p.volume_24h).sum(),
        total_volume_1h: pools.iter().map(|p| p.volume_1h).sum(),
        total_volume_6h: pools.iter().map(|p| p.volume_6h).sum(),
        total_liquidity,
        total_market_cap: pools.iter().map(|p| p.market_cap).sum(),
        total_fdv: pools.iter().map(|p| p.fdv).sum(),
        total_transactions_24h: pools.iter().map(|p| p.transactions_24h).sum(),
        total_transactions_1h: pools.iter().map(|p| p.transactions_1h).sum(),
        total_unique_transactions_24h: pools.iter().map(|p| p.unique_transactions_24h).sum(),
        weighted_avg_price_usd: weighted_avg(|p| p.base_token_price_usd),
        weighted_avg_price_change_24h: weighted_avg(|p| p.price_change_24h),
        weighted_avg_price_change_1h: weighted_avg(|p| p.price_change_1h),
        weighted_avg_price_change_6h: weighted_avg(|p| p.price_change_6h),
        sentiment,
        pools: pools.to_vec(),
    }
}
