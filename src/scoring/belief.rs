/// Weighted belief-score formula and trajectory projection
///
/// Four fixed components:
/// - TWITTER_ACTIVITY: post volume, saturating at 100 posts
/// - CONTENT_SCORE: share of positive posts (50 when there are none)
/// - NEWS_SENTIMENT: mean post score mapped from [-1, 1] to [0, 100]
/// - REFLEXIVITY: 24h weighted price change centered at 50, clamped
///
/// The overall score is the sum of score x weight over the components.
/// The 7-point trajectory starts at the overall score; later points are
/// perturbed by a uniform value in [-10, +10] and clamped to [0, 100].
/// The random source is supplied by the caller.

use rand::Rng;

use crate::logger::{self, LogTag};

use super::types::{AggregateSnapshot, BeliefScoreResult, ScoreComponent, TrajectoryPoint};

// ============================================================================
// FIXED DESIGN CONSTANTS
// ============================================================================

/// Component weights, summing to 1.0
const ACTIVITY_WEIGHT: f64 = 0.35;
const CONTENT_WEIGHT: f64 = 0.25;
const SENTIMENT_WEIGHT: f64 = 0.20;
const REFLEXIVITY_WEIGHT: f64 = 0.20;

/// Post count at which the activity component saturates
const ACTIVITY_SATURATION_POSTS: f64 = 100.0;

/// Trajectory length, labeled "D1".."D7"
const TRAJECTORY_POINTS: usize = 7;

/// Maximum absolute perturbation applied to projected points
const TRAJECTORY_JITTER: f64 = 10.0;

/// Compute the belief score for an aggregated snapshot
pub fn compute_score<R: Rng>(snapshot: &AggregateSnapshot, rng: &mut R) -> BeliefScoreResult {
    let sentiment = &snapshot.sentiment;

    let activity_score =
        ((sentiment.total_posts as f64 / ACTIVITY_SATURATION_POSTS) * 100.0).min(100.0);

    let content_score = if sentiment.total_posts > 0 {
        sentiment.positive_posts as f64 / sentiment.total_posts as f64 * 100.0
    } else {
        50.0
    };

    let sentiment_score = (sentiment.sentiment_score + 1.0) * 50.0;

    let reflexivity_score = (50.0 + snapshot.weighted_avg_price_change_24h).clamp(0.0, 100.0);

    let mut components = vec![
        ScoreComponent {
            name: "TWITTER_ACTIVITY".to_string(),
            score: activity_score,
            weight: ACTIVITY_WEIGHT,
            contribution: 0.0,
        },
        ScoreComponent {
            name: "CONTENT_SCORE".to_string(),
            score: content_score,
            weight: CONTENT_WEIGHT,
            contribution: 0.0,
        },
        ScoreComponent {
            name: "NEWS_SENTIMENT".to_string(),
            score: sentiment_score,
            weight: SENTIMENT_WEIGHT,
            contribution: 0.0,
        },
        ScoreComponent {
            name: "REFLEXIVITY".to_string(),
            score: reflexivity_score,
            weight: REFLEXIVITY_WEIGHT,
            contribution: 0.0,
        },
    ];

    let mut overall_score = 0.0;
    for component in &mut components {
        component.contribution = component.score * component.weight;
        overall_score += component.contribution;

        logger::debug(
            LogTag::Score,
            &format!(
                "{}: score={:.2} weight={:.2} contribution={:.2}",
                component.name, component.score, component.weight, component.contribution
            ),
        );
    }

    BeliefScoreResult {
        token_address: snapshot.token_address.clone(),
        network: snapshot.network.clone(),
        token_symbol: snapshot.token_symbol.clone(),
        token_name: snapshot.token_name.clone(),
        overall_belief_score: overall_score,
        score_components: components,
        predicted_score_trajectory: project_trajectory(overall_score, rng),
        price_change_24h_usd: Some(snapshot.weighted_avg_price_change_24h),
        liquidity_usd: snapshot.total_liquidity,
        volume_24h_usd: snapshot.total_volume_24h,
    }
}

/// Zero-valued result for tokens with no pools.
///
/// Every component is present with score 0 so callers always receive a
/// structurally complete result; no social lookup happens on this path.
pub fn empty_score(network: &str, token_address: &str) -> BeliefScoreResult {
    let components = [
        ("TWITTER_ACTIVITY", ACTIVITY_WEIGHT),
        ("CONTENT_SCORE", CONTENT_WEIGHT),
        ("NEWS_SENTIMENT", SENTIMENT_WEIGHT),
        ("REFLEXIVITY", REFLEXIVITY_WEIGHT),
    ]
    .iter()
    .map(|(name, weight)| ScoreComponent {
        name: name.to_string(),
        score: 0.0,
        weight: *weight,
        contribution: 0.0,
    })
    .collect();

    let trajectory = (1..=TRAJECTORY_POINTS)
        .map(|day| TrajectoryPoint {
            day: format!("D{}", day),
            score: 0.0,
        })
        .collect();

    BeliefScoreResult {
        token_address: token_address.to_string(),
        network: network.to_string(),
        token_symbol: "N/A".to_string(),
        token_name: "Unknown Token".to_string(),
        overall_belief_score: 0.0,
        score_components: components,
        predicted_score_trajectory: trajectory,
        price_change_24h_usd: None,
        liquidity_usd: 0.0,
        volume_24h_usd: 0.0,
    }
}

/// Project the 7-point forward trajectory from the overall score
fn project_trajectory<R: Rng>(overall_score: f64, rng: &mut R) -> Vec<TrajectoryPoint> {
    (0..TRAJECTORY_POINTS)
        .map(|i| {
            let score = if i == 0 {
                overall_score
            } else {
                let jitter = rng.gen_range(-TRAJECTORY_JITTER..=TRAJECTORY_JITTER);
                (overall_score + jitter).clamp(0.0, 100.0)
            };
            TrajectoryPoint {
                day: format!("D{}", i + 1),
                score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::types::SentimentSummary;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn snapshot(
        total_posts: usize,
        positive_posts: usize,
        negative_posts: usize,
        mean_score: f64,
        price_change_24h: f64,
    ) -> AggregateSnapshot {
        AggregateSnapshot {
            token_address: "mint".to_string(),
            network: "solana".to_string(),
            token_symbol: "WIF".to_string(),
            token_name: "WIF / SOL".to_string(),
            total_pools: 1,
            total_volume_24h: 5000.0,
            total_volume_1h: 100.0,
            total_volume_6h: 1000.0,
            total_liquidity: 1000.0,
            total_market_cap: 0.0,
            total_fdv: 0.0,
            total_transactions_24h: 0,
            total_transactions_1h: 0,
            total_unique_transactions_24h: 0,
            weighted_avg_price_usd: 1.0,
            weighted_avg_price_change_24h: price_change_24h,
            weighted_avg_price_change_1h: 0.0,
            weighted_avg_price_change_6h: 0.0,
            sentiment: SentimentSummary {
                total_posts,
                positive_posts,
                negative_posts,
                neutral_posts: total_posts - positive_posts - negative_posts,
                sentiment_score: mean_score,
                top_positive_posts: Vec::new(),
                top_negative_posts: Vec::new(),
            },
            pools: Vec::new(),
        }
    }

    #[test]
    fn test_component_values() {
        // 50 posts (30 positive / 10 negative), mean 0.4, +10% in 24h
        let snapshot = snapshot(50, 30, 10, 0.4, 10.0);
        let mut rng = StdRng::seed_from_u64(7);
        let result = compute_score(&snapshot, &mut rng);

        let by_name = |name: &str| {
            result
                .score_components
                .iter()
                .find(|c| c.name == name)
                .unwrap()
                .score
        };

        assert_eq!(by_name("TWITTER_ACTIVITY"), 50.0);
        assert_eq!(by_name("CONTENT_SCORE"), 60.0);
        assert_eq!(by_name("NEWS_SENTIMENT"), 70.0);
        assert_eq!(by_name("REFLEXIVITY"), 60.0);

        let expected = 50.0 * 0.35 + 60.0 * 0.25 + 70.0 * 0.20 + 60.0 * 0.20;
        assert!((result.overall_belief_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_contributions_sum_to_overall() {
        let cases = [
            snapshot(0, 0, 0, 0.0, 0.0),
            snapshot(7, 2, 4, -0.3, -80.0),
            snapshot(500, 400, 50, 0.9, 55.0),
        ];
        for snapshot in cases {
            let mut rng = StdRng::seed_from_u64(1);
            let result = compute_score(&snapshot, &mut rng);
            let sum: f64 = result.score_components.iter().map(|c| c.contribution).sum();
            assert_eq!(sum, result.overall_belief_score);
        }
    }

    #[test]
    fn test_no_posts_content_defaults_to_midpoint() {
        let snapshot = snapshot(0, 0, 0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        let result = compute_score(&snapshot, &mut rng);

        let content = result
            .score_components
            .iter()
            .find(|c| c.name == "CONTENT_SCORE")
            .unwrap();
        assert_eq!(content.score, 50.0);
    }

    #[test]
    fn test_activity_saturates() {
        let snapshot = snapshot(250, 0, 0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        let result = compute_score(&snapshot, &mut rng);
        assert_eq!(result.score_components[0].score, 100.0);
    }

    #[test]
    fn test_reflexivity_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        let crash = compute_score(&snapshot(0, 0, 0, 0.0, -500.0), &mut rng);
        assert_eq!(crash.score_components[3].score, 0.0);

        let spike = compute_score(&snapshot(0, 0, 0, 0.0, 500.0), &mut rng);
        assert_eq!(spike.score_components[3].score, 100.0);
    }

    #[test]
    fn test_trajectory_shape() {
        let snapshot = snapshot(50, 30, 10, 0.4, 10.0);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = compute_score(&snapshot, &mut rng);
            let trajectory = &result.predicted_score_trajectory;

            assert_eq!(trajectory.len(), 7);
            assert_eq!(trajectory[0].day, "D1");
            assert_eq!(trajectory[6].day, "D7");
            // First point is always the computed score, untouched
            assert_eq!(trajectory[0].score, result.overall_belief_score);
            for point in &trajectory[1..] {
                assert!(point.score >= 0.0 && point.score <= 100.0);
                assert!((point.score - result.overall_belief_score).abs() <= 10.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_empty_score_shape() {
        let result = empty_score("solana", "mint");

        assert_eq!(result.token_symbol, "N/A");
        assert_eq!(result.token_name, "Unknown Token");
        assert_eq!(result.overall_belief_score, 0.0);
        assert_eq!(result.score_components.len(), 4);
        assert!(result.score_components.iter().all(|c| c.score == 0.0));
        assert!(result
            .score_components
            .iter()
            .all(|c| c.contribution == 0.0));
        assert_eq!(result.price_change_24h_usd, None);
        assert_eq!(result.liquidity_usd, 0.0);
        assert_eq!(result.volume_24h_usd, 0.0);

        assert_eq!(result.predicted_score_trajectory.len(), 7);
        assert!(result
            .predicted_score_trajectory
            .iter()
            .all(|p| p.score == 0.0));
        assert_eq!(result.predicted_score_trajectory[0].day, "D1");
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total = ACTIVITY_WEIGHT + CONTENT_WEIGHT + SENTIMENT_WEIGHT + REFLEXIVITY_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }
}
