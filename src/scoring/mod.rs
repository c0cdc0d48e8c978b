/// Belief-score computation
///
/// `aggregate` folds pool records and classified posts into one snapshot;
/// `belief` applies the weighted component formula and projects the
/// short-term trajectory.

pub mod aggregate;
pub mod belief;
pub mod types;

pub use types::{AggregateSnapshot, BeliefScoreResult, ScoreComponent, SentimentSummary, TrajectoryPoint};
