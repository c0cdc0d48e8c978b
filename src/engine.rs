/// Belief-score engine orchestration
///
/// One request flows: pools -> (empty? zero result) -> aggregate ->
/// social sentiment for the first pool's symbol -> snapshot -> score.
/// The two upstream fetches are sequential because the social query
/// needs the symbol resolved from the pool data.

use async_trait::async_trait;
use std::time::Instant;

use crate::apis::geckoterminal::{GeckoTerminalClient, PoolRecord};
use crate::apis::twitter::TwitterSearchClient;
use crate::cache::CacheConfig;
use crate::config::Config;
use crate::errors::EngineError;
use crate::logger::{self, LogTag};
use crate::scoring::{aggregate, belief, BeliefScoreResult};
use crate::social::{PostSource, SocialFeed};

/// Upstream pool lookup provider
#[async_trait]
pub trait PoolSource: Send + Sync {
    async fn token_pools(
        &self,
        network: &str,
        token_address: &str,
    ) -> Result<Vec<PoolRecord>, String>;
}

#[async_trait]
impl PoolSource for GeckoTerminalClient {
    async fn token_pools(
        &self,
        network: &str,
        token_address: &str,
    ) -> Result<Vec<PoolRecord>, String> {
        self.fetch_token_pools(network, token_address).await
    }
}

/// The belief-score engine
pub struct BeliefEngine<P: PoolSource, S: PostSource> {
    pools: P,
    social: SocialFeed<S>,
    post_limit: usize,
}

/// Engine wired to the production clients
pub type DefaultEngine = BeliefEngine<GeckoTerminalClient, TwitterSearchClient>;

impl<P: PoolSource, S: PostSource> BeliefEngine<P, S> {
    pub fn new(pools: P, social: SocialFeed<S>, post_limit: usize) -> Self {
        Self {
            pools,
            social,
            post_limit,
        }
    }

    /// Compute the belief score for a (network, token address) pair.
    ///
    /// Upstream failures degrade to empty data; the result is always
    /// structurally complete. The only caller-visible error is a missing
    /// address.
    pub async fn score_token(
        &self,
        network: &str,
        token_address: &str,
    ) -> Result<BeliefScoreResult, EngineError> {
        if token_address.trim().is_empty() {
            return Err(EngineError::MissingAddress);
        }

        let pools = match self.pools.token_pools(network, token_address).await {
            Ok(pools) => pools,
            Err(e) => {
                logger::warning(
                    LogTag::Pools,
                    &format!(
                        "Pool fetch failed for {} on {}: {}",
                        token_address, network, e
                    ),
                );
                Vec::new()
            }
        };

        if pools.is_empty() {
            logger::info(
                LogTag::Engine,
                &format!("No pools for {} on {}, returning zero score", token_address, network),
            );
            return Ok(belief::empty_score(network, token_address));
        }

        logger::debug(
            LogTag::Engine,
            &format!("Fetched {} pools for {}", pools.len(), token_address),
        );

        let symbol = pools[0].symbol.clone();
        let posts = self
            .social
            .posts(&symbol, self.post_limit, Instant::now())
            .await;
        let sentiment = aggregate::summarize_posts(&posts);
        let snapshot = aggregate::aggregate_pools(&pools, sentiment);

        Ok(belief::compute_score(&snapshot, &mut rand::thread_rng()))
    }
}

/// Build the production engine from configuration
pub fn build_engine(config: &Config) -> Result<DefaultEngine, String> {
    let gecko = GeckoTerminalClient::new(
        config.pools.enabled,
        config.pool_rate_limit(),
        config.pool_timeout(),
    )?;

    let twitter = TwitterSearchClient::new(
        config.social.enabled,
        config.social_rate_limit(),
        config.social_timeout(),
        config.social.rapidapi_key.clone(),
    )?;

    let feed = SocialFeed::new(
        twitter,
        CacheConfig::custom(config.social.cache_ttl_secs, config.social.cache_capacity),
    );

    Ok(BeliefEngine::new(gecko, feed, config.social.post_limit))
}
