use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use crate::apis::geckoterminal;
use crate::apis::twitter;

/// Runtime configuration loaded from configs.json
///
/// A default file is written on first run. The RapidAPI key may also be
/// supplied through the RAPIDAPI_KEY environment variable, which takes
/// precedence over the file value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pools: PoolSourceConfig,
    #[serde(default)]
    pub social: SocialConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Network used when the caller does not specify one
    pub default_network: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolSourceConfig {
    pub enabled: bool,
    /// 0 = use the client's built-in default
    pub rate_limit_per_minute: usize,
    /// 0 = use the client's built-in default
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialConfig {
    pub enabled: bool,
    pub rate_limit_per_minute: usize,
    pub timeout_seconds: u64,
    /// RapidAPI key for the Twitter search provider
    pub rapidapi_key: String,
    /// Max posts analyzed per token
    pub post_limit: usize,
    /// Feed cache time-to-live in seconds
    pub cache_ttl_secs: u64,
    /// Feed cache capacity (distinct (symbol, limit) keys)
    pub cache_capacity: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_network: "solana".to_string(),
        }
    }
}

impl Default for PoolSourceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate_limit_per_minute: 0,
            timeout_seconds: 0,
        }
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate_limit_per_minute: 0,
            timeout_seconds: 0,
            rapidapi_key: String::new(),
            post_limit: 50,
            cache_ttl_secs: 300, // 5 minutes
            cache_capacity: 1000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            pools: PoolSourceConfig::default(),
            social: SocialConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            let default_config = Self::default();
            default_config.save(path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        if let Ok(key) = std::env::var("RAPIDAPI_KEY") {
            if !key.is_empty() {
                config.social.rapidapi_key = key;
            }
        }

        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))?;

        Ok(())
    }

    /// Effective pool-source rate limit (config override or client default)
    pub fn pool_rate_limit(&self) -> usize {
        if self.pools.rate_limit_per_minute == 0 {
            geckoterminal::RATE_LIMIT_PER_MINUTE
        } else {
            self.pools.rate_limit_per_minute
        }
    }

    /// Effective pool-source timeout (config override or client default)
    pub fn pool_timeout(&self) -> u64 {
        if self.pools.timeout_seconds == 0 {
            geckoterminal::TIMEOUT_SECS
        } else {
            self.pools.timeout_seconds
        }
    }

    /// Effective social-search rate limit (config override or client default)
    pub fn social_rate_limit(&self) -> usize {
        if self.social.rate_limit_per_minute == 0 {
            twitter::RATE_LIMIT_PER_MINUTE
        } else {
            self.social.rate_limit_per_minute
        }
    }

    /// Effective social-search timeout (config override or client default)
    pub fn social_timeout(&self) -> u64 {
        if self.social.timeout_seconds == 0 {
            twitter::TIMEOUT_SECS
        } else {
            self.social.timeout_seconds
        }
    }
}

static GLOBAL_CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Replace the global configuration (called once at startup after load)
pub fn set_config(config: Config) {
    if let Ok(mut current) = GLOBAL_CONFIG.write() {
        *current = config;
    }
}

/// Get a clone of the global configuration
pub fn get_config_clone() -> Config {
    GLOBAL_CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.default_network, "solana");
        assert_eq!(config.social.post_limit, 50);
        assert_eq!(config.social.cache_ttl_secs, 300);
        assert_eq!(config.pool_rate_limit(), geckoterminal::RATE_LIMIT_PER_MINUTE);
        assert_eq!(config.pool_timeout(), geckoterminal::TIMEOUT_SECS);
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config::default();
        config.pools.rate_limit_per_minute = 10;
        config.pools.timeout_seconds = 5;
        assert_eq!(config.pool_rate_limit(), 10);
        assert_eq!(config.pool_timeout(), 5);
    }
}
