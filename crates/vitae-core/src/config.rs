//! Configuration for the search subsystem

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How long a built index stays fresh
    pub cache_ttl: Duration,

    /// Result count when the caller gives none (or a non-positive one)
    pub default_limit: usize,

    /// Upper bound on results per query
    pub max_limit: usize,

    /// Description length (in chars) before truncation
    pub description_limit: usize,

    /// Max suggestions returned
    pub max_suggestions: usize,

    /// Shortest input that triggers suggestions
    pub min_suggestion_len: usize,

    /// Default tracing directive for the binary
    pub log_level: String,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            cache_ttl: Duration::from_secs(5 * 60),
            default_limit: 10,
            max_limit: 50,
            description_limit: 150,
            max_suggestions: 8,
            min_suggestion_len: 2,
            log_level: "info".to_string(),
        }
    }

    /// Defaults overridden by `VITAE_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new();

        if let Some(secs) = parse_var::<u64>(&lookup, "VITAE_CACHE_TTL_SECS")? {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(limit) = parse_var::<usize>(&lookup, "VITAE_DEFAULT_LIMIT")? {
            config.default_limit = limit;
        }
        if let Some(limit) = parse_var::<usize>(&lookup, "VITAE_MAX_LIMIT")? {
            config.max_limit = limit;
        }
        if let Some(level) = lookup("VITAE_LOG_LEVEL") {
            config.log_level = level;
        }

        if config.default_limit == 0 || config.default_limit > config.max_limit {
            return Err(ConfigError::Invalid {
                key: "VITAE_DEFAULT_LIMIT",
                value: config.default_limit.to_string(),
            });
        }

        Ok(config)
    }

    /// Clamp a caller-supplied limit: missing or below one falls back to
    /// the default, anything above the maximum is capped.
    pub fn normalize_limit(&self, limit: Option<i64>) -> usize {
        match limit {
            Some(n) if n >= 1 => (n as u64).min(self.max_limit as u64) as usize,
            _ => self.default_limit,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
