use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub database_max_connections: u32,
    /// Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    /// Optional cap on the number of search results returned, never zero
    pub search_max_results: Option<usize>,
    /// `None` disables rate limiting
    pub rate_limit: Option<RateLimitConfig>,
}

/// Token bucket settings for public endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a valid number")?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let request_timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("REQUEST_TIMEOUT_SECS must be a valid number")?;

        // 0 means no cap
        let search_max_results = lookup("SEARCH_MAX_RESULTS")
            .map(|v| v.parse::<usize>())
            .transpose()
            .context("SEARCH_MAX_RESULTS must be a valid number")?
            .filter(|max| *max > 0);

        let per_second: u64 = lookup("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("RATE_LIMIT_PER_SECOND must be a valid number")?;
        let burst_size: u32 = lookup("RATE_LIMIT_BURST")
            .unwrap_or_else(|| "20".to_string())
            .parse()
            .context("RATE_LIMIT_BURST must be a valid number")?;
        let rate_limit = (per_second > 0).then_some(RateLimitConfig {
            per_second,
            burst_size,
        });

        Ok(Self {
            database_url,
            port,
            database_max_connections,
            allowed_origins,
            request_timeout: Duration::from_secs(request_timeout_secs),
            search_max_results,
            rate_limit,
        })
    }
}
