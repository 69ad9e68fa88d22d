//! Configuration for remote checks and caching

use std::time::Duration;
use thiserror::Error;

/// One week, the default lifetime of cached lookups.
pub const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Configuration shared by the profile checkers and the tweet embedder
#[derive(Debug, Clone)]
pub struct SocialFieldsConfig {
    /// Lifetime of cached HTTP lookups (including failed ones)
    pub cache_ttl: Duration,

    /// HTTP timeout for remote checks
    pub timeout: Duration,

    /// Verify TLS certificates on outbound requests
    pub verify_tls: bool,

    /// Probe twitter.com for handles that pass the grammar check
    pub verify_twitter_remote: bool,

    /// Prefix for cache keys, keeps our entries apart from other cache users
    pub cache_namespace: String,

    /// Base URL for Twitter profile pages
    pub twitter_base_url: String,

    /// Base URL for the Facebook Graph lookup
    pub graph_base_url: String,

    /// Twitter oEmbed endpoint
    pub oembed_endpoint: String,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for SocialFieldsConfig {
    fn default() -> Self {
        Self {
            cache_ttl: WEEK,
            timeout: Duration::from_secs(10),
            verify_tls: true,
            verify_twitter_remote: true,
            cache_namespace: "gvsfp".to_string(),
            twitter_base_url: "https://twitter.com".to_string(),
            graph_base_url: "https://graph.facebook.com".to_string(),
            oembed_endpoint: "https://publish.twitter.com/oembed".to_string(),
            user_agent: format!(
                "SocialFields/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ),
        }
    }
}

impl SocialFieldsConfig {
    /// Load configuration from `SOCIAL_FIELDS_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secs) = lookup("SOCIAL_FIELDS_CACHE_TTL_SECS") {
            config.cache_ttl = Duration::from_secs(parse_u64("SOCIAL_FIELDS_CACHE_TTL_SECS", &secs)?);
        }
        if let Some(secs) = lookup("SOCIAL_FIELDS_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_u64("SOCIAL_FIELDS_TIMEOUT_SECS", &secs)?);
        }
        if let Some(flag) = lookup("SOCIAL_FIELDS_VERIFY_TLS") {
            config.verify_tls = parse_bool("SOCIAL_FIELDS_VERIFY_TLS", &flag)?;
        }
        if let Some(flag) = lookup("SOCIAL_FIELDS_VERIFY_TWITTER") {
            config.verify_twitter_remote = parse_bool("SOCIAL_FIELDS_VERIFY_TWITTER", &flag)?;
        }
        if let Some(namespace) = lookup("SOCIAL_FIELDS_CACHE_NAMESPACE") {
            config.cache_namespace = namespace;
        }
        if let Some(url) = lookup("SOCIAL_FIELDS_TWITTER_URL") {
            config.twitter_base_url = url;
        }
        if let Some(url) = lookup("SOCIAL_FIELDS_GRAPH_URL") {
            config.graph_base_url = url;
        }
        if let Some(url) = lookup("SOCIAL_FIELDS_OEMBED_URL") {
            config.oembed_endpoint = url;
        }

        Ok(config)
    }

    /// Skip TLS certificate verification on outbound checks
    ///
    /// Trades transport security for availability against misconfigured
    /// endpoints. Off by default.
    pub fn with_insecure_tls(mut self) -> Self {
        self.verify_tls = false;
        self
    }

    /// Configure a custom cache lifetime
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Configure a custom request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Only check handle grammar, never probe twitter.com
    pub fn without_twitter_remote(mut self) -> Self {
        self.verify_twitter_remote = false;
        self
    }
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }),
    }
}

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set to something we cannot parse
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },
}
