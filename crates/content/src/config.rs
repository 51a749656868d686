use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "cdn.contentful.com";
pub const DEFAULT_ENVIRONMENT: &str = "master";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// What a loader substitutes when the backend fails or returns nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Use the static content baked into the site.
    #[default]
    Static,
    /// Leave the section empty.
    Empty,
}

/// Content backend settings.
///
/// Deserializes from camelCase JSON (browser) and loads from `PORTFOLIO_*`
/// environment variables (CLI). Missing credentials are only an error when a
/// query URL is actually built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CmsConfig {
    pub space_id: Option<String>,
    pub access_token: Option<String>,
    pub environment: String,
    pub host: String,
    pub cache_ttl_secs: u64,
    pub fallback: FallbackPolicy,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            space_id: None,
            access_token: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            host: DEFAULT_HOST.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            fallback: FallbackPolicy::Static,
        }
    }
}

impl CmsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        config.space_id = non_empty("PORTFOLIO_CMS_SPACE");
        config.access_token = non_empty("PORTFOLIO_CMS_TOKEN");
        if let Some(env) = non_empty("PORTFOLIO_CMS_ENVIRONMENT") {
            config.environment = env;
        }
        if let Some(host) = non_empty("PORTFOLIO_CMS_HOST") {
            config.host = host;
        }
        if let Some(raw) = non_empty("PORTFOLIO_CACHE_TTL_SECS") {
            config.cache_ttl_secs = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORTFOLIO_CACHE_TTL_SECS",
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = non_empty("PORTFOLIO_FALLBACK") {
            config.fallback = match raw.trim() {
                "static" => FallbackPolicy::Static,
                "empty" => FallbackPolicy::Empty,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "PORTFOLIO_FALLBACK",
                        value: raw.clone(),
                    });
                }
            };
        }
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Invalid {
            key: "config",
            value: e.to_string(),
        })
    }

    /// True when both credentials are present and a remote fetch can be attempted.
    pub fn is_remote_configured(&self) -> bool {
        self.space_id.is_some() && self.access_token.is_some()
    }

    pub fn require_space_id(&self) -> Result<&str, ConfigError> {
        self.space_id
            .as_deref()
            .ok_or(ConfigError::Missing("PORTFOLIO_CMS_SPACE"))
    }

    pub fn require_access_token(&self) -> Result<&str, ConfigError> {
        self.access_token
            .as_deref()
            .ok_or(ConfigError::Missing("PORTFOLIO_CMS_TOKEN"))
    }
}
