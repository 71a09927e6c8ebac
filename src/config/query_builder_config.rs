//! Query Builder Configuration
//!
//! Environment-aware settings for the query builders: how ORDER BY fields are
//! checked, limits applied when the caller sets none, and whether built
//! queries are logged.

use super::loader::detect_environment;
use crate::error::{OrmError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// How ORDER BY field names are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderByPolicy {
    /// Pass field names through verbatim
    #[default]
    Permissive,
    /// Map logical names to physical names and reject unknown fields
    Strict,
}

impl fmt::Display for OrderByPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderByPolicy::Permissive => f.write_str("permissive"),
            OrderByPolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for OrderByPolicy {
    type Err = OrmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(OrderByPolicy::Permissive),
            "strict" => Ok(OrderByPolicy::Strict),
            other => Err(OrmError::Configuration(format!(
                "unknown order_by_policy '{other}'"
            ))),
        }
    }
}

/// Settings shared by every builder created with them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryBuilderConfig {
    pub order_by_policy: OrderByPolicy,
    /// Limit applied when the caller sets no positive limit
    pub default_limit: Option<u32>,
    /// Upper bound for any rendered limit
    pub max_limit: Option<u32>,
    /// Emit a structured log line for every built query
    pub log_queries: bool,
}

impl Default for QueryBuilderConfig {
    /// Production defaults: permissive ordering, no implicit limits, quiet
    fn default() -> Self {
        Self {
            order_by_policy: OrderByPolicy::Permissive,
            default_limit: None,
            max_limit: None,
            log_queries: false,
        }
    }
}

impl QueryBuilderConfig {
    /// Strict ordering and query logging, to surface mistakes early
    pub fn for_test() -> Self {
        Self {
            order_by_policy: OrderByPolicy::Strict,
            log_queries: true,
            ..Self::default()
        }
    }

    pub fn for_development() -> Self {
        Self {
            log_queries: true,
            ..Self::default()
        }
    }

    /// Preset for the detected environment with `LITTLE_ORM_*` overrides applied
    pub fn from_environment() -> Self {
        let environment = detect_environment();
        Self::for_environment(&environment).with_env_overrides()
    }

    pub fn for_environment(environment: &str) -> Self {
        match environment {
            "test" => {
                info!("Loading test query builder configuration");
                Self::for_test()
            }
            "development" => {
                info!("Loading development query builder configuration");
                Self::for_development()
            }
            _ => {
                info!("Loading production query builder configuration");
                Self::default()
            }
        }
    }

    /// Apply environment variable overrides to configuration
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup; unparsable values are
    /// logged and ignored
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup("LITTLE_ORM_ORDER_BY_POLICY") {
            match policy.parse() {
                Ok(parsed) => {
                    self.order_by_policy = parsed;
                    info!("ORDER BY policy override: {}", self.order_by_policy);
                }
                Err(e) => warn!("Ignoring LITTLE_ORM_ORDER_BY_POLICY: {}", e),
            }
        }

        if let Some(limit) = lookup("LITTLE_ORM_DEFAULT_LIMIT") {
            match limit.parse::<u32>() {
                Ok(parsed) => {
                    self.default_limit = Some(parsed);
                    info!("Default limit override: {}", parsed);
                }
                Err(e) => warn!("Ignoring LITTLE_ORM_DEFAULT_LIMIT '{}': {}", limit, e),
            }
        }

        if let Some(limit) = lookup("LITTLE_ORM_MAX_LIMIT") {
            match limit.parse::<u32>() {
                Ok(parsed) => {
                    self.max_limit = Some(parsed);
                    info!("Max limit override: {}", parsed);
                }
                Err(e) => warn!("Ignoring LITTLE_ORM_MAX_LIMIT '{}': {}", limit, e),
            }
        }

        if let Some(enabled) = lookup("LITTLE_ORM_LOG_QUERIES") {
            self.log_queries = enabled.parse().unwrap_or(self.log_queries);
        }

        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == Some(0) {
            return Err(OrmError::Configuration(
                "default_limit must be greater than 0".to_string(),
            ));
        }

        if self.max_limit == Some(0) {
            return Err(OrmError::Configuration(
                "max_limit must be greater than 0".to_string(),
            ));
        }

        if let (Some(default_limit), Some(max_limit)) = (self.default_limit, self.max_limit) {
            if default_limit > max_limit {
                return Err(OrmError::Configuration(format!(
                    "default_limit ({default_limit}) exceeds max_limit ({max_limit})"
                )));
            }
        }

        Ok(())
    }

    /// Log current configuration for debugging
    pub fn log_configuration(&self) {
        info!(
            order_by_policy = %self.order_by_policy,
            default_limit = ?self.default_limit,
            max_limit = ?self.max_limit,
            log_queries = self.log_queries,
            "Query builder configuration"
        );
    }
}
