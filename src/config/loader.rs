use super::query_builder_config::QueryBuilderConfig;
use crate::error::{OrmError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Variables consulted, in order, to detect the running environment
pub const ENVIRONMENT_VARIABLES: [&str; 3] = ["LITTLE_ORM_ENV", "APP_ENV", "RUST_ENV"];

/// Directory searched when no config directory is given
pub const DEFAULT_CONFIG_DIRECTORY: &str = "config";

/// Current environment name, `development` when nothing is set
pub fn detect_environment() -> String {
    ENVIRONMENT_VARIABLES
        .iter()
        .find_map(|key| env::var(key).ok())
        .unwrap_or_else(|| "development".to_string())
}

/// Loads [`QueryBuilderConfig`] from YAML files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the config directory, falling back to environment presets
    /// when no file exists.
    ///
    /// `little-orm.<environment>.yaml` wins over `little-orm.yaml`.
    pub fn load(config_dir: Option<PathBuf>) -> Result<QueryBuilderConfig> {
        let environment = detect_environment();
        let config_dir = config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIRECTORY));

        match Self::find_config_file(&config_dir, &environment) {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!(
                    config_dir = %config_dir.display(),
                    environment = %environment,
                    "No query builder config file found, using environment preset"
                );
                let config = QueryBuilderConfig::from_environment();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Parse a YAML file, then apply environment overrides and validate
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<QueryBuilderConfig> {
        let path = path.as_ref();
        info!("Loading query builder configuration from: {}", path.display());

        let yaml = fs::read_to_string(path).map_err(|e| {
            OrmError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;

        let config = Self::from_yaml_str(&yaml)?.with_env_overrides();
        config.validate()?;
        config.log_configuration();
        Ok(config)
    }

    /// Parse YAML without applying overrides; missing keys take defaults
    pub fn from_yaml_str(yaml: &str) -> Result<QueryBuilderConfig> {
        serde_yaml::from_str(yaml)
            .map_err(|e| OrmError::Configuration(format!("invalid query builder YAML: {e}")))
    }

    fn find_config_file(config_dir: &Path, environment: &str) -> Option<PathBuf> {
        [
            config_dir.join(format!("little-orm.{environment}.yaml")),
            config_dir.join("little-orm.yaml"),
        ]
        .into_iter()
        .find(|candidate| candidate.is_file())
    }
}
