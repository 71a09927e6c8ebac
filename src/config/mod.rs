//! # Configuration
//!
//! Settings for the query builders, resolved in three layers:
//!
//! 1. an environment preset (`test`, `development`, anything else is
//!    production), chosen from `LITTLE_ORM_ENV` / `APP_ENV` / `RUST_ENV`;
//! 2. an optional YAML file (`config/little-orm.<env>.yaml` or
//!    `config/little-orm.yaml`);
//! 3. `LITTLE_ORM_*` environment variable overrides.
//!
//! ```rust,no_run
//! use little_orm::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::load(None)?;
//! println!("ORDER BY policy: {}", config.order_by_policy);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod query_builder_config;

pub use loader::{detect_environment, ConfigLoader};
pub use query_builder_config::{OrderByPolicy, QueryBuilderConfig};
