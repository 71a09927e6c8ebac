use super::builder::{BuilderKind, QueryBuilder};
use super::insert_builder::InsertBuilder;
use super::select_builder::SelectBuilder;
use crate::config::QueryBuilderConfig;
use crate::error::Result;
use crate::registry::{Model, SchemaRegistry};
use std::sync::Arc;
use tracing::debug;

/// Creates builders that share one registry and one configuration
#[derive(Debug, Clone)]
pub struct BuilderFactory {
    registry: Arc<SchemaRegistry>,
    config: QueryBuilderConfig,
}

impl BuilderFactory {
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self::with_config(registry, QueryBuilderConfig::default())
    }

    pub fn with_config(registry: Arc<SchemaRegistry>, config: QueryBuilderConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn config(&self) -> &QueryBuilderConfig {
        &self.config
    }

    pub fn create_select<M: Model>(&self) -> Result<SelectBuilder> {
        SelectBuilder::with_config::<M>(&self.registry, self.config.clone())
    }

    pub fn create_insert<M: Model>(&self) -> Result<InsertBuilder> {
        InsertBuilder::with_config::<M>(&self.registry, self.config.clone())
    }

    /// Create a builder of the requested kind behind the common trait.
    ///
    /// Kinds usually arrive as text; parse them with `str::parse::<BuilderKind>()`,
    /// which rejects anything unsupported.
    pub fn create<M: Model>(&self, kind: BuilderKind) -> Result<Box<dyn QueryBuilder>> {
        debug!(kind = %kind, model = M::MODEL_NAME, "Creating query builder");
        match kind {
            BuilderKind::Select => Ok(Box::new(self.create_select::<M>()?)),
            BuilderKind::Insert => Ok(Box::new(self.create_insert::<M>()?)),
        }
    }
}
