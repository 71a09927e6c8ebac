use super::builder::{BuilderKind, QueryBuilder};
use super::expression::{SqlWithArgs, PLACEHOLDER};
use crate::config::QueryBuilderConfig;
use crate::error::{OrmError, Result};
use crate::logging::{log_error, log_query_operation};
use crate::registry::{Model, SchemaRegistry, TableMeta};
use serde_json::Value;
use std::sync::Arc;

/// INSERT statement builder for a single row.
///
/// Values are keyed by logical field name and emitted in the order the
/// fields were first set.
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: String,
    columns: Vec<String>,
    values: Vec<Value>,
    table_meta: Arc<TableMeta>,
    config: QueryBuilderConfig,
}

impl InsertBuilder {
    pub fn new<M: Model>(registry: &SchemaRegistry) -> Result<Self> {
        Self::with_config::<M>(registry, QueryBuilderConfig::default())
    }

    pub fn with_config<M: Model>(
        registry: &SchemaRegistry,
        config: QueryBuilderConfig,
    ) -> Result<Self> {
        let table_meta = registry.table_meta::<M>()?;
        Ok(Self::from_table_meta(table_meta, config))
    }

    pub fn from_table_meta(table_meta: Arc<TableMeta>, config: QueryBuilderConfig) -> Self {
        Self {
            table: table_meta.table_name.clone(),
            columns: Vec::new(),
            values: Vec::new(),
            table_meta,
            config,
        }
    }

    /// Set the value for a logical field. Setting the same field twice keeps
    /// its first position and replaces the value.
    pub fn value(mut self, field: &str, value: impl Into<Value>) -> Result<Self> {
        let column = self
            .table_meta
            .physical_name(field)
            .ok_or_else(|| OrmError::unknown_column(field, &self.table))?
            .to_string();

        match self.columns.iter().position(|existing| *existing == column) {
            Some(index) => self.values[index] = value.into(),
            None => {
                self.columns.push(column);
                self.values.push(value.into());
            }
        }
        Ok(self)
    }

    pub fn build(&self) -> Result<SqlWithArgs> {
        if self.columns.is_empty() {
            let err = OrmError::invalid_expression(format!(
                "insert into '{}' has no values",
                self.table
            ));
            log_error("InsertBuilder", "build", &err.to_string(), Some(&self.table));
            return Err(err);
        }

        let placeholders = vec![PLACEHOLDER; self.columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            self.table,
            self.columns.join(", ")
        );

        if self.config.log_queries {
            log_query_operation("insert", &self.table, &sql, self.values.len(), "built");
        }

        Ok((sql, self.values.clone()))
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Physical columns set so far, in insertion order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl QueryBuilder for InsertBuilder {
    fn build(&mut self) -> Result<SqlWithArgs> {
        InsertBuilder::build(self)
    }

    fn kind(&self) -> BuilderKind {
        BuilderKind::Insert
    }

    fn table(&self) -> &str {
        &self.table
    }
}
