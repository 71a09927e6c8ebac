//! # Schema Registry
//!
//! Thread-safe cache of [`TableMeta`] keyed by table name.
//!
//! ## Overview
//!
//! Models are registered once at startup; builders then look up their
//! metadata on construction. The registry is an ordinary value: create it,
//! populate it, and share it (by reference or `Arc`) with whatever builds
//! queries. Reads take a shared lock and never block each other; registration
//! takes the exclusive lock.
//!
//! ## Usage
//!
//! ```rust
//! use little_orm::registry::{FieldDescriptor, Model, SchemaRegistry};
//!
//! struct Message;
//!
//! impl Model for Message {
//!     const MODEL_NAME: &'static str = "Message";
//!
//!     fn fields() -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new("Body", "String", r#"db:"body""#)];
//!         FIELDS
//!     }
//! }
//!
//! let registry = SchemaRegistry::new();
//! registry.register::<Message>();
//! assert!(registry.is_registered::<Message>());
//! assert_eq!(registry.table_meta::<Message>().unwrap().table_name, "messages");
//! ```

use super::meta_model::{Model, TableMeta};
use crate::error::{OrmError, Result};
use crate::logging::log_registry_operation;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_tables: usize,
    pub total_columns: usize,
    pub tables: Vec<String>,
}

/// Read-mostly cache of model schemas
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    tables: RwLock<HashMap<String, Arc<TableMeta>>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model, deriving its table metadata.
    ///
    /// Registering the same model again replaces the entry with identical
    /// metadata, so repeated calls are harmless.
    pub fn register<M: Model>(&self) -> Arc<TableMeta> {
        let meta = Arc::new(TableMeta::from_model::<M>());

        let mut tables = self.tables.write();
        let replaced = tables
            .insert(meta.table_name.clone(), Arc::clone(&meta))
            .is_some();
        drop(tables);

        let details = format!("{} columns", meta.len());
        log_registry_operation(
            "register",
            M::MODEL_NAME,
            &meta.table_name,
            if replaced { "replaced" } else { "registered" },
            Some(&details),
        );
        meta
    }

    /// Metadata for a registered model
    pub fn table_meta<M: Model>(&self) -> Result<Arc<TableMeta>> {
        let table = M::table_name();
        match self.table_meta_by_name(&table) {
            Some(meta) => Ok(meta),
            None => {
                debug!(model = M::MODEL_NAME, table = %table, "Lookup of unregistered model");
                Err(OrmError::UnregisteredModel {
                    model: M::MODEL_NAME.to_string(),
                    table,
                })
            }
        }
    }

    pub fn table_meta_by_name(&self, table: &str) -> Option<Arc<TableMeta>> {
        self.tables.read().get(table).cloned()
    }

    pub fn is_registered<M: Model>(&self) -> bool {
        self.tables.read().contains_key(&M::table_name())
    }

    /// Registered table names, sorted
    pub fn registered_tables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn stats(&self) -> RegistryStats {
        let tables = self.tables.read();
        let mut names: Vec<String> = tables.keys().cloned().collect();
        names.sort();

        RegistryStats {
            total_tables: tables.len(),
            total_columns: tables.values().map(|meta| meta.len()).sum(),
            tables: names,
        }
    }

    /// Drop every registration
    pub fn clear(&self) {
        self.tables.write().clear();
        debug!("Cleared schema registry");
    }
}
