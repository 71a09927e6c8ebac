//! # Registry Infrastructure
//!
//! Schema metadata for storable record types.
//!
//! ## Overview
//!
//! Rust has no runtime reflection, so record types describe their storage
//! layout statically through the [`Model`] trait. The [`SchemaRegistry`]
//! turns those descriptions into [`TableMeta`] and caches them for the query
//! builders.
//!
//! ## Architecture
//!
//! ```text
//! Registry Infrastructure
//! ├── meta_model        (Model trait, FieldDescriptor, ColumnMeta, TableMeta)
//! └── schema_registry   (RwLock-guarded TableMeta cache)
//! ```

pub mod meta_model;
pub mod schema_registry;

pub use meta_model::{lookup_tag, ColumnMeta, FieldDescriptor, Model, TableMeta, DB_TAG_KEY};
pub use schema_registry::{RegistryStats, SchemaRegistry};
