#![allow(clippy::doc_markdown)] // Allow technical terms like SQL dialect names in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Little ORM
//!
//! A small SQL query builder that validates filters against registered model
//! schemas.
//!
//! ## Overview
//!
//! Models describe their fields and `db` tags through the
//! [`Model`](registry::Model) trait. Registering a model derives its table
//! metadata (table name, logical-to-physical column mapping). Builders look
//! that metadata up, validate the columns used in projections, filters and
//! orderings, and produce SQL text with `?` placeholders together with the
//! ordered list of argument values to bind.
//!
//! Executing queries is out of scope: the output is meant to be handed to
//! whatever database driver the application already uses.
//!
//! ## Module Organization
//!
//! - [`registry`] - Model metadata and the schema registry
//! - [`query_builder`] - Expression trees, validation and statement builders
//! - [`config`] - Builder configuration with environment and YAML layers
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured `tracing` setup and helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use little_orm::query_builder::{col, lit, SelectBuilder};
//! use little_orm::registry::{FieldDescriptor, Model, SchemaRegistry};
//!
//! struct User;
//!
//! impl Model for User {
//!     const MODEL_NAME: &'static str = "User";
//!
//!     fn fields() -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] = &[
//!             FieldDescriptor::new("ID", "i64", r#"db:"id""#),
//!             FieldDescriptor::new("Name", "String", r#"db:"name""#),
//!             FieldDescriptor::new("Email", "String", r#"db:"email""#),
//!         ];
//!         FIELDS
//!     }
//! }
//!
//! # fn main() -> little_orm::Result<()> {
//! let registry = SchemaRegistry::new();
//! registry.register::<User>();
//!
//! let (sql, args) = SelectBuilder::new::<User>(&registry)?
//!     .filter(col("ID").eq(lit(1)))?
//!     .build()?;
//!
//! assert_eq!(sql, "SELECT id, name, email FROM users WHERE id = ?");
//! assert_eq!(args.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # All tests, including property tests
//! cargo bench --features benchmarks
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod query_builder;
pub mod registry;

pub use config::{ConfigLoader, OrderByPolicy, QueryBuilderConfig};
pub use error::{OrmError, Result};
pub use query_builder::{
    BuilderFactory, BuilderKind, Expr, InsertBuilder, QueryBuilder, SelectBuilder, SortOrder,
};
pub use registry::{FieldDescriptor, Model, SchemaRegistry, TableMeta};
