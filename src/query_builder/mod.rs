//! # Query Builder System
//!
//! Schema-validated SQL generation with positional `?` placeholders.
//!
//! ## Overview
//!
//! Filters are expression trees built from column references, literal
//! values and operators. A builder validates each tree against the table
//! metadata held in the [`SchemaRegistry`](crate::registry::SchemaRegistry),
//! rewriting logical field names to physical column names, and then lowers
//! it to SQL text plus an ordered argument list.
//!
//! ## Key Components
//!
//! - [`expression`] - Expression tree nodes and their SQL lowering
//! - [`operators`] - Operator and sort-order vocabularies
//! - [`helpers`] - Short constructors (`col`, `lit`, ...) and combinators
//! - [`validate`] - Column resolution against table metadata
//! - [`select_builder`] - SELECT assembly: projection, WHERE, ORDER BY, LIMIT/OFFSET
//! - [`insert_builder`] - Single-row INSERT assembly
//! - [`factory`] - Builder creation by [`BuilderKind`]
//! - [`pagination`] - LIMIT/OFFSET handling
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use little_orm::query_builder::{col, lit, SelectBuilder};
//!
//! let (sql, args) = SelectBuilder::new::<User>(&registry)?
//!     .select(&["Name", "Email"])?
//!     .filter(col("Name").like(lit("%ann%")).and(col("ID").gt(lit(10))))?
//!     .order_desc("id")?
//!     .paginate(2, 25)
//!     .build()?;
//!
//! // SELECT name, email FROM users WHERE (name LIKE ? AND id > ?)
//! //     ORDER BY id DESC LIMIT 25 OFFSET 25
//! ```
//!
//! ## Safety
//!
//! Literal values never appear in the SQL text; they are returned as
//! arguments for the driver to bind. Column names in filters and projections
//! are checked against the registered schema before they reach the SQL.

pub mod builder;
pub mod expression;
pub mod factory;
pub mod helpers;
pub mod insert_builder;
pub mod operators;
pub mod pagination;
pub mod select_builder;
pub mod validate;

pub use builder::{BuilderKind, QueryBuilder};
pub use expression::{
    BinaryExpr, ColumnExpr, Expr, LiteralExpr, SqlWithArgs, TernaryExpr, UnaryExpr, PLACEHOLDER,
};
pub use factory::BuilderFactory;
pub use helpers::{and_all, between, binary, col, lit, or_all, unary};
pub use insert_builder::InsertBuilder;
pub use operators::{Operator, OperatorClass, SortOrder};
pub use pagination::Pagination;
pub use select_builder::{OrderBy, SelectBuilder};
pub use validate::ExprValidator;
