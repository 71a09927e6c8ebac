use super::builder::{BuilderKind, QueryBuilder};
use super::expression::{Expr, SqlWithArgs};
use super::operators::SortOrder;
use super::pagination::Pagination;
use super::validate::ExprValidator;
use crate::config::{OrderByPolicy, QueryBuilderConfig};
use crate::error::{OrmError, Result};
use crate::logging::{log_error, log_query_operation};
use crate::registry::{Model, SchemaRegistry, TableMeta};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// One ORDER BY entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortOrder,
}

impl OrderBy {
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.field, self.direction)
    }
}

/// SELECT query builder bound to one model's schema.
///
/// Projection and filter columns are given as logical field names and
/// emitted as physical column names. Setters consume and return the builder
/// so calls chain; the ones that can reject their input return `Result`.
///
/// ```rust
/// use little_orm::query_builder::{col, lit, SelectBuilder, SortOrder};
/// use little_orm::registry::{FieldDescriptor, Model, SchemaRegistry};
///
/// struct User;
///
/// impl Model for User {
///     const MODEL_NAME: &'static str = "User";
///
///     fn fields() -> &'static [FieldDescriptor] {
///         const FIELDS: &[FieldDescriptor] = &[
///             FieldDescriptor::new("ID", "i64", r#"db:"id""#),
///             FieldDescriptor::new("Email", "String", r#"db:"email""#),
///         ];
///         FIELDS
///     }
/// }
///
/// # fn main() -> Result<(), little_orm::OrmError> {
/// let registry = SchemaRegistry::new();
/// registry.register::<User>();
///
/// let (sql, args) = SelectBuilder::new::<User>(&registry)?
///     .filter(col("Email").eq(lit("a@b.com")))?
///     .order_by("id", SortOrder::Desc)?
///     .limit(10)
///     .build()?;
///
/// assert_eq!(sql, "SELECT id, email FROM users WHERE email = ? ORDER BY id DESC LIMIT 10");
/// assert_eq!(args, vec![serde_json::json!("a@b.com")]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    table: String,
    fields: Vec<String>,
    filter: Option<Expr>,
    order_by: Vec<OrderBy>,
    pagination: Pagination,
    args: Vec<Value>,
    table_meta: Arc<TableMeta>,
    validator: ExprValidator,
    config: QueryBuilderConfig,
}

impl SelectBuilder {
    /// Create a builder for a registered model, selecting every column
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
            fields: table_meta.physical_names(),
            filter: None,
            order_by: Vec::new(),
            pagination: Pagination::default(),
            args: Vec::new(),
            validator: ExprValidator::new(Arc::clone(&table_meta)),
            table_meta,
            config,
        }
    }

    /// Replace the projection with the given logical fields.
    ///
    /// An empty list leaves no explicit columns, which renders as `*`.
    pub fn select(mut self, fields: &[&str]) -> Result<Self> {
        self.fields = fields
            .iter()
            .map(|field| {
                self.table_meta
                    .physical_name(field)
                    .map(str::to_string)
                    .ok_or_else(|| OrmError::unknown_column(*field, &self.table))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// Validate `expr` against the schema and make it the filter, replacing
    /// any previous one
    pub fn filter(mut self, mut expr: Expr) -> Result<Self> {
        self.validator.validate_and_transform(&mut expr)?;
        if self.filter.is_some() {
            debug!(table = %self.table, "Replacing existing filter");
        }
        self.filter = Some(expr);
        Ok(self)
    }

    /// Append an ORDER BY entry.
    ///
    /// With [`OrderByPolicy::Permissive`] the field is used verbatim; with
    /// [`OrderByPolicy::Strict`] it must be a logical or physical column name.
    pub fn order_by(mut self, field: &str, direction: SortOrder) -> Result<Self> {
        let field = self.resolve_order_field(field)?;
        self.order_by.push(OrderBy { field, direction });
        Ok(self)
    }

    pub fn order_asc(self, field: &str) -> Result<Self> {
        self.order_by(field, SortOrder::Asc)
    }

    pub fn order_desc(self, field: &str) -> Result<Self> {
        self.order_by(field, SortOrder::Desc)
    }

    /// Set LIMIT; values of zero or less are not rendered
    pub fn limit(mut self, limit: i64) -> Self {
        self.pagination.limit = limit;
        self
    }

    /// Set OFFSET; values of zero or less are not rendered
    pub fn offset(mut self, offset: i64) -> Self {
        self.pagination.offset = offset;
        self
    }

    /// Set LIMIT and OFFSET from a 1-based page number
    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        self.pagination = Pagination::new(page, per_page);
        self
    }

    /// Compose the query and its arguments.
    ///
    /// Repeatable: the builder state is untouched apart from the cached
    /// argument list, which is recomputed from the filter on every call.
    pub fn build(&mut self) -> Result<SqlWithArgs> {
        match self.compose() {
            Ok((sql, args)) => {
                if self.config.log_queries {
                    log_query_operation("select", &self.table, &sql, args.len(), "built");
                }
                self.args = args.clone();
                Ok((sql, args))
            }
            Err(e) => {
                log_error("SelectBuilder", "build", &e.to_string(), Some(&self.table));
                Err(e)
            }
        }
    }

    fn compose(&self) -> Result<SqlWithArgs> {
        let mut sql = self.build_select_clause();
        let (where_clause, args) = self.build_where_clause()?;
        sql.push_str(&where_clause);
        sql.push_str(&self.build_order_by_clause());
        sql.push_str(&self.effective_pagination().to_sql());
        Ok((sql, args))
    }

    fn build_select_clause(&self) -> String {
        let fields = if self.fields.is_empty() {
            "*".to_string()
        } else {
            self.fields.join(", ")
        };
        format!("SELECT {fields} FROM {}", self.table)
    }

    fn build_where_clause(&self) -> Result<SqlWithArgs> {
        match &self.filter {
            Some(expr) => {
                let (sql, args) = expr.to_sql()?;
                Ok((format!(" WHERE {sql}"), args))
            }
            None => Ok((String::new(), Vec::new())),
        }
    }

    fn build_order_by_clause(&self) -> String {
        if self.order_by.is_empty() {
            return String::new();
        }

        let orders: Vec<String> = self.order_by.iter().map(OrderBy::to_sql).collect();
        format!(" ORDER BY {}", orders.join(", "))
    }

    /// Caller pagination with the configured default and maximum applied.
    ///
    /// Without a positive limit the default is used, falling back to the
    /// maximum, so a configured maximum always bounds the query.
    fn effective_pagination(&self) -> Pagination {
        let mut pagination = self.pagination;
        let max_limit = self.config.max_limit.map(i64::from);

        if pagination.effective_limit().is_none() {
            if let Some(limit) = self.config.default_limit.map(i64::from).or(max_limit) {
                pagination.limit = limit;
            }
        }

        if let Some(max_limit) = max_limit {
            if pagination.limit > max_limit {
                pagination.limit = max_limit;
            }
        }

        pagination
    }

    fn resolve_order_field(&self, field: &str) -> Result<String> {
        match self.config.order_by_policy {
            OrderByPolicy::Permissive => Ok(field.to_string()),
            OrderByPolicy::Strict => {
                if let Some(physical) = self.table_meta.physical_name(field) {
                    Ok(physical.to_string())
                } else if self.table_meta.has_physical_name(field) {
                    Ok(field.to_string())
                } else {
                    Err(OrmError::unknown_column(field, &self.table))
                }
            }
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Physical column names to be selected
    pub fn projection(&self) -> &[String] {
        &self.fields
    }

    pub fn filter_expr(&self) -> Option<&Expr> {
        self.filter.as_ref()
    }

    pub fn order_by_entries(&self) -> &[OrderBy] {
        &self.order_by
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Arguments from the most recent successful build
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn table_meta(&self) -> &TableMeta {
        &self.table_meta
    }

    pub fn config(&self) -> &QueryBuilderConfig {
        &self.config
    }
}

impl QueryBuilder for SelectBuilder {
    fn build(&mut self) -> Result<SqlWithArgs> {
        SelectBuilder::build(self)
    }

    fn kind(&self) -> BuilderKind {
        BuilderKind::Select
    }

    fn table(&self) -> &str {
        &self.table
    }
}
