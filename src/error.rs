use thiserror::Error;

/// Errors raised while describing schemas or building queries.
///
/// Every variant is a caller mistake rather than a transient failure: the
/// operation that produced it is aborted and no partial SQL is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrmError {
    #[error("column '{column}' not found in table '{table}'")]
    UnknownColumn { column: String, table: String },

    #[error("invalid expression: {message}")]
    InvalidExpression { message: String },

    #[error("unsupported operator '{operator}' in {context}")]
    UnsupportedOperator { operator: String, context: String },

    #[error("model '{model}' is not registered (expected table '{table}')")]
    UnregisteredModel { model: String, table: String },

    #[error("unsupported builder kind: {0}")]
    UnsupportedBuilderKind(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl OrmError {
    pub fn unknown_column(column: impl Into<String>, table: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
            table: table.into(),
        }
    }

    pub fn invalid_expression(message: impl Into<String>) -> Self {
        Self::InvalidExpression {
            message: message.into(),
        }
    }

    pub fn unsupported_operator(operator: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            operator: operator.into(),
            context: context.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrmError>;
