//! Short constructors for building filter trees.
//!
//! ```rust
//! use little_orm::query_builder::{col, lit};
//!
//! let filter = col("Email").eq(lit("a@b.com")).and(col("Name").is_not_null());
//! ```

use super::expression::{BinaryExpr, ColumnExpr, Expr, LiteralExpr, TernaryExpr, UnaryExpr};
use super::operators::Operator;
use serde_json::Value;

/// Column reference by logical field name
pub fn col(name: impl Into<String>) -> Expr {
    ColumnExpr::new(name).into()
}

pub fn lit(value: impl Into<Value>) -> Expr {
    LiteralExpr::new(value).into()
}

pub fn unary(operator: Operator, operand: Expr) -> Expr {
    UnaryExpr::new(operator, operand).into()
}

pub fn binary(operator: Operator, left: Expr, right: Expr) -> Expr {
    BinaryExpr::new(operator, left, right).into()
}

pub fn between(expr: Expr, low: Expr, high: Expr) -> Expr {
    TernaryExpr::new(expr, low, high).into()
}

/// Left fold with `AND`; `None` when `exprs` is empty
pub fn and_all(exprs: impl IntoIterator<Item = Expr>) -> Option<Expr> {
    fold(Operator::And, exprs)
}

/// Left fold with `OR`; `None` when `exprs` is empty
pub fn or_all(exprs: impl IntoIterator<Item = Expr>) -> Option<Expr> {
    fold(Operator::Or, exprs)
}

fn fold(operator: Operator, exprs: impl IntoIterator<Item = Expr>) -> Option<Expr> {
    exprs
        .into_iter()
        .reduce(|acc, next| binary(operator, acc, next))
}

#[allow(clippy::should_implement_trait)]
impl Expr {
    pub fn eq(self, other: Expr) -> Expr {
        binary(Operator::Eq, self, other)
    }

    pub fn not_eq(self, other: Expr) -> Expr {
        binary(Operator::NotEq, self, other)
    }

    pub fn gt(self, other: Expr) -> Expr {
        binary(Operator::Gt, self, other)
    }

    pub fn lt(self, other: Expr) -> Expr {
        binary(Operator::Lt, self, other)
    }

    pub fn gte(self, other: Expr) -> Expr {
        binary(Operator::Gte, self, other)
    }

    pub fn lte(self, other: Expr) -> Expr {
        binary(Operator::Lte, self, other)
    }

    pub fn like(self, pattern: Expr) -> Expr {
        binary(Operator::Like, self, pattern)
    }

    /// `(self IN ?)` with the whole list bound as one array argument
    pub fn in_list<V: Into<Value>>(self, values: impl IntoIterator<Item = V>) -> Expr {
        let list = Value::Array(values.into_iter().map(Into::into).collect());
        binary(Operator::In, self, lit(list))
    }

    pub fn not_in<V: Into<Value>>(self, values: impl IntoIterator<Item = V>) -> Expr {
        let list = Value::Array(values.into_iter().map(Into::into).collect());
        binary(Operator::NotIn, self, lit(list))
    }

    pub fn and(self, other: Expr) -> Expr {
        binary(Operator::And, self, other)
    }

    pub fn or(self, other: Expr) -> Expr {
        binary(Operator::Or, self, other)
    }

    pub fn is_null(self) -> Expr {
        unary(Operator::IsNull, self)
    }

    pub fn is_not_null(self) -> Expr {
        unary(Operator::IsNotNull, self)
    }

    pub fn not(self) -> Expr {
        unary(Operator::Not, self)
    }

    pub fn between(self, low: Expr, high: Expr) -> Expr {
        between(self, low, high)
    }
}
