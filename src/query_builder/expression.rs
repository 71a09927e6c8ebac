//! # Filter Expressions
//!
//! A small algebraic tree of columns, literals and operators that lowers to
//! a SQL fragment with `?` placeholders plus the argument values in
//! placeholder order.
//!
//! Lowering is pure and schema-agnostic: column names are emitted exactly as
//! stored, so a tree should pass through
//! [`ExprValidator`](super::validate::ExprValidator) first. Operand slots are
//! `Option`s so that an incomplete node can be represented; lowering rejects
//! it with [`OrmError::InvalidExpression`].

use super::operators::{Operator, OperatorClass};
use crate::error::{OrmError, Result};
use serde_json::Value;
use std::fmt;

/// A lowered fragment: SQL text plus arguments in placeholder order
pub type SqlWithArgs = (String, Vec<Value>);

/// Placeholder emitted for every literal
pub const PLACEHOLDER: &str = "?";

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(ColumnExpr),
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Ternary(TernaryExpr),
}

impl Expr {
    /// Lower to SQL text and arguments, depth-first and left to right
    pub fn to_sql(&self) -> Result<SqlWithArgs> {
        match self {
            Expr::Column(column) => Ok(column.to_sql()),
            Expr::Literal(literal) => Ok(literal.to_sql()),
            Expr::Unary(unary) => unary.to_sql(),
            Expr::Binary(binary) => binary.to_sql(),
            Expr::Ternary(ternary) => ternary.to_sql(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_sql() {
            Ok((sql, _)) => f.write_str(&sql),
            Err(_) => f.write_str("<invalid expression>"),
        }
    }
}

/// Column reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnExpr {
    pub name: String,
    resolved: bool,
}

impl ColumnExpr {
    /// A column referring to a logical field name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolved: false,
        }
    }

    /// A column already naming a physical storage column
    pub fn physical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolved: true,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Rewrite to a physical name
    pub fn resolve(&mut self, physical_name: impl Into<String>) {
        self.name = physical_name.into();
        self.resolved = true;
    }

    pub fn to_sql(&self) -> SqlWithArgs {
        (self.name.clone(), Vec::new())
    }
}

/// Bound value, always lowered to a single placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Value,
}

impl LiteralExpr {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn to_sql(&self) -> SqlWithArgs {
        (PLACEHOLDER.to_string(), vec![self.value.clone()])
    }
}

/// `IS NULL`, `IS NOT NULL` or `NOT`
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Operator,
    pub operand: Option<Box<Expr>>,
}

impl UnaryExpr {
    pub fn new(operator: Operator, operand: Expr) -> Self {
        Self {
            operator,
            operand: Some(Box::new(operand)),
        }
    }

    pub fn to_sql(&self) -> Result<SqlWithArgs> {
        let operand = required(&self.operand, "unary expression is missing its operand")?;

        match self.operator.class() {
            OperatorClass::Postfix => {
                let (sql, args) = operand.to_sql()?;
                Ok((format!("{sql} {}", self.operator), args))
            }
            OperatorClass::Prefix => {
                let (sql, args) = operand.to_sql()?;
                Ok((format!("{} ({sql})", self.operator), args))
            }
            _ => Err(OrmError::unsupported_operator(
                self.operator.as_sql(),
                "unary expression",
            )),
        }
    }
}

/// Comparison, membership or logical operation
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: Operator,
    pub left: Option<Box<Expr>>,
    pub right: Option<Box<Expr>>,
}

impl BinaryExpr {
    pub fn new(operator: Operator, left: Expr, right: Expr) -> Self {
        Self {
            operator,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Logical and membership operations are parenthesized so nesting keeps
    /// its meaning; comparisons are emitted bare.
    pub fn to_sql(&self) -> Result<SqlWithArgs> {
        let left = required(&self.left, "binary expression is missing its left operand")?;
        let right = required(&self.right, "binary expression is missing its right operand")?;

        let grouped = match self.operator.class() {
            OperatorClass::Logical | OperatorClass::Membership => true,
            OperatorClass::Comparison => false,
            _ => {
                return Err(OrmError::unsupported_operator(
                    self.operator.as_sql(),
                    "binary expression",
                ))
            }
        };

        let (left_sql, mut args) = left.to_sql()?;
        let (right_sql, right_args) = right.to_sql()?;
        args.extend(right_args);

        let sql = if grouped {
            format!("({left_sql} {} {right_sql})", self.operator)
        } else {
            format!("{left_sql} {} {right_sql}", self.operator)
        };
        Ok((sql, args))
    }
}

/// `expr BETWEEN low AND high`
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub expr: Option<Box<Expr>>,
    pub low: Option<Box<Expr>>,
    pub high: Option<Box<Expr>>,
}

impl TernaryExpr {
    pub fn new(expr: Expr, low: Expr, high: Expr) -> Self {
        Self {
            expr: Some(Box::new(expr)),
            low: Some(Box::new(low)),
            high: Some(Box::new(high)),
        }
    }

    pub fn to_sql(&self) -> Result<SqlWithArgs> {
        let expr = required(&self.expr, "BETWEEN expression is missing its subject")?;
        let low = required(&self.low, "BETWEEN expression is missing its lower bound")?;
        let high = required(&self.high, "BETWEEN expression is missing its upper bound")?;

        let (expr_sql, mut args) = expr.to_sql()?;
        let (low_sql, low_args) = low.to_sql()?;
        let (high_sql, high_args) = high.to_sql()?;
        args.extend(low_args);
        args.extend(high_args);

        Ok((
            format!("{expr_sql} {} {low_sql} AND {high_sql}", Operator::Between),
            args,
        ))
    }
}

fn required<'a>(slot: &'a Option<Box<Expr>>, message: &str) -> Result<&'a Expr> {
    slot.as_deref()
        .ok_or_else(|| OrmError::invalid_expression(message))
}

impl From<ColumnExpr> for Expr {
    fn from(column: ColumnExpr) -> Self {
        Expr::Column(column)
    }
}

impl From<LiteralExpr> for Expr {
    fn from(literal: LiteralExpr) -> Self {
        Expr::Literal(literal)
    }
}

impl From<UnaryExpr> for Expr {
    fn from(unary: UnaryExpr) -> Self {
        Expr::Unary(unary)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(binary: BinaryExpr) -> Self {
        Expr::Binary(binary)
    }
}

impl From<TernaryExpr> for Expr {
    fn from(ternary: TernaryExpr) -> Self {
        Expr::Ternary(ternary)
    }
}
