use crate::error::{OrmError, Result};
use std::fmt;
use std::str::FromStr;

/// Every operator an expression node can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    Lt,
    Gte,
    Lte,
    Like,
    In,
    NotIn,
    And,
    Or,
    IsNull,
    IsNotNull,
    Not,
    Between,
}

/// Lowering shape of an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    /// `left OP right`, never parenthesized
    Comparison,
    /// `(left OP right)`
    Membership,
    /// `(left OP right)`
    Logical,
    /// `operand OP`
    Postfix,
    /// `OP (operand)`
    Prefix,
    /// `subject OP low AND high`
    Range,
}

impl Operator {
    pub const ALL: [Operator; 15] = [
        Operator::Eq,
        Operator::NotEq,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::Like,
        Operator::In,
        Operator::NotIn,
        Operator::And,
        Operator::Or,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::Not,
        Operator::Between,
    ];

    pub const fn as_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Not => "NOT",
            Operator::Between => "BETWEEN",
        }
    }

    pub const fn class(&self) -> OperatorClass {
        match self {
            Operator::Eq
            | Operator::NotEq
            | Operator::Gt
            | Operator::Lt
            | Operator::Gte
            | Operator::Lte
            | Operator::Like => OperatorClass::Comparison,
            Operator::In | Operator::NotIn => OperatorClass::Membership,
            Operator::And | Operator::Or => OperatorClass::Logical,
            Operator::IsNull | Operator::IsNotNull => OperatorClass::Postfix,
            Operator::Not => OperatorClass::Prefix,
            Operator::Between => OperatorClass::Range,
        }
    }

    /// Operators valid in a binary node
    pub const fn is_binary(&self) -> bool {
        matches!(
            self.class(),
            OperatorClass::Comparison | OperatorClass::Membership | OperatorClass::Logical
        )
    }

    /// Operators valid in a unary node
    pub const fn is_unary(&self) -> bool {
        matches!(self.class(), OperatorClass::Postfix | OperatorClass::Prefix)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Operator {
    type Err = OrmError;

    /// Case-insensitive; `<>` is accepted for `!=` and runs of whitespace
    /// inside keywords are collapsed.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        let op = match normalized.to_uppercase().as_str() {
            "=" => Operator::Eq,
            "!=" | "<>" => Operator::NotEq,
            ">" => Operator::Gt,
            "<" => Operator::Lt,
            ">=" => Operator::Gte,
            "<=" => Operator::Lte,
            "LIKE" => Operator::Like,
            "IN" => Operator::In,
            "NOT IN" => Operator::NotIn,
            "AND" => Operator::And,
            "OR" => Operator::Or,
            "IS NULL" => Operator::IsNull,
            "IS NOT NULL" => Operator::IsNotNull,
            "NOT" => Operator::Not,
            "BETWEEN" => Operator::Between,
            _ => return Err(OrmError::unsupported_operator(s, "operator text")),
        };
        Ok(op)
    }
}

/// Direction of an ORDER BY entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for SortOrder {
    type Err = OrmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(OrmError::unsupported_operator(s, "sort order")),
        }
    }
}
