use super::expression::SqlWithArgs;
use crate::error::{OrmError, Result};
use std::fmt;
use std::str::FromStr;

/// Common surface of every statement builder: produce SQL text with `?`
/// placeholders and the arguments that bind to them, in order.
pub trait QueryBuilder: fmt::Debug + Send {
    fn build(&mut self) -> Result<SqlWithArgs>;

    fn kind(&self) -> BuilderKind;

    fn table(&self) -> &str;
}

/// Statement kinds the factory can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderKind {
    Select,
    Insert,
}

impl BuilderKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BuilderKind::Select => "select",
            BuilderKind::Insert => "insert",
        }
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuilderKind {
    type Err = OrmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "select" => Ok(BuilderKind::Select),
            "insert" => Ok(BuilderKind::Insert),
            _ => Err(OrmError::UnsupportedBuilderKind(s.to_string())),
        }
    }
}
