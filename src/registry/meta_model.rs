//! # Schema Metadata
//!
//! Static schema description for record types and the table/column metadata
//! derived from it.
//!
//! A record type describes itself by implementing [`Model`]: a model name and
//! a list of [`FieldDescriptor`]s, each carrying a struct-tag style string
//! (`db:"email" json:"email"`). Only fields with a non-empty `db` tag become
//! columns.
//!
//! ```rust
//! use little_orm::registry::{FieldDescriptor, Model, TableMeta};
//!
//! struct User;
//!
//! impl Model for User {
//!     const MODEL_NAME: &'static str = "User";
//!
//!     fn fields() -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] = &[
//!             FieldDescriptor::new("ID", "i64", r#"db:"id""#),
//!             FieldDescriptor::new("Email", "String", r#"db:"email" json:"email""#),
//!             FieldDescriptor::new("Session", "String", ""),
//!         ];
//!         FIELDS
//!     }
//! }
//!
//! let meta = TableMeta::from_model::<User>();
//! assert_eq!(meta.table_name, "users");
//! assert_eq!(meta.physical_names(), vec!["id", "email"]);
//! ```

use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

/// Key of the struct-tag entry holding the physical column name
pub const DB_TAG_KEY: &str = "db";

/// Description of one field of a record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub rust_type: &'static str,
    pub tag: &'static str,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, rust_type: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            rust_type,
            tag,
        }
    }

    /// Physical column name from the `db` tag, if present and non-empty
    pub fn db_tag(&self) -> Option<Cow<'static, str>> {
        lookup_tag(self.tag, DB_TAG_KEY).filter(|value| !value.is_empty())
    }
}

/// Static schema description implemented by every storable record type
pub trait Model {
    /// Type name the table name is derived from (e.g. `User`)
    const MODEL_NAME: &'static str;

    /// Every field of the record, tagged or not, in declaration order
    fn fields() -> &'static [FieldDescriptor];

    /// Storage table name: lower-cased model name with an `s` suffix
    fn table_name() -> String {
        format!("{}s", Self::MODEL_NAME.to_lowercase())
    }
}

/// Metadata for one storable field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMeta {
    /// Physical column name
    pub db_tag: String,
    /// Logical field name
    pub name: String,
    /// Declared field type
    pub field_type: String,
    /// Raw tag string
    pub tag: String,
}

impl ColumnMeta {
    fn from_field(field: &FieldDescriptor, db_tag: &str) -> Self {
        Self {
            db_tag: db_tag.to_string(),
            name: field.name.to_string(),
            field_type: field.rust_type.to_string(),
            tag: field.tag.to_string(),
        }
    }
}

/// Table name plus logical-name keyed column metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableMeta {
    pub table_name: String,
    pub columns: HashMap<String, ColumnMeta>,
    column_order: Vec<String>,
}

impl TableMeta {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: HashMap::new(),
            column_order: Vec::new(),
        }
    }

    /// Build metadata from a model's static description, skipping untagged fields
    pub fn from_model<M: Model>() -> Self {
        let mut meta = Self::new(M::table_name());
        for field in M::fields() {
            if let Some(db_tag) = field.db_tag() {
                meta.insert_column(ColumnMeta::from_field(field, &db_tag));
            }
        }
        meta
    }

    /// Insert or replace a column, keeping the first-seen position
    pub fn insert_column(&mut self, column: ColumnMeta) {
        if !self.columns.contains_key(&column.name) {
            self.column_order.push(column.name.clone());
        }
        self.columns.insert(column.name.clone(), column);
    }

    /// Column metadata for a logical field name
    pub fn column(&self, logical_name: &str) -> Option<&ColumnMeta> {
        self.columns.get(logical_name)
    }

    /// Physical name for a logical field name
    pub fn physical_name(&self, logical_name: &str) -> Option<&str> {
        self.column(logical_name).map(|c| c.db_tag.as_str())
    }

    pub fn has_physical_name(&self, physical_name: &str) -> bool {
        self.columns.values().any(|c| c.db_tag == physical_name)
    }

    /// Columns in declaration order
    pub fn columns_in_order(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.column_order
            .iter()
            .filter_map(move |name| self.columns.get(name))
    }

    pub fn physical_names(&self) -> Vec<String> {
        self.columns_in_order().map(|c| c.db_tag.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Find `key:"value"` in a struct-tag style string.
///
/// Inside a value a backslash escapes the next character, so `\"` and `\\`
/// yield `"` and `\`. Values without escapes are borrowed from `tag`.
pub fn lookup_tag<'a>(tag: &'a str, key: &str) -> Option<Cow<'a, str>> {
    let mut rest = tag.trim_start();
    while !rest.is_empty() {
        let colon = rest.find(':')?;
        let name = &rest[..colon];
        let quoted = rest[colon + 1..].strip_prefix('"')?;
        let close = closing_quote(quoted)?;
        if name == key {
            return Some(unescape(&quoted[..close]));
        }
        rest = quoted[close + 1..].trim_start();
    }
    None
}

/// Byte index of the first unescaped `"`
fn closing_quote(quoted: &str) -> Option<usize> {
    let mut escaped = false;
    for (index, ch) in quoted.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(index),
            _ => {}
        }
    }
    None
}

fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            value.push(chars.next().unwrap_or('\\'));
        } else {
            value.push(ch);
        }
    }
    Cow::Owned(value)
}
