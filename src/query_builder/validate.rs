use super::expression::{ColumnExpr, Expr};
use crate::error::{OrmError, Result};
use crate::registry::TableMeta;
use std::sync::Arc;
use tracing::debug;

/// Resolves logical column names in a filter tree to physical names.
///
/// Columns are rewritten in place and marked resolved, so running the
/// validator again over the same tree leaves it untouched. A column that
/// arrives already resolved must name a physical column of this table,
/// otherwise it is rejected like an unknown logical name. Empty operand
/// slots are skipped here; they are reported when the tree is lowered.
#[derive(Debug, Clone)]
pub struct ExprValidator {
    table_meta: Arc<TableMeta>,
}

impl ExprValidator {
    pub fn new(table_meta: Arc<TableMeta>) -> Self {
        Self { table_meta }
    }

    pub fn table_meta(&self) -> &TableMeta {
        &self.table_meta
    }

    /// Walk `expr` depth-first, stopping at the first unknown column
    pub fn validate_and_transform(&self, expr: &mut Expr) -> Result<()> {
        match expr {
            Expr::Column(column) => self.resolve_column(column),
            Expr::Literal(_) => Ok(()),
            Expr::Unary(unary) => self.visit(&mut unary.operand),
            Expr::Binary(binary) => {
                self.visit(&mut binary.left)?;
                self.visit(&mut binary.right)
            }
            Expr::Ternary(ternary) => {
                self.visit(&mut ternary.expr)?;
                self.visit(&mut ternary.low)?;
                self.visit(&mut ternary.high)
            }
        }
    }

    fn visit(&self, slot: &mut Option<Box<Expr>>) -> Result<()> {
        match slot {
            Some(expr) => self.validate_and_transform(expr.as_mut()),
            None => Ok(()),
        }
    }

    fn resolve_column(&self, column: &mut ColumnExpr) -> Result<()> {
        // Resolved columns must still name a physical column of this table
        if column.is_resolved() {
            return if self.table_meta.has_physical_name(&column.name) {
                Ok(())
            } else {
                Err(OrmError::unknown_column(
                    &column.name,
                    &self.table_meta.table_name,
                ))
            };
        }

        let physical = self
            .table_meta
            .physical_name(&column.name)
            .ok_or_else(|| OrmError::unknown_column(&column.name, &self.table_meta.table_name))?;

        debug!(
            table = %self.table_meta.table_name,
            field = %column.name,
            column = physical,
            "Resolved column"
        );
        column.resolve(physical);
        Ok(())
    }
}
