//! Project operator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lattice_trees::NodeMemo;

use crate::expr::{col, Expr, ExprKind};

use super::LogicalOp;

/// One output column of a projection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Projection {
    /// Expression computing the column.
    pub expr: Expr,
    /// Optional output alias.
    pub alias: Option<String>,
}

impl Projection {
    /// Project an expression under its own name.
    pub fn new(expr: Expr) -> Self {
        Self { expr, alias: None }
    }

    /// Project an expression under an alias.
    pub fn aliased(expr: Expr, alias: impl Into<String>) -> Self {
        Self {
            expr,
            alias: Some(alias.into()),
        }
    }

    /// The name this column is visible under downstream.
    pub fn output_name(&self) -> String {
        if let Some(alias) = &self.alias {
            return alias.clone();
        }
        match self.expr.kind() {
            ExprKind::Column(column) => column.display_name(),
            _ => self.expr.to_string(),
        }
    }

    /// Whether this projection passes a column through unrenamed.
    pub fn is_passthrough(&self) -> bool {
        self.alias.is_none() && matches!(self.expr.kind(), ExprKind::Column(_))
    }
}

/// Project operator: compute the output columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectOp {
    /// The operator producing the rows to project.
    pub input: Arc<LogicalOp>,
    /// Output columns, in order.
    pub projections: Vec<Projection>,
    #[serde(skip)]
    pub(crate) memo: NodeMemo<LogicalOp>,
}

impl ProjectOp {
    /// Create a projection over an input.
    pub fn new(input: impl Into<Arc<LogicalOp>>, projections: Vec<Projection>) -> Self {
        Self {
            input: input.into(),
            projections,
            memo: NodeMemo::new(),
        }
    }

    /// Project plain columns by name.
    pub fn columns<S: Into<String>>(
        input: impl Into<Arc<LogicalOp>>,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            input,
            names
                .into_iter()
                .map(|name| Projection::new(col(name.into())))
                .collect(),
        )
    }
}
