//! Filter operator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lattice_trees::NodeMemo;

use crate::expr::Expr;

use super::LogicalOp;

/// Filter operator: keep rows where the predicate holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOp {
    /// Boolean predicate over the input's columns.
    pub predicate: Expr,
    /// The operator producing the rows to filter.
    pub input: Arc<LogicalOp>,
    #[serde(skip)]
    pub(crate) memo: NodeMemo<LogicalOp>,
}

impl FilterOp {
    /// Create a filter over an input.
    pub fn new(input: impl Into<Arc<LogicalOp>>, predicate: Expr) -> Self {
        Self {
            predicate,
            input: input.into(),
            memo: NodeMemo::new(),
        }
    }
}
