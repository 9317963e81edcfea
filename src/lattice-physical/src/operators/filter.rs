//! Physical filter operator.

use std::sync::Arc;

use lattice_logical::Expr;
use lattice_trees::NodeMemo;

use super::PhysicalOp;

/// Row filter over a single input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterExec {
    /// Operator producing the rows to filter.
    pub input: Arc<PhysicalOp>,
    /// Boolean predicate.
    pub predicate: Expr,
    pub(crate) memo: NodeMemo<PhysicalOp>,
}

impl FilterExec {
    /// Create a filter.
    pub fn new(input: impl Into<Arc<PhysicalOp>>, predicate: Expr) -> Self {
        Self {
            input: input.into(),
            predicate,
            memo: NodeMemo::new(),
        }
    }
}
