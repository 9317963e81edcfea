//! Physical limit operator.

use std::sync::Arc;

use lattice_trees::NodeMemo;

use super::PhysicalOp;

/// Row truncation over a single input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LimitExec {
    /// Operator producing the rows to truncate.
    pub input: Arc<PhysicalOp>,
    /// Maximum number of rows to emit.
    pub limit: usize,
    pub(crate) memo: NodeMemo<PhysicalOp>,
}

impl LimitExec {
    /// Create a limit.
    pub fn new(input: impl Into<Arc<PhysicalOp>>, limit: usize) -> Self {
        Self {
            input: input.into(),
            limit,
            memo: NodeMemo::new(),
        }
    }
}
