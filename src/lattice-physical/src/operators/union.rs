//! Physical union operator.

use std::sync::Arc;

use lattice_trees::NodeMemo;

use super::PhysicalOp;

/// Branch concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnionExec {
    /// Branches, in order.
    pub inputs: Vec<Arc<PhysicalOp>>,
    /// Whether duplicates are kept (UNION ALL) rather than removed.
    pub all: bool,
    pub(crate) memo: NodeMemo<PhysicalOp>,
}

impl UnionExec {
    /// Create a union.
    pub fn new(inputs: Vec<Arc<PhysicalOp>>, all: bool) -> Self {
        Self {
            inputs,
            all,
            memo: NodeMemo::new(),
        }
    }
}
