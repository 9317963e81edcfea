//! Physical expand operator.

use std::sync::Arc;

use lattice_logical::Direction;
use lattice_trees::NodeMemo;

use super::PhysicalOp;

/// Adjacency-list expansion from bound elements to their neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpandExec {
    /// Operator producing the elements to expand from.
    pub input: Arc<PhysicalOp>,
    /// Optional relationship type filter.
    pub rel_type: Option<String>,
    /// Traversal direction.
    pub direction: Direction,
    pub(crate) memo: NodeMemo<PhysicalOp>,
}

impl ExpandExec {
    /// Create an expand.
    pub fn new(
        input: impl Into<Arc<PhysicalOp>>,
        rel_type: Option<String>,
        direction: Direction,
    ) -> Self {
        Self {
            input: input.into(),
            rel_type,
            direction,
            memo: NodeMemo::new(),
        }
    }
}
