//! Physical projection operator.

use std::sync::Arc;

use lattice_logical::Projection;
use lattice_trees::NodeMemo;

use super::PhysicalOp;

/// Column projection over a single input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectExec {
    /// Operator producing the rows to project.
    pub input: Arc<PhysicalOp>,
    /// Output columns, in order.
    pub projections: Vec<Projection>,
    pub(crate) memo: NodeMemo<PhysicalOp>,
}

impl ProjectExec {
    /// Create a projection.
    pub fn new(input: impl Into<Arc<PhysicalOp>>, projections: Vec<Projection>) -> Self {
        Self {
            input: input.into(),
            projections,
            memo: NodeMemo::new(),
        }
    }
}
