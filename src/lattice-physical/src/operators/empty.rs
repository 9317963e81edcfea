//! Empty physical operator.

use lattice_trees::NodeMemo;

use super::PhysicalOp;

/// Produces no rows.
///
/// Also serves as the placeholder input during lowering: the planner
/// emits each physical operator with `EmptyExec` children, and the tree
/// rebuild substitutes the real lowered inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EmptyExec {
    pub(crate) memo: NodeMemo<PhysicalOp>,
}

impl EmptyExec {
    /// Create an empty operator.
    pub fn new() -> Self {
        Self::default()
    }
}
