//! Physical plan structure.

use std::sync::Arc;

use common_error::LatticeResult;
use lattice_trees::TreeNode;

use crate::operators::PhysicalOp;

/// An executable plan: an immutable tree of physical operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalPlan {
    root: Arc<PhysicalOp>,
}

impl PhysicalPlan {
    /// Create a plan with the given root operator.
    pub fn new(root: PhysicalOp) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Create a plan from an already shared root.
    pub fn from_root(root: Arc<PhysicalOp>) -> Self {
        Self { root }
    }

    /// The root operator.
    pub fn root(&self) -> &PhysicalOp {
        &self.root
    }

    /// The shared root, for handing to rewrites.
    pub fn root_arc(&self) -> &Arc<PhysicalOp> {
        &self.root
    }

    /// Number of operators in the plan.
    pub fn operator_count(&self) -> LatticeResult<usize> {
        self.root.size()
    }

    /// Maximum depth of the plan tree.
    pub fn depth(&self) -> LatticeResult<usize> {
        self.root.height()
    }

    /// Generate a tree-formatted explanation of the plan.
    pub fn explain(&self) -> String {
        let mut output = String::new();
        output.push_str("Physical Plan:\n");
        output.push_str(&self.root.explain(1));
        output
    }
}

impl std::fmt::Display for PhysicalPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.explain())
    }
}
