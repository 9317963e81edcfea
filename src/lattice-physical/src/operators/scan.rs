//! Physical scan operators.

use lattice_trees::NodeMemo;

use super::PhysicalOp;

/// Full scan over elements carrying a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeScanExec {
    /// Optional label filter; `None` scans everything.
    pub label: Option<String>,
    pub(crate) memo: NodeMemo<PhysicalOp>,
}

impl NodeScanExec {
    /// Create a node scan.
    pub fn new(label: Option<String>) -> Self {
        Self {
            label,
            memo: NodeMemo::new(),
        }
    }
}

/// Index-backed scan over a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexScanExec {
    /// The indexed label.
    pub label: String,
    pub(crate) memo: NodeMemo<PhysicalOp>,
}

impl IndexScanExec {
    /// Create an index scan.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            memo: NodeMemo::new(),
        }
    }
}
