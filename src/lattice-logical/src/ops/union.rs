//! Union operator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lattice_trees::NodeMemo;

use super::LogicalOp;

/// Union operator: concatenate the rows of every branch.
///
/// The branch list is a single variadic child slot, so a rewrite may
/// change how many branches there are, as long as at least one remains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnionOp {
    /// Branches, in order.
    pub inputs: Vec<Arc<LogicalOp>>,
    /// Whether to remove duplicates (UNION vs UNION ALL).
    pub distinct: bool,
    #[serde(skip)]
    pub(crate) memo: NodeMemo<LogicalOp>,
}

impl UnionOp {
    /// Create a UNION ALL (preserves duplicates).
    pub fn all(inputs: Vec<Arc<LogicalOp>>) -> Self {
        Self {
            inputs,
            distinct: false,
            memo: NodeMemo::new(),
        }
    }

    /// Create a UNION DISTINCT (removes duplicates).
    pub fn distinct(inputs: Vec<Arc<LogicalOp>>) -> Self {
        Self {
            inputs,
            distinct: true,
            memo: NodeMemo::new(),
        }
    }
}
