//! Limit operator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lattice_trees::NodeMemo;

use super::LogicalOp;

/// Limit operator: keep at most the first `limit` rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LimitOp {
    /// The operator producing the rows to truncate.
    pub input: Arc<LogicalOp>,
    /// Maximum number of rows to emit.
    pub limit: usize,
    #[serde(skip)]
    pub(crate) memo: NodeMemo<LogicalOp>,
}

impl LimitOp {
    /// Create a limit over an input.
    pub fn new(input: impl Into<Arc<LogicalOp>>, limit: usize) -> Self {
        Self {
            input: input.into(),
            limit,
            memo: NodeMemo::new(),
        }
    }
}
