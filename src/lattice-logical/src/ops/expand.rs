//! Expand operator for traversing relationships.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lattice_trees::NodeMemo;

use super::LogicalOp;

/// Traversal direction of an expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow relationships from source to target.
    Outgoing,
    /// Follow relationships from target to source.
    Incoming,
    /// Follow relationships in either direction.
    Both,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outgoing => write!(f, "->"),
            Self::Incoming => write!(f, "<-"),
            Self::Both => write!(f, "--"),
        }
    }
}

/// Expand operator: step from bound elements to their neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpandOp {
    /// The operator producing the elements to expand from.
    pub input: Arc<LogicalOp>,
    /// Optional relationship type filter; `None` follows every type.
    pub rel_type: Option<String>,
    /// Traversal direction.
    pub direction: Direction,
    #[serde(skip)]
    pub(crate) memo: NodeMemo<LogicalOp>,
}

impl ExpandOp {
    /// Expand along every relationship type.
    pub fn new(input: impl Into<Arc<LogicalOp>>, direction: Direction) -> Self {
        Self {
            input: input.into(),
            rel_type: None,
            direction,
            memo: NodeMemo::new(),
        }
    }

    /// Expand along a single relationship type.
    pub fn typed(
        input: impl Into<Arc<LogicalOp>>,
        rel_type: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            input: input.into(),
            rel_type: Some(rel_type.into()),
            direction,
            memo: NodeMemo::new(),
        }
    }
}
