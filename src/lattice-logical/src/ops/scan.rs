//! Scan operator for reading graph elements.

use serde::{Deserialize, Serialize};

use lattice_trees::NodeMemo;

use super::LogicalOp;

/// How a scan reads its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanKind {
    /// Full scan over elements carrying the label.
    Label,
    /// Index-backed scan over elements carrying the label.
    Index,
}

/// Scan operator, the entry point of every plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanOp {
    /// Optional label filter; `None` scans everything.
    pub label: Option<String>,
    /// Access path.
    pub kind: ScanKind,
    #[serde(skip)]
    pub(crate) memo: NodeMemo<LogicalOp>,
}

impl ScanOp {
    /// Scan elements carrying a label.
    pub fn nodes(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            kind: ScanKind::Label,
            memo: NodeMemo::new(),
        }
    }

    /// Scan every element.
    pub fn all() -> Self {
        Self {
            label: None,
            kind: ScanKind::Label,
            memo: NodeMemo::new(),
        }
    }

    /// Index-backed scan over a label.
    pub fn indexed(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            kind: ScanKind::Index,
            memo: NodeMemo::new(),
        }
    }

    /// Replace the access path.
    #[must_use]
    pub fn with_kind(mut self, kind: ScanKind) -> Self {
        self.kind = kind;
        self
    }
}
