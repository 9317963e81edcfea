//! Configurable fixture nodes for exercising the framework.
//!
//! `TestNode` declares whatever field list it is handed, including
//! deliberately invalid ones, which is exactly what the extraction and
//! rebuild tests need. Downstream crates use it too, so it is a regular
//! public module rather than test-only code.

use common_error::{LatticeError, LatticeResult};

use crate::{NodeField, NodeMemo, TreeNode};

/// A tree node whose field list is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestNode {
    /// Display label, also used as the node name in diagnostics.
    pub label: String,
    /// A numeric payload for rewrite-counting tests.
    pub n: i64,
    fields: Vec<NodeField<TestNode>>,
    reject_rebuild: bool,
    memo: NodeMemo<TestNode>,
}

impl TestNode {
    /// A node with an explicit field list, valid or not.
    pub fn with_fields(label: impl Into<String>, fields: Vec<NodeField<TestNode>>) -> Self {
        Self {
            label: label.into(),
            n: 0,
            fields,
            reject_rebuild: false,
            memo: NodeMemo::new(),
        }
    }

    /// A childless node.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::with_fields(label, vec![])
    }

    /// A node with one child.
    pub fn unary(label: impl Into<String>, child: TestNode) -> Self {
        Self::with_fields(label, vec![NodeField::child(child)])
    }

    /// A node with two single-child fields.
    pub fn binary(label: impl Into<String>, left: TestNode, right: TestNode) -> Self {
        Self::with_fields(
            label,
            vec![NodeField::child(left), NodeField::child(right)],
        )
    }

    /// A node with one child-sequence field.
    pub fn variadic(label: impl Into<String>, children: Vec<TestNode>) -> Self {
        Self::with_fields(
            label,
            vec![NodeField::children(
                children.into_iter().map(std::sync::Arc::new),
            )],
        )
    }

    /// Replace the numeric payload.
    #[must_use]
    pub fn with_n(mut self, n: i64) -> Self {
        self.n = n;
        self
    }

    /// Replace the label.
    #[must_use]
    pub fn relabel(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Make `from_node_fields` reject every rebuild, for testing how
    /// constructor rejections surface.
    #[must_use]
    pub fn rejecting(mut self) -> Self {
        self.reject_rebuild = true;
        self
    }
}

impl TreeNode for TestNode {
    type Arg = i64;

    fn node_name(&self) -> &str {
        &self.label
    }

    fn node_fields(&self) -> Vec<NodeField<Self>> {
        self.fields.clone()
    }

    fn from_node_fields(&self, fields: Vec<NodeField<Self>>) -> LatticeResult<Self> {
        if self.reject_rebuild {
            return Err(LatticeError::reconstruction(
                "TestNode configured to reject rebuilds",
            ));
        }
        Ok(Self {
            label: self.label.clone(),
            n: self.n,
            fields,
            reject_rebuild: false,
            memo: NodeMemo::new(),
        })
    }

    fn memo(&self) -> &NodeMemo<Self> {
        &self.memo
    }
}
