//! Ordered constructor field slots.
//!
//! A node declares its structure as the ordered list of slots its
//! constructor takes. The framework never inspects a node's concrete
//! shape; everything it knows comes from this declaration.

use std::sync::Arc;

use crate::TreeNode;

/// One slot in a node's ordered constructor field list.
///
/// A slot is in exactly one of three categories: an ordinary value the
/// framework treats as opaque, a single child, or an ordered sequence.
/// A sequence counts as a *child sequence* iff it is non-empty and its
/// first item is a child; an empty sequence is always an ordinary value,
/// since there is no way to tell the element kind of an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeField<T: TreeNode> {
    /// Ordinary non-child constructor value, opaque to the framework.
    Value(T::Arg),
    /// A single child node.
    Child(Arc<T>),
    /// An ordered sequence of items, each a child or an ordinary value.
    Seq(Vec<SeqItem<T>>),
}

/// An item inside a [`NodeField::Seq`] slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeqItem<T: TreeNode> {
    /// Ordinary value element.
    Value(T::Arg),
    /// Child element.
    Child(Arc<T>),
}

impl<T: TreeNode> NodeField<T> {
    /// Wrap a node as a single-child slot.
    pub fn child(node: impl Into<Arc<T>>) -> Self {
        Self::Child(node.into())
    }

    /// Build a child-sequence slot from an iterator of children.
    pub fn children(nodes: impl IntoIterator<Item = Arc<T>>) -> Self {
        Self::Seq(nodes.into_iter().map(SeqItem::Child).collect())
    }

    /// Whether this slot is a child sequence (non-empty, child-headed).
    pub fn is_child_seq(&self) -> bool {
        match self {
            Self::Seq(items) => matches!(items.first(), Some(SeqItem::Child(_))),
            _ => false,
        }
    }

    /// Unwrap a single-child slot.
    pub fn into_child(self) -> Option<Arc<T>> {
        match self {
            Self::Child(child) => Some(child),
            _ => None,
        }
    }

    /// Unwrap an ordinary value slot.
    pub fn into_value(self) -> Option<T::Arg> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Unwrap a sequence slot whose items are all children.
    ///
    /// An empty sequence unwraps to an empty list; a sequence containing
    /// any non-child item yields `None`.
    pub fn into_children(self) -> Option<Vec<Arc<T>>> {
        match self {
            Self::Seq(items) => items
                .into_iter()
                .map(|item| match item {
                    SeqItem::Child(child) => Some(child),
                    SeqItem::Value(_) => None,
                })
                .collect(),
            _ => None,
        }
    }
}
