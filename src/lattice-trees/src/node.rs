//! The tree node capability contract.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use common_error::LatticeResult;

use crate::{extract, rebuild, traverse, NodeField, NodeMemo};

/// Capability contract implemented by every tree node family.
///
/// A node family (expression, logical operator, physical operator)
/// implements the four required methods; everything else — children,
/// size, height, containment, rebuilding — is derived by the framework
/// from the declared field list alone. Operations are self-typed: a
/// rebuild or transform over a `LogicalOp` hands back a `LogicalOp`.
///
/// Nodes are immutable after construction. Children are held behind
/// [`Arc`], so rewritten trees share unchanged subtrees with their
/// predecessors and a no-op rewrite is observable by pointer identity.
pub trait TreeNode: Sized + Clone + Eq + Hash + fmt::Debug {
    /// Ordinary (non-child) constructor argument carried through
    /// extraction and rebuild opaquely.
    type Arg: Clone + Eq + Hash + fmt::Debug;

    /// Stable name for diagnostics and plan rendering.
    fn node_name(&self) -> &str;

    /// The ordered constructor field list, the same list
    /// [`from_node_fields`](Self::from_node_fields) accepts.
    fn node_fields(&self) -> Vec<NodeField<Self>>;

    /// Reconstruct this node kind from a full replacement field list, in
    /// declaration order. Implementations should reject lists that do not
    /// fit their constructor with an error naming the offending slot.
    fn from_node_fields(&self, fields: Vec<NodeField<Self>>) -> LatticeResult<Self>;

    /// The per-instance memo slot backing the derived attribute caches.
    fn memo(&self) -> &NodeMemo<Self>;

    /// Ordered children, computed once per instance and memoized.
    fn children(&self) -> LatticeResult<Arc<Vec<Arc<Self>>>> {
        if let Some(children) = self.memo().children.get() {
            return Ok(Arc::clone(children));
        }
        let extracted = Arc::new(extract::extract_children(self)?);
        Ok(Arc::clone(self.memo().children.get_or_init(|| extracted)))
    }

    /// Deduplicated view of [`children`](Self::children), memoized, for
    /// amortized O(1) direct-child containment checks.
    fn child_set(&self) -> LatticeResult<Arc<HashSet<Arc<Self>>>> {
        if let Some(set) = self.memo().child_set.get() {
            return Ok(Arc::clone(set));
        }
        let set = Arc::new(self.children()?.iter().cloned().collect::<HashSet<_>>());
        Ok(Arc::clone(self.memo().child_set.get_or_init(|| set)))
    }

    /// Whether this node has no children.
    fn is_leaf(&self) -> LatticeResult<bool> {
        Ok(self.children()?.is_empty())
    }

    /// Rebuild this node with the given replacement children substituted
    /// into its child slots, leaving ordinary fields untouched.
    fn with_new_children(&self, new_children: Vec<Arc<Self>>) -> LatticeResult<Self> {
        rebuild::rebuild(self, new_children)
    }

    /// Number of nodes in this subtree, memoized.
    ///
    /// Computed with an explicit stack, never one call frame per tree
    /// level, so plans thousands of levels deep are safe.
    fn size(&self) -> LatticeResult<usize> {
        traverse::size_of(self)
    }

    /// Height of this subtree (a leaf has height 1), memoized. Iterative,
    /// like [`size`](Self::size).
    fn height(&self) -> LatticeResult<usize> {
        traverse::height_of(self)
    }

    /// Visit this node, then each child's subtree in declared order
    /// (pre-order). For pure side-effecting traversal; does not build a
    /// new tree.
    fn for_each<F: FnMut(&Self)>(&self, f: &mut F) -> LatticeResult<()> {
        traverse::for_each(self, f)
    }

    /// Whether `other` structurally equals this node or any node
    /// reachable from it.
    fn contains_tree(&self, other: &Self) -> LatticeResult<bool> {
        traverse::contains_tree(self, other)
    }

    /// Whether `other` is a direct child of this node, tested through the
    /// memoized child set.
    fn contains_child(&self, other: &Self) -> LatticeResult<bool> {
        Ok(self.child_set()?.contains(other))
    }
}
