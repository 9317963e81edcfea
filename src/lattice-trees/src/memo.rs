//! Per-instance memo slots for derived tree attributes.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

/// Memoized derived attributes of a single node instance.
///
/// Every node embeds one of these; the framework fills the slots lazily
/// the first time children, size, height, or the child set are asked for.
/// The slots are a pure performance optimization: writes are idempotent,
/// the first write wins, and a racing recomputation is discarded.
///
/// The memo is invisible to a node's derived semantics: cloning a node
/// yields a fresh empty memo, and two nodes compare and hash as equal
/// regardless of which slots are filled, so node types can keep deriving
/// `Clone`, `PartialEq`, `Eq`, and `Hash` structurally.
pub struct NodeMemo<T> {
    pub(crate) children: OnceLock<Arc<Vec<Arc<T>>>>,
    pub(crate) child_set: OnceLock<Arc<HashSet<Arc<T>>>>,
    pub(crate) size: OnceLock<usize>,
    pub(crate) height: OnceLock<usize>,
}

impl<T> NodeMemo<T> {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self {
            children: OnceLock::new(),
            child_set: OnceLock::new(),
            size: OnceLock::new(),
            height: OnceLock::new(),
        }
    }
}

impl<T> Default for NodeMemo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NodeMemo<T> {
    fn clone(&self) -> Self {
        // A clone recomputes on demand; carrying the slots over would be
        // valid but ties the clone's laziness to the original's.
        Self::new()
    }
}

impl<T> PartialEq for NodeMemo<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for NodeMemo<T> {}

impl<T> Hash for NodeMemo<T> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<T> fmt::Debug for NodeMemo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NodeMemo")
    }
}
