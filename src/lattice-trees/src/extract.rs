//! Child extraction from declared field lists.

use std::sync::Arc;

use common_error::{LatticeError, LatticeResult};

use crate::{NodeField, SeqItem, TreeNode};

/// Compute a node's ordered children from its declared field list.
///
/// Fields are scanned left to right; sequence elements are flattened in
/// place, so the result order equals declaration order. The placement
/// invariants are enforced here: at most one child sequence, no single
/// child after it, and no sequence mixing children with non-children.
pub(crate) fn extract_children<T: TreeNode>(node: &T) -> LatticeResult<Vec<Arc<T>>> {
    let mut children = Vec::new();
    let mut sequence_used = false;

    for (position, field) in node.node_fields().into_iter().enumerate() {
        match field {
            NodeField::Value(_) => {}
            NodeField::Child(child) => {
                if sequence_used {
                    return Err(LatticeError::structural(format!(
                        "{}: single child field at position {position} after a child \
                         sequence; child sequences must come last among children-bearing fields",
                        node.node_name()
                    )));
                }
                children.push(child);
            }
            NodeField::Seq(items) => {
                // Empty and non-child-headed sequences are ordinary values.
                let Some(first) = items.first() else { continue };
                if !matches!(first, SeqItem::Child(_)) {
                    continue;
                }
                if sequence_used {
                    return Err(LatticeError::structural(format!(
                        "{}: more than one child sequence (second at position {position})",
                        node.node_name()
                    )));
                }
                sequence_used = true;
                for item in items {
                    match item {
                        SeqItem::Child(child) => children.push(child),
                        SeqItem::Value(value) => {
                            return Err(LatticeError::structural(format!(
                                "{}: sequence at position {position} mixes children and \
                                 non-children; found {value:?}, expected a sequence that is \
                                 either empty or entirely children",
                                node.node_name()
                            )));
                        }
                    }
                }
            }
        }
    }

    Ok(children)
}
