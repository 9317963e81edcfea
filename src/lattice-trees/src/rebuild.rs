//! Node reconstruction with replaced children.

use std::sync::Arc;

use common_error::{LatticeError, LatticeResult};

use crate::{NodeField, TreeNode};

/// Rebuild `node` with `new_children` substituted into its child slots.
///
/// The replacement list may differ in length from the current children
/// only if the node carries a child sequence; fixed-arity nodes require
/// an exact length match. When the replacement is element-wise identical
/// to the current children (pointer identity, falling back to structural
/// equality), the node is returned unchanged so callers can detect no-op
/// rewrites by identity.
pub(crate) fn rebuild<T: TreeNode>(node: &T, new_children: Vec<Arc<T>>) -> LatticeResult<T> {
    let current = node.children()?;
    if new_children.len() == current.len()
        && new_children
            .iter()
            .zip(current.iter())
            .all(|(new, old)| Arc::ptr_eq(new, old) || new == old)
    {
        return Ok(node.clone());
    }

    let fields = node.node_fields();
    let mut rebuilt = Vec::with_capacity(fields.len());
    let mut cursor = 0usize;

    for field in fields {
        match field {
            NodeField::Value(value) => rebuilt.push(NodeField::Value(value)),
            NodeField::Child(_) => {
                let Some(next) = new_children.get(cursor) else {
                    return Err(LatticeError::arity(format!(
                        "{}: {} replacement children are too few for the node's shape",
                        node.node_name(),
                        new_children.len()
                    )));
                };
                rebuilt.push(NodeField::Child(Arc::clone(next)));
                cursor += 1;
            }
            NodeField::Seq(items) => {
                if field_is_child_seq(&items) {
                    // A child sequence swallows every remaining entry and
                    // must stay non-empty, or a later extraction could not
                    // tell it apart from an ordinary empty list.
                    if cursor >= new_children.len() {
                        return Err(LatticeError::arity(format!(
                            "{}: empty replacement for a child sequence field",
                            node.node_name()
                        )));
                    }
                    let rest = new_children[cursor..]
                        .iter()
                        .map(|child| crate::SeqItem::Child(Arc::clone(child)))
                        .collect();
                    cursor = new_children.len();
                    rebuilt.push(NodeField::Seq(rest));
                } else {
                    rebuilt.push(NodeField::Seq(items));
                }
            }
        }
    }

    if cursor != new_children.len() {
        return Err(LatticeError::arity(format!(
            "{}: {} replacement children do not fit a node consuming {}",
            node.node_name(),
            new_children.len(),
            cursor
        )));
    }

    node.from_node_fields(rebuilt).map_err(|cause| {
        LatticeError::reconstruction(format!(
            "{} rejected a rebuilt argument list of {} children: {cause}",
            node.node_name(),
            new_children.len()
        ))
    })
}

fn field_is_child_seq<T: TreeNode>(items: &[crate::SeqItem<T>]) -> bool {
    matches!(items.first(), Some(crate::SeqItem::Child(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestNode;

    fn filter_like(predicate: i64, child: TestNode) -> TestNode {
        TestNode::with_fields(
            "Filter",
            vec![NodeField::Value(predicate), NodeField::child(child)],
        )
    }

    #[test]
    fn test_noop_rebuild_returns_equal_node() {
        let tree = filter_like(7, TestNode::leaf("scan"));
        let children = tree.children().unwrap().as_ref().clone();
        let rebuilt = tree.with_new_children(children).unwrap();
        assert_eq!(rebuilt, tree);
    }

    #[test]
    fn test_rebuild_replaces_child_and_keeps_values() {
        let tree = filter_like(7, TestNode::leaf("scan"));
        let rebuilt = tree
            .with_new_children(vec![Arc::new(TestNode::leaf("index_scan"))])
            .unwrap();

        let fields = rebuilt.node_fields();
        assert_eq!(fields[0].clone().into_value(), Some(7));
        let children = rebuilt.children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].label, "index_scan");
    }

    #[test]
    fn test_fixed_arity_rejects_extra_children() {
        let tree = filter_like(7, TestNode::leaf("scan"));
        let err = tree
            .with_new_children(vec![
                Arc::new(TestNode::leaf("a")),
                Arc::new(TestNode::leaf("b")),
            ])
            .unwrap_err();
        assert!(matches!(err, LatticeError::ArityError(_)));
    }

    #[test]
    fn test_fixed_arity_rejects_missing_children() {
        let tree = filter_like(7, TestNode::leaf("scan"));
        let err = tree.with_new_children(vec![]).unwrap_err();
        assert!(matches!(err, LatticeError::ArityError(_)));
    }

    #[test]
    fn test_sequence_node_shrinks_and_grows() {
        let tree = TestNode::variadic(
            "Union",
            vec![
                TestNode::leaf("a"),
                TestNode::leaf("b"),
                TestNode::leaf("c"),
            ],
        );

        let smaller = tree
            .with_new_children(vec![
                Arc::new(TestNode::leaf("a")),
                Arc::new(TestNode::leaf("b")),
            ])
            .unwrap();
        assert_eq!(smaller.children().unwrap().len(), 2);

        let larger = smaller
            .with_new_children(
                (0..4)
                    .map(|i| Arc::new(TestNode::leaf(format!("n{i}"))))
                    .collect(),
            )
            .unwrap();
        assert_eq!(larger.children().unwrap().len(), 4);
    }

    #[test]
    fn test_sequence_node_rejects_empty_replacement() {
        let tree = TestNode::variadic("Union", vec![TestNode::leaf("a"), TestNode::leaf("b")]);
        let err = tree.with_new_children(vec![]).unwrap_err();
        assert!(matches!(err, LatticeError::ArityError(_)));
    }

    #[test]
    fn test_constructor_rejection_surfaces_as_reconstruction_error() {
        let tree = filter_like(7, TestNode::leaf("scan")).rejecting();
        let err = tree
            .with_new_children(vec![Arc::new(TestNode::leaf("other"))])
            .unwrap_err();
        assert!(matches!(err, LatticeError::ReconstructionError(_)));
        assert!(err.to_string().contains("Filter"));
    }
}
