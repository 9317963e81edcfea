//! Randomized structural properties of the tree framework.

use std::sync::Arc;

use proptest::prelude::*;

use lattice_trees::{map_tree, testing::TestNode, transform_down, transform_up, TreeNode};

fn arb_tree() -> impl Strategy<Value = TestNode> {
    let leaf = "[a-z]{1,6}".prop_map(|label| TestNode::leaf(label));
    leaf.prop_recursive(6, 48, 4, |inner| {
        prop_oneof![
            (0..1000i64, inner.clone())
                .prop_map(|(n, child)| TestNode::unary("unary", child).with_n(n)),
            (inner.clone(), inner.clone())
                .prop_map(|(left, right)| TestNode::binary("binary", left, right)),
            prop::collection::vec(inner, 1..4)
                .prop_map(|children| TestNode::variadic("variadic", children)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_size_consistency(tree in arb_tree()) {
        let children = tree.children().unwrap();
        let child_total: usize = children.iter().map(|c| c.size().unwrap()).sum();
        prop_assert_eq!(tree.size().unwrap(), 1 + child_total);
        if children.is_empty() {
            prop_assert_eq!(tree.size().unwrap(), 1);
        }
    }

    #[test]
    fn prop_height_consistency(tree in arb_tree()) {
        let children = tree.children().unwrap();
        let tallest = children.iter().map(|c| c.height().unwrap()).max().unwrap_or(0);
        prop_assert_eq!(tree.height().unwrap(), 1 + tallest);
        if children.is_empty() {
            prop_assert_eq!(tree.height().unwrap(), 1);
        }
    }

    #[test]
    fn prop_noop_rebuild_is_identity(tree in arb_tree()) {
        let children = tree.children().unwrap().as_ref().clone();
        let rebuilt = tree.with_new_children(children).unwrap();
        prop_assert_eq!(rebuilt, tree);
    }

    #[test]
    fn prop_identity_map_roundtrips(tree in arb_tree()) {
        let tree = Arc::new(tree);
        let mapped: Arc<TestNode> = map_tree(&tree, &mut |node| Ok(node.clone())).unwrap();
        prop_assert_eq!(mapped.as_ref(), tree.as_ref());
    }

    #[test]
    fn prop_children_are_contained(tree in arb_tree()) {
        for child in tree.children().unwrap().iter() {
            prop_assert!(tree.contains_child(child).unwrap());
            prop_assert!(tree.contains_tree(child).unwrap());
        }
    }

    #[test]
    fn prop_every_reachable_node_is_contained(tree in arb_tree()) {
        let mut reachable = Vec::new();
        tree.for_each(&mut |node| reachable.push(node.clone())).unwrap();
        for node in &reachable {
            prop_assert!(tree.contains_tree(node).unwrap());
        }
        prop_assert_eq!(reachable.len(), tree.size().unwrap());
    }

    #[test]
    fn prop_transform_orders_agree(tree in arb_tree()) {
        let tree = Arc::new(tree);
        let mut bump = |node: &TestNode| Ok(Some(node.clone().with_n(node.n + 1)));
        let up = transform_up(&tree, &mut bump).unwrap();
        let down = transform_down(&tree, &mut bump).unwrap();
        prop_assert_eq!(up.as_ref(), down.as_ref());

        let mut before = 0i64;
        tree.for_each(&mut |node| before += node.n).unwrap();
        let mut after = 0i64;
        up.for_each(&mut |node| after += node.n).unwrap();
        prop_assert_eq!(after - before, tree.size().unwrap() as i64);
    }

    #[test]
    fn prop_non_matching_transform_is_pointer_stable(tree in arb_tree()) {
        let tree = Arc::new(tree);
        let up = transform_up(&tree, &mut |_| Ok(None)).unwrap();
        let down = transform_down(&tree, &mut |_| Ok(None)).unwrap();
        prop_assert!(Arc::ptr_eq(&up, &tree));
        prop_assert!(Arc::ptr_eq(&down, &tree));
    }
}
