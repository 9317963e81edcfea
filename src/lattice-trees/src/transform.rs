//! Rule-based tree transformation.
//!
//! A rewrite rule is a partial function over nodes: it returns
//! `Ok(Some(replacement))` for shapes it matches and `Ok(None)` to let a
//! node pass through unchanged. Both traversal orders consume the
//! existing tree's structure and apply the rule at most once per node
//! per pass, so a pass always terminates.
//!
//! Transforms recurse one frame per tree level, bounded by realistic
//! plan depths; `size`/`height` are the operations required to stay
//! iterative for degenerate depths.

use std::sync::Arc;

use common_error::LatticeResult;

use crate::TreeNode;

/// Apply `rule` to every node in the subtree, bottom-up.
///
/// Children are transformed first, the current node is rebuilt with the
/// transformed children, and the rule is applied to the rebuilt node.
/// When nothing below changed and the rule does not match, the original
/// `Arc` is returned, so callers can detect a no-op pass by pointer
/// identity.
pub fn transform_up<T, F>(node: &Arc<T>, rule: &mut F) -> LatticeResult<Arc<T>>
where
    T: TreeNode,
    F: FnMut(&T) -> LatticeResult<Option<T>>,
{
    let children = node.children()?;
    let mut new_children = Vec::with_capacity(children.len());
    let mut changed = false;
    for child in children.iter() {
        let transformed = transform_up(child, rule)?;
        if !Arc::ptr_eq(&transformed, child) {
            changed = true;
        }
        new_children.push(transformed);
    }

    let rebuilt = if changed {
        Arc::new(node.with_new_children(new_children)?)
    } else {
        Arc::clone(node)
    };

    match rule(rebuilt.as_ref())? {
        Some(replacement) => Ok(Arc::new(replacement)),
        None => Ok(rebuilt),
    }
}

/// Apply `rule` to every node in the subtree, top-down.
///
/// The rule is applied to the current node first; recursion then
/// descends into the replacement's children (or the original's, when the
/// rule did not match), rebuilding on the way back only where something
/// changed.
pub fn transform_down<T, F>(node: &Arc<T>, rule: &mut F) -> LatticeResult<Arc<T>>
where
    T: TreeNode,
    F: FnMut(&T) -> LatticeResult<Option<T>>,
{
    let current = match rule(node.as_ref())? {
        Some(replacement) => Arc::new(replacement),
        None => Arc::clone(node),
    };

    let children = current.children()?;
    let mut new_children = Vec::with_capacity(children.len());
    let mut changed = false;
    for child in children.iter() {
        let transformed = transform_down(child, rule)?;
        if !Arc::ptr_eq(&transformed, child) {
            changed = true;
        }
        new_children.push(transformed);
    }

    if changed {
        Ok(Arc::new(current.with_new_children(new_children)?))
    } else {
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestNode;

    fn increment_rule(node: &TestNode) -> LatticeResult<Option<TestNode>> {
        // Matches every node; bumps the numeric field exactly once.
        Ok(Some(node.clone().with_n(node.n + 1)))
    }

    fn sample_tree() -> Arc<TestNode> {
        Arc::new(TestNode::binary(
            "root",
            TestNode::unary("mid", TestNode::leaf("deep")),
            TestNode::leaf("shallow"),
        ))
    }

    #[test]
    fn test_up_and_down_apply_rule_once_per_node() {
        let tree = sample_tree();
        let up = transform_up(&tree, &mut increment_rule).unwrap();
        let down = transform_down(&tree, &mut increment_rule).unwrap();

        let mut total_up = 0;
        up.for_each(&mut |node| total_up += node.n).unwrap();
        let mut total_down = 0;
        down.for_each(&mut |node| total_down += node.n).unwrap();

        // Four nodes, each incremented exactly once by either order.
        assert_eq!(total_up, 4);
        assert_eq!(total_down, 4);
        assert_eq!(up.as_ref(), down.as_ref());
    }

    #[test]
    fn test_non_matching_pass_returns_same_instance() {
        let tree = sample_tree();
        let mut no_match = |_: &TestNode| Ok(None);
        let up = transform_up(&tree, &mut no_match).unwrap();
        let down = transform_down(&tree, &mut no_match).unwrap();
        assert!(Arc::ptr_eq(&up, &tree));
        assert!(Arc::ptr_eq(&down, &tree));
    }

    #[test]
    fn test_unchanged_subtrees_are_shared() {
        let tree = sample_tree();
        let mut relabel_root = |node: &TestNode| {
            if node.label == "root" {
                Ok(Some(node.clone().relabel("new_root")))
            } else {
                Ok(None)
            }
        };
        let rewritten = transform_down(&tree, &mut relabel_root).unwrap();
        assert_eq!(rewritten.label, "new_root");

        // The untouched subtrees are the same allocations as before.
        let old_children = tree.children().unwrap();
        let new_children = rewritten.children().unwrap();
        for (old, new) in old_children.iter().zip(new_children.iter()) {
            assert!(Arc::ptr_eq(old, new));
        }
    }

    #[test]
    fn test_down_recurses_into_replacement() {
        // Replacing "mid" with a node of a different label whose child is
        // new must still transform the new child.
        let tree = sample_tree();
        let mut rule = |node: &TestNode| {
            if node.label == "mid" {
                Ok(Some(TestNode::unary("swapped", TestNode::leaf("inner"))))
            } else if node.label == "inner" {
                Ok(Some(node.clone().relabel("inner_rewritten")))
            } else {
                Ok(None)
            }
        };
        let rewritten = transform_down(&tree, &mut rule).unwrap();
        assert!(rewritten
            .contains_tree(&TestNode::leaf("inner_rewritten"))
            .unwrap());
    }

    #[test]
    fn test_up_sees_rebuilt_children() {
        // Bottom-up: by the time the rule sees a parent, its children are
        // already transformed.
        let tree = sample_tree();
        let mut rule = |node: &TestNode| {
            if node.label == "deep" {
                Ok(Some(node.clone().relabel("deep_rewritten")))
            } else if node.label == "mid" {
                // The rebuilt "mid" already holds the rewritten child.
                let child = &node.children()?[0];
                assert_eq!(child.label, "deep_rewritten");
                Ok(None)
            } else {
                Ok(None)
            }
        };
        let rewritten = transform_up(&tree, &mut rule).unwrap();
        assert!(rewritten
            .contains_tree(&TestNode::leaf("deep_rewritten"))
            .unwrap());
    }
}
