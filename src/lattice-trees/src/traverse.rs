//! Generic traversal over tree nodes.

use std::sync::{Arc, OnceLock};

use common_error::{LatticeError, LatticeResult};

use crate::{NodeMemo, TreeNode};

/// Compute a bottom-up usize metric for a subtree with an explicit
/// two-phase stack, filling each visited node's memo slot on the way out.
///
/// Shared subtrees are computed once: a node whose slot is already filled
/// is skipped on entry, and a racing fill on exit is discarded.
fn bottom_up_metric<T: TreeNode>(
    root: &Arc<T>,
    slot: fn(&NodeMemo<T>) -> &OnceLock<usize>,
    combine: fn(&[usize]) -> usize,
) -> LatticeResult<usize> {
    if let Some(value) = slot(root.memo()).get() {
        return Ok(*value);
    }

    let mut stack: Vec<(Arc<T>, bool)> = vec![(Arc::clone(root), false)];
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            let children = node.children()?;
            let mut child_values = Vec::with_capacity(children.len());
            for child in children.iter() {
                let value = slot(child.memo()).get().copied().ok_or_else(|| {
                    LatticeError::internal(
                        "post-order metric visited a node before its children were computed",
                    )
                })?;
                child_values.push(value);
            }
            let value = combine(&child_values);
            slot(node.memo()).get_or_init(|| value);
        } else if slot(node.memo()).get().is_none() {
            stack.push((Arc::clone(&node), true));
            for child in node.children()?.iter() {
                stack.push((Arc::clone(child), false));
            }
        }
    }

    slot(root.memo())
        .get()
        .copied()
        .ok_or_else(|| LatticeError::internal("bottom-up metric left the root slot unfilled"))
}

pub(crate) fn size_of<T: TreeNode>(node: &T) -> LatticeResult<usize> {
    if let Some(size) = node.memo().size.get() {
        return Ok(*size);
    }
    let mut total = 1usize;
    for child in node.children()?.iter() {
        total += bottom_up_metric(child, |memo| &memo.size, |sizes| {
            1 + sizes.iter().sum::<usize>()
        })?;
    }
    Ok(*node.memo().size.get_or_init(|| total))
}

pub(crate) fn height_of<T: TreeNode>(node: &T) -> LatticeResult<usize> {
    if let Some(height) = node.memo().height.get() {
        return Ok(*height);
    }
    let mut tallest_child = 0usize;
    for child in node.children()?.iter() {
        let height = bottom_up_metric(child, |memo| &memo.height, |heights| {
            1 + heights.iter().max().copied().unwrap_or(0)
        })?;
        tallest_child = tallest_child.max(height);
    }
    Ok(*node.memo().height.get_or_init(|| 1 + tallest_child))
}

pub(crate) fn for_each<T: TreeNode, F: FnMut(&T)>(node: &T, f: &mut F) -> LatticeResult<()> {
    f(node);
    let mut stack: Vec<Arc<T>> = node.children()?.iter().rev().cloned().collect();
    while let Some(next) = stack.pop() {
        f(&next);
        for child in next.children()?.iter().rev() {
            stack.push(Arc::clone(child));
        }
    }
    Ok(())
}

pub(crate) fn contains_tree<T: TreeNode>(node: &T, other: &T) -> LatticeResult<bool> {
    if node == other {
        return Ok(true);
    }
    let mut stack: Vec<Arc<T>> = node.children()?.iter().rev().cloned().collect();
    while let Some(next) = stack.pop() {
        if next.as_ref() == other {
            return Ok(true);
        }
        for child in next.children()?.iter().rev() {
            stack.push(Arc::clone(child));
        }
    }
    Ok(false)
}

/// Map a tree into another node family, preserving structure.
///
/// Leaves map to `f(leaf)` directly; interior nodes map every child
/// first, then rebuild `f(node)` with the mapped children, so `f` only
/// has to produce a node of the right arity, not wire up subtrees.
/// Recursion here is one frame per tree level, bounded by realistic plan
/// depths (unlike `size`/`height`, which must stay iterative).
pub fn map_tree<T, U, F>(node: &Arc<T>, f: &mut F) -> LatticeResult<Arc<U>>
where
    T: TreeNode,
    U: TreeNode,
    F: FnMut(&T) -> LatticeResult<U>,
{
    let children = node.children()?;
    if children.is_empty() {
        return Ok(Arc::new(f(node.as_ref())?));
    }
    let mut mapped_children = Vec::with_capacity(children.len());
    for child in children.iter() {
        mapped_children.push(map_tree(child, f)?);
    }
    let mapped = f(node.as_ref())?;
    Ok(Arc::new(mapped.with_new_children(mapped_children)?))
}
