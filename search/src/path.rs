//! Path reconstruction from a terminal node.

use crate::node::SearchNode;

/// Walk parent links from `node` back to the origin and return the states in
/// traversal order (origin first, `node.state()` last).
///
/// Terminates because every parent was constructed strictly before its child.
#[must_use]
pub fn reconstruct_path<S: Clone>(node: &SearchNode<S>) -> Vec<S> {
    let mut path = vec![node.state().clone()];
    let mut cursor = node.parent();
    while let Some(parent) = cursor {
        path.push(parent.state().clone());
        cursor = parent.parent();
    }
    path.reverse();
    path
}
