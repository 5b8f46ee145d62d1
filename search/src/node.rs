//! Core search node and frontier ordering key.

use std::rc::Rc;

/// Edge, accumulated, heuristic and total cost unit.
pub type Cost = i64;

/// An immutable node in the expansion tree.
///
/// Siblings share their parent through an `Rc`; nothing holds a link downward,
/// so the ancestry chain is acyclic by construction. `total = cost + heuristic`
/// is computed once here and is the only ordering key the frontier uses.
#[derive(Debug)]
pub struct SearchNode<S> {
    state: S,
    parent: Option<Rc<SearchNode<S>>>,
    cost: Cost,
    heuristic: Cost,
    total: Cost,
    depth: u32,
}

impl<S> SearchNode<S> {
    /// Create the origin node (no parent, cost 0).
    #[must_use]
    pub fn root(state: S, heuristic: Cost) -> Self {
        Self::new(state, None, 0, heuristic)
    }

    /// Create a node from its parts. `total` and `depth` are derived here.
    #[must_use]
    pub fn new(state: S, parent: Option<Rc<SearchNode<S>>>, cost: Cost, heuristic: Cost) -> Self {
        let depth = parent.as_ref().map_or(0, |p| p.depth.saturating_add(1));
        Self {
            state,
            parent,
            cost,
            heuristic,
            total: cost.saturating_add(heuristic),
            depth,
        }
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Rc<SearchNode<S>>> {
        self.parent.as_ref()
    }

    /// Accumulated edge cost from the origin (g).
    #[must_use]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Remaining-cost estimate (h). Zero for nodes built in phase two.
    #[must_use]
    pub fn heuristic(&self) -> Cost {
        self.heuristic
    }

    /// `cost + heuristic` (f), the frontier ordering key.
    #[must_use]
    pub fn total(&self) -> Cost {
        self.total
    }

    /// Tree depth (origin = 0). Diagnostic only; never used for ordering.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Strict "less than" by total. Equal totals are unordered.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        self.total < other.total
    }
}

/// The frontier ordering key: `total` only.
///
/// No secondary tie-break component: entries with equal totals compare equal
/// and their relative order is whatever the heap's sift operations leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub total: Cost,
}

impl<S> From<&SearchNode<S>> for FrontierKey {
    fn from(node: &SearchNode<S>) -> Self {
        Self { total: node.total }
    }
}
