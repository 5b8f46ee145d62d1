//! Read-only graph contract consumed by the search driver.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::node::Cost;

/// A read-only adjacency view.
///
/// # Contract
///
/// - `neighbors` returns outgoing `(neighbor, edge_cost)` pairs in a stable
///   order; the driver pushes them in exactly that order.
/// - A state that is not a key has no outgoing edges (empty slice), never an
///   error.
/// - `state_count` is the number of keys, including keys with no edges. It
///   sizes the phase-one budget.
/// - The view must not change while a search borrows it.
pub trait SearchGraph<S> {
    fn neighbors(&self, state: &S) -> &[(S, Cost)];

    fn state_count(&self) -> usize;
}

impl<S, H> SearchGraph<S> for HashMap<S, Vec<(S, Cost)>, H>
where
    S: Eq + Hash,
    H: BuildHasher,
{
    fn neighbors(&self, state: &S) -> &[(S, Cost)] {
        self.get(state).map(Vec::as_slice).unwrap_or_default()
    }

    fn state_count(&self) -> usize {
        self.len()
    }
}

impl<S: Ord> SearchGraph<S> for BTreeMap<S, Vec<(S, Cost)>> {
    fn neighbors(&self, state: &S) -> &[(S, Cost)] {
        self.get(state).map(Vec::as_slice).unwrap_or_default()
    }

    fn state_count(&self) -> usize {
        self.len()
    }
}

impl<S, G: SearchGraph<S> + ?Sized> SearchGraph<S> for &G {
    fn neighbors(&self, state: &S) -> &[(S, Cost)] {
        (**self).neighbors(state)
    }

    fn state_count(&self) -> usize {
        (**self).state_count()
    }
}
