//! Owned adjacency-list graph with an edge builder and JSON loading.

use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contract::SearchGraph;
use crate::error::SearchError;
use crate::node::Cost;

/// Adjacency lists keyed by state.
///
/// JSON form: `{"A": [["B", 1], ["C", 2]], "B": []}`. Neighbor order within each
/// list is preserved; key order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyGraph<S: Eq + Hash> {
    edges: HashMap<S, Vec<(S, Cost)>>,
}

impl<S: Eq + Hash + Clone> AdjacencyGraph<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Register `state` as a key with no outgoing edges (if not present).
    pub fn add_state(&mut self, state: S) -> &mut Self {
        self.edges.entry(state).or_default();
        self
    }

    /// Append a directed edge. `from` becomes a key; `to` does not.
    pub fn add_edge(&mut self, from: S, to: S, cost: Cost) -> &mut Self {
        self.edges.entry(from).or_default().push((to, cost));
        self
    }

    #[must_use]
    pub fn contains_state(&self, state: &S) -> bool {
        self.edges.contains_key(state)
    }

    /// Iterate over keys in unspecified order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.edges.keys()
    }

    /// Cost of the first `from -> to` edge, if any.
    #[must_use]
    pub fn edge_cost(&self, from: &S, to: &S) -> Option<Cost> {
        self.neighbors(from)
            .iter()
            .find(|(n, _)| n == to)
            .map(|(_, c)| *c)
    }
}

impl<S: Eq + Hash + Clone> Default for AdjacencyGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> From<HashMap<S, Vec<(S, Cost)>>> for AdjacencyGraph<S> {
    fn from(edges: HashMap<S, Vec<(S, Cost)>>) -> Self {
        Self { edges }
    }
}

impl<S: Eq + Hash> FromIterator<(S, Vec<(S, Cost)>)> for AdjacencyGraph<S> {
    fn from_iter<I: IntoIterator<Item = (S, Vec<(S, Cost)>)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<S: Eq + Hash> SearchGraph<S> for AdjacencyGraph<S> {
    fn neighbors(&self, state: &S) -> &[(S, Cost)] {
        self.edges.neighbors(state)
    }

    fn state_count(&self) -> usize {
        self.edges.len()
    }
}

impl AdjacencyGraph<String> {
    /// Parse the JSON adjacency form.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedGraph`] if `text` is not an object of
    /// `[neighbor, integer_cost]` lists.
    pub fn from_json_str(text: &str) -> Result<Self, SearchError> {
        serde_json::from_str(text).map_err(|e| SearchError::MalformedGraph {
            detail: e.to_string(),
        })
    }

    /// Read and parse a JSON adjacency file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedGraph`] if the file cannot be read or
    /// does not parse.
    pub fn from_json_file(path: &Path) -> Result<Self, SearchError> {
        let text = std::fs::read_to_string(path).map_err(|e| SearchError::MalformedGraph {
            detail: format!("{}: {e}", path.display()),
        })?;
        Self::from_json_str(&text)
    }
}
