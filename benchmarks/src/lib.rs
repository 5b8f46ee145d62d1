//! Shared graph generators for tandem benchmark suites.

use tandem_search::adjacency::AdjacencyGraph;
use tandem_search::node::Cost;

/// Deterministic edge weight in `1..=5` for the edge leaving `(row, col)`.
fn lattice_cost(row: u32, col: u32, salt: u32) -> Cost {
    Cost::from((row * 7 + col * 3 + salt) % 5 + 1)
}

/// Directed `width x height` lattice with right and down edges.
///
/// States are numbered row-major, so the bottom-right corner
/// `width * height - 1` is the natural goal and code-point distance
/// toward it is informative.
#[must_use]
pub fn lattice(width: u32, height: u32) -> AdjacencyGraph<u32> {
    let mut graph = AdjacencyGraph::new();
    for row in 0..height {
        for col in 0..width {
            let id = row * width + col;
            graph.add_state(id);
            if col + 1 < width {
                graph.add_edge(id, id + 1, lattice_cost(row, col, 0));
            }
            if row + 1 < height {
                graph.add_edge(id, id + width, lattice_cost(row, col, 2));
            }
        }
    }
    graph
}

/// Goal state of [`lattice`].
#[must_use]
pub const fn lattice_goal(width: u32, height: u32) -> u32 {
    width * height - 1
}

/// Chain `0 -> 1 -> ... -> len - 1` where every state also fans out to
/// `fanout` dead-end leaves numbered above the chain.
#[must_use]
pub fn comb(len: u32, fanout: u32) -> AdjacencyGraph<u32> {
    let mut graph = AdjacencyGraph::new();
    let mut next_leaf = len;
    for id in 0..len {
        graph.add_state(id);
        for _ in 0..fanout {
            graph.add_edge(id, next_leaf, 1);
            graph.add_state(next_leaf);
            next_leaf += 1;
        }
        if id + 1 < len {
            graph.add_edge(id, id + 1, 2);
        }
    }
    graph
}
