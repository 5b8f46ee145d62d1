//! Reference graphs and the five demonstration scenarios.
//!
//! Graphs are stored in the JSON adjacency form and loaded through
//! `AdjacencyGraph::from_json_str`, so every fixture also exercises the loader.

use tandem_search::adjacency::AdjacencyGraph;
use tandem_search::policy::SearchPolicy;

/// Four states, two routes from `A` to `D`.
pub const DIAMOND_JSON: &str = r#"{
    "A": [["B", 1], ["C", 2]],
    "B": [["D", 1]],
    "C": [["D", 3]],
    "D": []
}"#;

/// Ten states: three branches out of `A`, two of which reach `G`.
pub const TEN_STATE_JSON: &str = r#"{
    "A": [["B", 1], ["C", 2], ["H", 3]],
    "B": [["D", 4], ["E", 1]],
    "C": [["F", 2]],
    "H": [["I", 1]],
    "D": [["G", 1]],
    "E": [],
    "F": [["G", 3]],
    "I": [["K", 1]],
    "G": [],
    "K": []
}"#;

/// Four states with a dead-end sibling of the goal branch.
pub const FORK_JSON: &str = r#"{
    "A": [["B", 1], ["C", 3]],
    "B": [["D", 2]],
    "C": [],
    "D": []
}"#;

/// A named `(graph, start, goal, split_ratio)` configuration.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub graph_json: &'static str,
    pub start: &'static str,
    pub goal: &'static str,
    pub split_ratio: f64,
}

impl Scenario {
    /// Parse the scenario's graph.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON is malformed. Fixtures are compile-time
    /// constants, so this is a test-only invariant.
    #[must_use]
    pub fn graph(&self) -> AdjacencyGraph<String> {
        AdjacencyGraph::from_json_str(self.graph_json)
            .unwrap_or_else(|e| panic!("fixture {} does not parse: {e}", self.name))
    }

    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy::with_split_ratio(self.split_ratio)
    }

    #[must_use]
    pub fn start(&self) -> String {
        self.start.to_string()
    }

    #[must_use]
    pub fn goal(&self) -> String {
        self.goal.to_string()
    }
}

/// The five demonstration configurations.
pub const REFERENCE_SCENARIOS: [Scenario; 5] = [
    Scenario {
        name: "diamond_a_to_d",
        graph_json: DIAMOND_JSON,
        start: "A",
        goal: "D",
        split_ratio: 0.5,
    },
    Scenario {
        name: "ten_state_a_to_g",
        graph_json: TEN_STATE_JSON,
        start: "A",
        goal: "G",
        split_ratio: 0.3,
    },
    Scenario {
        name: "ten_state_a_to_k",
        graph_json: TEN_STATE_JSON,
        start: "A",
        goal: "K",
        split_ratio: 0.7,
    },
    Scenario {
        name: "fork_a_to_d",
        graph_json: FORK_JSON,
        start: "A",
        goal: "D",
        split_ratio: 0.5,
    },
    Scenario {
        name: "ten_state_b_to_g",
        graph_json: TEN_STATE_JSON,
        start: "B",
        goal: "G",
        split_ratio: 0.5,
    },
];
