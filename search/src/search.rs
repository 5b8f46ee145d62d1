//! Hybrid search entry points and the two-phase expansion loop.
//!
//! Phase one pops the lowest-total node from a priority frontier for at most
//! `floor(state_count * split_ratio)` iterations. Whatever is left is moved
//! onto a stack and phase two continues depth-first, ignoring the heuristic,
//! until the goal is accepted or the stack is empty. Both phases share one
//! visited set, checked on pop.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::contract::SearchGraph;
use crate::digest::{canonical_hash, ContentHash, DOMAIN_SEARCH_OUTCOME};
use crate::error::SearchError;
use crate::frontier::{PriorityFrontier, StackFrontier};
use crate::heuristic::{Heuristic, Ordinal, OrdinalDistance};
use crate::node::{Cost, SearchNode};
use crate::path::reconstruct_path;
use crate::policy::SearchPolicy;
use crate::trace::{
    ExpansionEvent, HandoffRecord, PhaseOneExit, PopDisposition, SearchPhase, SearchTrace,
    TerminationReason,
};

/// Result of one hybrid search.
///
/// "No path" is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchOutcome<S> {
    Found {
        /// Origin to goal, inclusive.
        path: Vec<S>,
        /// Sum of edge costs along `path`.
        cost: Cost,
        phase_one_accepted: usize,
        phase_two_accepted: usize,
    },
    NotFound {
        phase_one_accepted: usize,
        phase_two_accepted: usize,
    },
}

impl<S> SearchOutcome<S> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    #[must_use]
    pub fn path(&self) -> Option<&[S]> {
        match self {
            Self::Found { path, .. } => Some(path),
            Self::NotFound { .. } => None,
        }
    }

    #[must_use]
    pub fn cost(&self) -> Option<Cost> {
        match self {
            Self::Found { cost, .. } => Some(*cost),
            Self::NotFound { .. } => None,
        }
    }

    /// `(phase_one_accepted, phase_two_accepted)`.
    #[must_use]
    pub fn phase_counts(&self) -> (usize, usize) {
        match self {
            Self::Found {
                phase_one_accepted,
                phase_two_accepted,
                ..
            }
            | Self::NotFound {
                phase_one_accepted,
                phase_two_accepted,
            } => (*phase_one_accepted, *phase_two_accepted),
        }
    }

    /// Flatten into `(path, cost, phase_one_accepted, phase_two_accepted)`.
    #[must_use]
    pub fn into_tuple(self) -> (Option<Vec<S>>, Option<Cost>, usize, usize) {
        match self {
            Self::Found {
                path,
                cost,
                phase_one_accepted,
                phase_two_accepted,
            } => (Some(path), Some(cost), phase_one_accepted, phase_two_accepted),
            Self::NotFound {
                phase_one_accepted,
                phase_two_accepted,
            } => (None, None, phase_one_accepted, phase_two_accepted),
        }
    }
}

impl<S: Serialize> SearchOutcome<S> {
    /// Domain-separated SHA-256 of the outcome's compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Serialization`] if a state fails to serialize.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = serde_json::to_vec(self)?;
        Ok(canonical_hash(DOMAIN_SEARCH_OUTCOME, &bytes))
    }
}

/// Outcome plus the expansion trace that produced it.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    pub outcome: SearchOutcome<S>,
    pub trace: SearchTrace<S>,
}

/// Run the hybrid search with the code-point distance estimator.
///
/// `search(graph, start, goal, &SearchPolicy::default())` is the two-phase
/// search at split ratio 0.5.
pub fn search<S, G>(graph: &G, start: S, goal: &S, policy: &SearchPolicy) -> SearchOutcome<S>
where
    S: Clone + Eq + Hash + Debug + Ordinal,
    G: SearchGraph<S> + ?Sized,
{
    search_with(graph, start, goal, policy, &OrdinalDistance)
}

/// Run the hybrid search with a caller-supplied estimator.
pub fn search_with<S, G, H>(
    graph: &G,
    start: S,
    goal: &S,
    policy: &SearchPolicy,
    heuristic: &H,
) -> SearchOutcome<S>
where
    S: Clone + Eq + Hash + Debug,
    G: SearchGraph<S> + ?Sized,
    H: Heuristic<S> + ?Sized,
{
    search_traced(graph, start, goal, policy, heuristic).outcome
}

/// Run the hybrid search and keep the full expansion trace.
pub fn search_traced<S, G, H>(
    graph: &G,
    start: S,
    goal: &S,
    policy: &SearchPolicy,
    heuristic: &H,
) -> SearchResult<S>
where
    S: Clone + Eq + Hash + Debug,
    G: SearchGraph<S> + ?Sized,
    H: Heuristic<S> + ?Sized,
{
    let state_count = graph.state_count();
    let limit = policy.phase_one_limit(state_count);
    let mut driver = Driver::new(graph, goal, heuristic, state_count, limit);

    let mut frontier = PriorityFrontier::new();
    let root_h = heuristic.estimate(&start, goal);
    frontier.push(Rc::new(SearchNode::root(start, root_h)));
    driver.nodes_created += 1;

    debug!(state_count, limit, "phase one: best-first expansion");
    if let Some(goal_node) = driver.phase_one(&mut frontier, limit) {
        let high_water = frontier.high_water();
        return driver.finish(Some((goal_node, SearchPhase::BestFirst)), None, high_water, 0);
    }

    let iterations_used = driver.phase_one_iterations;
    let exit = if frontier.is_empty() {
        PhaseOneExit::FrontierEmptied
    } else {
        PhaseOneExit::BudgetExhausted
    };
    let phase_one_high_water = frontier.high_water();

    // Seed the stack in the heap's storage order, not sorted order: the entry
    // in the last array slot is popped first.
    let seed = frontier.into_storage_order();
    let handoff = HandoffRecord {
        iterations_used,
        exit,
        drained: seed.len(),
    };
    debug!(
        iterations_used,
        ?exit,
        drained = handoff.drained,
        accepted = driver.phase_one_accepted,
        "phase two: depth-first expansion"
    );

    let mut stack = StackFrontier::seeded(seed);
    let found = driver
        .phase_two(&mut stack)
        .map(|node| (node, SearchPhase::DepthFirst));
    let phase_two_high_water = stack.high_water();
    driver.finish(found, Some(handoff), phase_one_high_water, phase_two_high_water)
}

/// Decision for a popped node.
enum Admission {
    AlreadyVisited,
    Goal,
    Expand,
}

/// Per-invocation search state: visited set, counters and event log.
struct Driver<'a, S, G: ?Sized, H: ?Sized> {
    graph: &'a G,
    goal: &'a S,
    heuristic: &'a H,
    visited: HashSet<S>,
    events: Vec<ExpansionEvent<S>>,
    state_count: usize,
    limit: usize,
    phase_one_iterations: usize,
    phase_one_accepted: usize,
    phase_two_accepted: usize,
    nodes_created: usize,
}

impl<'a, S, G, H> Driver<'a, S, G, H>
where
    S: Clone + Eq + Hash + Debug,
    G: SearchGraph<S> + ?Sized,
    H: Heuristic<S> + ?Sized,
{
    fn new(graph: &'a G, goal: &'a S, heuristic: &'a H, state_count: usize, limit: usize) -> Self {
        Self {
            graph,
            goal,
            heuristic,
            visited: HashSet::new(),
            events: Vec::new(),
            state_count,
            limit,
            phase_one_iterations: 0,
            phase_one_accepted: 0,
            phase_two_accepted: 0,
            nodes_created: 0,
        }
    }

    /// Bounded best-first loop. Returns the goal node if it was accepted.
    fn phase_one(
        &mut self,
        frontier: &mut PriorityFrontier<S>,
        limit: usize,
    ) -> Option<Rc<SearchNode<S>>> {
        for _ in 0..limit {
            let node = frontier.pop()?;
            self.phase_one_iterations += 1;
            match self.admit(&node, SearchPhase::BestFirst) {
                Admission::AlreadyVisited => {}
                Admission::Goal => return Some(node),
                Admission::Expand => {
                    self.expand(&node, SearchPhase::BestFirst, |child| frontier.push(child));
                }
            }
        }
        None
    }

    /// Unbounded depth-first loop. Returns the goal node if it was accepted.
    fn phase_two(&mut self, stack: &mut StackFrontier<S>) -> Option<Rc<SearchNode<S>>> {
        while let Some(node) = stack.pop() {
            match self.admit(&node, SearchPhase::DepthFirst) {
                Admission::AlreadyVisited => {}
                Admission::Goal => return Some(node),
                Admission::Expand => {
                    self.expand(&node, SearchPhase::DepthFirst, |child| stack.push(child));
                }
            }
        }
        None
    }

    /// Visited-set barrier shared by both phases.
    fn admit(&mut self, node: &SearchNode<S>, phase: SearchPhase) -> Admission {
        trace!(%phase, state = ?node.state(), cost = node.cost(), total = node.total(), "pop");
        if self.visited.contains(node.state()) {
            self.record(node, phase, PopDisposition::SkippedVisited);
            return Admission::AlreadyVisited;
        }
        self.visited.insert(node.state().clone());
        match phase {
            SearchPhase::BestFirst => self.phase_one_accepted += 1,
            SearchPhase::DepthFirst => self.phase_two_accepted += 1,
        }
        if node.state() == self.goal {
            self.record(node, phase, PopDisposition::GoalReached);
            return Admission::Goal;
        }
        Admission::Expand
    }

    /// Push a child for every unvisited neighbor, in adjacency order.
    ///
    /// Phase-two children carry a zero heuristic.
    fn expand(
        &mut self,
        node: &Rc<SearchNode<S>>,
        phase: SearchPhase,
        mut push: impl FnMut(Rc<SearchNode<S>>),
    ) {
        let graph = self.graph;
        let mut children_pushed = 0;
        for (neighbor, edge_cost) in graph.neighbors(node.state()) {
            if self.visited.contains(neighbor) {
                continue;
            }
            let heuristic = match phase {
                SearchPhase::BestFirst => self.heuristic.estimate(neighbor, self.goal),
                SearchPhase::DepthFirst => 0,
            };
            push(Rc::new(SearchNode::new(
                neighbor.clone(),
                Some(Rc::clone(node)),
                node.cost().saturating_add(*edge_cost),
                heuristic,
            )));
            children_pushed += 1;
        }
        self.nodes_created += children_pushed;
        self.record(node, phase, PopDisposition::Expanded { children_pushed });
    }

    fn record(&mut self, node: &SearchNode<S>, phase: SearchPhase, disposition: PopDisposition) {
        self.events.push(ExpansionEvent {
            pop_order: self.events.len(),
            phase,
            state: node.state().clone(),
            cost: node.cost(),
            total: node.total(),
            depth: node.depth(),
            disposition,
        });
    }

    fn finish(
        self,
        found: Option<(Rc<SearchNode<S>>, SearchPhase)>,
        handoff: Option<HandoffRecord>,
        phase_one_high_water: usize,
        phase_two_high_water: usize,
    ) -> SearchResult<S> {
        let phase_one_accepted = self.phase_one_accepted;
        let phase_two_accepted = self.phase_two_accepted;
        let (outcome, termination) = match found {
            Some((node, phase)) => {
                let path = reconstruct_path(&node);
                debug!(
                    %phase,
                    cost = node.cost(),
                    path_len = path.len(),
                    phase_one_accepted,
                    phase_two_accepted,
                    "goal reached"
                );
                (
                    SearchOutcome::Found {
                        path,
                        cost: node.cost(),
                        phase_one_accepted,
                        phase_two_accepted,
                    },
                    TerminationReason::GoalReached { phase },
                )
            }
            None => {
                debug!(
                    phase_one_accepted,
                    phase_two_accepted,
                    "frontier exhausted without reaching goal"
                );
                (
                    SearchOutcome::NotFound {
                        phase_one_accepted,
                        phase_two_accepted,
                    },
                    TerminationReason::FrontierExhausted,
                )
            }
        };
        let trace = SearchTrace {
            state_count: self.state_count,
            phase_one_limit: self.limit,
            events: self.events,
            handoff,
            termination,
            phase_one_high_water,
            phase_two_high_water,
            nodes_created: self.nodes_created,
        };
        SearchResult { outcome, trace }
    }
}
