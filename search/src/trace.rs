//! `SearchTrace`: expansion-event audit log for one search invocation.
//!
//! The normative record is the ordered list of [`ExpansionEvent`]s, one per
//! frontier pop in either phase. The hand-off record, high-water marks and
//! termination reason summarize it.

use serde::Serialize;

use crate::digest::{canonical_hash, ContentHash, DOMAIN_SEARCH_TRACE};
use crate::error::SearchError;
use crate::node::Cost;

/// Which expansion discipline popped a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// Phase one: bounded best-first over the priority frontier.
    BestFirst,
    /// Phase two: unbounded depth-first over the stack frontier.
    DepthFirst,
}

impl std::fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::BestFirst => "best_first",
            Self::DepthFirst => "depth_first",
        })
    }
}

/// What happened to a popped node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PopDisposition {
    /// State was already visited; the pop consumed an iteration only.
    SkippedVisited,
    /// State was accepted and matched the goal.
    GoalReached,
    /// State was accepted and its unvisited neighbors were pushed.
    Expanded { children_pushed: usize },
}

/// A single frontier pop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionEvent<S> {
    /// Position in the total order of pops across both phases.
    pub pop_order: usize,
    pub phase: SearchPhase,
    pub state: S,
    pub cost: Cost,
    pub total: Cost,
    pub depth: u32,
    pub disposition: PopDisposition,
}

impl<S> ExpansionEvent<S> {
    /// True if the pop marked its state visited.
    #[must_use]
    pub fn is_acceptance(&self) -> bool {
        !matches!(self.disposition, PopDisposition::SkippedVisited)
    }
}

/// Why phase one handed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseOneExit {
    /// All `limit` iterations were used and entries remained.
    BudgetExhausted,
    /// The priority frontier ran dry.
    FrontierEmptied,
}

/// Transition from phase one to phase two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandoffRecord {
    /// Phase-one loop iterations consumed (accepted plus skipped pops).
    pub iterations_used: usize,
    pub exit: PhaseOneExit,
    /// Entries moved from the priority frontier onto the stack.
    pub drained: usize,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerminationReason {
    /// The goal was popped and accepted in `phase`.
    GoalReached { phase: SearchPhase },
    /// The stack emptied without reaching the goal.
    FrontierExhausted,
}

/// The complete audit trail of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTrace<S> {
    /// Number of graph keys.
    pub state_count: usize,
    /// Maximum phase-one iterations.
    pub phase_one_limit: usize,
    /// Ordered pop events (normative decision surface).
    pub events: Vec<ExpansionEvent<S>>,
    /// `None` when phase one reached the goal.
    pub handoff: Option<HandoffRecord>,
    pub termination: TerminationReason,
    pub phase_one_high_water: usize,
    /// Zero when phase two never ran.
    pub phase_two_high_water: usize,
    /// Search nodes constructed, root included.
    pub nodes_created: usize,
}

impl<S> SearchTrace<S> {
    /// Number of states accepted (visited) in `phase`.
    #[must_use]
    pub fn accepted_in(&self, phase: SearchPhase) -> usize {
        self.events
            .iter()
            .filter(|e| e.phase == phase && e.is_acceptance())
            .count()
    }

    /// Number of pops discarded because their state was already visited.
    #[must_use]
    pub fn skipped_pops(&self) -> usize {
        self.events.iter().filter(|e| !e.is_acceptance()).count()
    }

    /// Accepted states in acceptance order.
    pub fn accepted_states(&self) -> impl Iterator<Item = &S> {
        self.events
            .iter()
            .filter(|e| e.is_acceptance())
            .map(|e| &e.state)
    }
}

impl<S: Serialize> SearchTrace<S> {
    /// Serialize the trace to compact JSON bytes.
    ///
    /// Field order follows declaration order, so equal traces produce equal
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Serialization`] if a state fails to serialize.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, SearchError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Domain-separated SHA-256 of [`Self::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Serialization`] if a state fails to serialize.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        Ok(canonical_hash(DOMAIN_SEARCH_TRACE, &self.to_json_bytes()?))
    }
}
