//! Tandem Search: single-path hybrid search, bounded best-first then depth-first.
//!
//! A search first pops nodes by lowest `cost + heuristic` for a budget of
//! `floor(state_count * split_ratio)` iterations, then moves whatever remains on
//! the priority frontier onto a stack and finishes depth-first. One visited set
//! spans both phases.
//!
//! # Module dependency direction
//!
//! `node` depends on nothing internal. `frontier`, `path` and `heuristic` build
//! on `node`; `search` ties them together with `contract`, `policy` and
//! `trace`. `digest` is a leaf used by `trace` and `search`.
//!
//! # Key types
//!
//! - [`SearchNode`](node::SearchNode): immutable node with a shared parent link
//! - [`SearchGraph`](contract::SearchGraph): read-only adjacency contract
//! - [`Heuristic`](heuristic::Heuristic): remaining-cost estimator
//! - [`SearchPolicy`](policy::SearchPolicy): split-ratio configuration
//! - [`SearchOutcome`](search::SearchOutcome): `Found` / `NotFound` result
//! - [`SearchTrace`](trace::SearchTrace): expansion-event audit log

#![forbid(unsafe_code)]

pub mod adjacency;
pub mod contract;
pub mod digest;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod trace;
