//! Heuristic estimators for phase-one ordering.
//!
//! An estimator maps `(state, goal)` to a non-negative estimate of the
//! remaining cost. Estimators must be pure: the driver calls them once per
//! constructed node and never re-evaluates.

use crate::node::Cost;

/// Estimate of remaining cost from `state` to `goal`.
pub trait Heuristic<S: ?Sized> {
    /// Return an estimate `>= 0`. Must be deterministic.
    fn estimate(&self, state: &S, goal: &S) -> Cost;
}

impl<S: ?Sized, F> Heuristic<S> for F
where
    F: Fn(&S, &S) -> Cost,
{
    fn estimate(&self, state: &S, goal: &S) -> Cost {
        self(state, goal)
    }
}

/// Always estimates zero. Phase one then orders by accumulated cost alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl<S: ?Sized> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S, _goal: &S) -> Cost {
        0
    }
}

/// States that can be mapped onto a single code point.
///
/// Returns `None` when the state has no ordinal (for example a multi-character
/// label); [`OrdinalDistance`] then falls back to a zero estimate.
pub trait Ordinal {
    fn ordinal(&self) -> Option<u32>;
}

impl Ordinal for char {
    fn ordinal(&self) -> Option<u32> {
        Some(u32::from(*self))
    }
}

impl Ordinal for u8 {
    fn ordinal(&self) -> Option<u32> {
        Some(u32::from(*self))
    }
}

impl Ordinal for u32 {
    fn ordinal(&self) -> Option<u32> {
        Some(*self)
    }
}

impl Ordinal for str {
    fn ordinal(&self) -> Option<u32> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(u32::from(c)),
            _ => None,
        }
    }
}

impl Ordinal for String {
    fn ordinal(&self) -> Option<u32> {
        self.as_str().ordinal()
    }
}

impl<T: Ordinal + ?Sized> Ordinal for &T {
    fn ordinal(&self) -> Option<u32> {
        (**self).ordinal()
    }
}

/// Absolute difference of the code points of state and goal.
///
/// Only meaningful for single-character labels, where neighbouring letters are
/// assumed to be close. No admissibility guarantee is made for other encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdinalDistance;

impl<S: Ordinal + ?Sized> Heuristic<S> for OrdinalDistance {
    fn estimate(&self, state: &S, goal: &S) -> Cost {
        match (state.ordinal(), goal.ordinal()) {
            (Some(s), Some(g)) => Cost::from(s.abs_diff(g)),
            _ => 0,
        }
    }
}
