//! Search policy: how the expansion budget is split between the phases.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Split ratio used when none is configured.
pub const DEFAULT_SPLIT_RATIO: f64 = 0.5;

/// Budget configuration for the hybrid search.
///
/// `split_ratio` scales the number of graph keys into the phase-one iteration
/// budget. The driver does not validate it; callers that load policies from
/// configuration should call [`SearchPolicy::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchPolicy {
    pub split_ratio: f64,
}

impl SearchPolicy {
    #[must_use]
    pub const fn with_split_ratio(split_ratio: f64) -> Self {
        Self { split_ratio }
    }

    /// Check that the ratio is a number in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidSplitRatio`] for NaN or out-of-range values.
    pub fn validate(&self) -> Result<(), SearchError> {
        if (0.0..=1.0).contains(&self.split_ratio) {
            Ok(())
        } else {
            Err(SearchError::InvalidSplitRatio {
                ratio: self.split_ratio,
            })
        }
    }

    /// Maximum number of phase-one dequeues: `floor(state_count * split_ratio)`.
    ///
    /// A NaN or non-positive product gives 0; an infinite or oversized product
    /// saturates at `usize::MAX`.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn phase_one_limit(&self, state_count: usize) -> usize {
        let product = (state_count as f64 * self.split_ratio).floor();
        if product.is_nan() || product <= 0.0 {
            0
        } else {
            // `as` saturates for floats beyond the target range.
            product as usize
        }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::with_split_ratio(DEFAULT_SPLIT_RATIO)
    }
}
