//! Typed search errors.
//!
//! `SearchError` represents pre-flight and input-loading failures only. The
//! search itself never fails: "no path" is reported as
//! [`crate::search::SearchOutcome::NotFound`].

/// Typed failure for policy validation, graph loading and trace digesting.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The split ratio is NaN or outside `[0, 1]`.
    InvalidSplitRatio { ratio: f64 },
    /// An adjacency document could not be parsed into a graph.
    MalformedGraph { detail: String },
    /// A trace could not be serialized for digesting.
    Serialization { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSplitRatio { ratio } => {
                write!(f, "split ratio must lie in [0, 1], got {ratio}")
            }
            Self::MalformedGraph { detail } => write!(f, "malformed graph: {detail}"),
            Self::Serialization { detail } => write!(f, "trace serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            detail: err.to_string(),
        }
    }
}
