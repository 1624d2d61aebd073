//! Error taxonomy for relational clustering.
//!
//! Structural errors come from model construction, degeneracy errors from the
//! numeric steps of a run, and `FinalizedState` from misuse of a component that
//! already reached its terminal state.

use thiserror::Error;

/// Errors raised by the clustering engine and its evaluators.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// A matrix or view does not have the expected dimensions.
    #[error("Shape error in view {view}: expected {expected}, actual {actual}")]
    Shape {
        view: usize,
        expected: usize,
        actual: usize,
    },

    /// `|d[i][j] - d[j][i]|` exceeds the symmetry tolerance.
    #[error("Asymmetric dissimilarity in view {view} at ({row}, {col}): difference {difference}")]
    Asymmetry {
        view: usize,
        row: usize,
        col: usize,
        difference: f64,
    },

    /// An off-diagonal dissimilarity is negative.
    #[error("Negative dissimilarity in view {view} at ({row}, {col}): {value}")]
    NegativeDissimilarity {
        view: usize,
        row: usize,
        col: usize,
        value: f64,
    },

    /// NaN or infinite input value.
    #[error("Non-finite value in view {view} at ({row}, {col})")]
    NonFinite { view: usize, row: usize, col: usize },

    /// Every member of a cluster coincides with its prototype under one view.
    #[error("Degenerate view {view} in cluster {cluster}: total dissimilarity {total}")]
    DegenerateSource {
        cluster: usize,
        view: usize,
        total: f64,
    },

    /// A cluster has no members where members are required.
    #[error("Cluster {cluster} is empty")]
    EmptyCluster { cluster: usize },

    /// Fewer than two non-empty clusters for an index that compares clusters.
    #[error("Insufficient clusters: required 2, actual {actual}")]
    InsufficientClusters { actual: usize },

    /// The component is finalized and accepts no more input.
    #[error("Component is finalized")]
    FinalizedState,

    /// Invalid argument or configuration value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Configuration document could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ClusterError {
    pub fn shape(view: usize, expected: usize, actual: usize) -> Self {
        Self::Shape {
            view,
            expected,
            actual,
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// True for the mid-run failures that depend on the data rather than on
    /// how the engine was called.
    pub fn is_degeneracy(&self) -> bool {
        matches!(
            self,
            Self::DegenerateSource { .. } | Self::EmptyCluster { .. } | Self::InsufficientClusters { .. }
        )
    }
}
