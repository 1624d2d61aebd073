//! Multi-view relational clustering with locally learned relevance weights.
//!
//! Objects are partitioned into k clusters from P dissimilarity sources. Every
//! cluster learns one weight per source (product 1), so no single source
//! dominates the aggregate distance.

pub mod context;
pub mod dissimilarity;
pub mod error;
pub mod optimizer;
pub mod partition;
pub mod relevance;
pub mod types;
pub mod views;
mod centroids;
mod medoids;

pub use context::OptimizerConfig;
pub use dissimilarity::{DissimilarityMatrix, DissimilarityModel};
pub use error::ClusterError;
pub use optimizer::{ClusteringOutcome, OptimizerFailure, OptimizerState, PartitionOptimizer, RoundReport, Termination};
pub use partition::{Cluster, Partition};
pub use relevance::RelevanceWeightSolver;
pub use types::{DistanceMetric, Prototype, PrototypeStrategy};
pub use views::FeatureViews;
