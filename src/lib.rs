//! Relational clusterization: the `mrdca` engine together with its quality measures.

pub use mrdca;
pub use mrdca_quality;

pub use mrdca::{
    ClusterError, ClusteringOutcome, DissimilarityMatrix, DissimilarityModel, DistanceMetric, FeatureViews,
    OptimizerConfig, OptimizerFailure, Partition, PartitionOptimizer, Prototype, PrototypeStrategy,
    RelevanceWeightSolver, Termination,
};
pub use mrdca_quality::{ConsensusBuilder, ConsensusMatrix, davies_bouldin, silhouette};
