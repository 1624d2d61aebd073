//! Validity indices and ensemble consensus for partitions produced by `mrdca`.

pub mod consensus;
pub mod distances;
pub mod metrics;

pub use consensus::{ConsensusBuilder, ConsensusMatrix};
pub use distances::{FeaturePoints, PairwiseDistances, WeightedDissimilarity};
pub use metrics::{davies_bouldin, davies_bouldin_medoids, silhouette, silhouette_samples};
