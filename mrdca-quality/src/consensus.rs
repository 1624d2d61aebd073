//! Co-association consensus over an ensemble of partitions
//!
//! Every ingested partition adds 1 to each pair of objects it places in the
//! same cluster. Self pairs count as co-associated in every partition, so the
//! finalized diagonal is exactly 1.

use mrdca::{ClusterError, DissimilarityMatrix, Partition};
use tracing::{debug, info};

/// Symmetric N x N matrix of co-association frequencies in `[0, 1]`
#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusMatrix {
    n: usize,
    data: Vec<f64>,
}

impl ConsensusMatrix {
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.n).map(|row| row.to_vec()).collect()
    }

    /// `1 - S`, ready to be clustered again as one more dissimilarity source
    pub fn to_dissimilarity(&self) -> Result<DissimilarityMatrix, ClusterError> {
        let rows = (0..self.n)
            .map(|i| (0..self.n).map(|j| if i == j { 0.0 } else { 1.0 - self.get(i, j) }).collect())
            .collect();
        DissimilarityMatrix::new(rows)
    }
}

/// Streaming builder: `accumulate` partitions one at a time, then `finalize`
#[derive(Clone, Debug)]
pub struct ConsensusBuilder {
    n: usize,
    counts: Vec<u32>,
    partitions: usize,
    finalized: Option<ConsensusMatrix>,
}

impl ConsensusBuilder {
    pub fn new(n: usize) -> Result<Self, ClusterError> {
        if n == 0 {
            return Err(ClusterError::invalid_parameter("consensus needs at least one object"));
        }
        Ok(Self {
            n,
            counts: vec![0; n * n],
            partitions: 0,
            finalized: None,
        })
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized.is_some()
    }

    /// Add the co-association pairs of one partition; k may differ between partitions
    pub fn accumulate(&mut self, partition: &Partition) -> Result<(), ClusterError> {
        if self.finalized.is_some() {
            return Err(ClusterError::FinalizedState);
        }
        if partition.object_count() != self.n {
            return Err(ClusterError::invalid_parameter(format!(
                "partition covers {} objects, consensus has {}",
                partition.object_count(),
                self.n
            )));
        }
        for members in partition.groups() {
            for &i in members.iter() {
                for &j in members.iter() {
                    self.counts[i * self.n + j] += 1;
                }
            }
        }
        self.partitions += 1;
        debug!(partitions = self.partitions, k = partition.cluster_count(), "partition accumulated");
        Ok(())
    }

    /// Divide every count by the number of partitions and freeze the builder
    pub fn finalize(&mut self) -> Result<ConsensusMatrix, ClusterError> {
        if self.finalized.is_some() {
            return Err(ClusterError::FinalizedState);
        }
        if self.partitions == 0 {
            return Err(ClusterError::invalid_parameter("no partitions accumulated"));
        }
        let ensemble = self.partitions as f64;
        let matrix = ConsensusMatrix {
            n: self.n,
            data: self.counts.iter().map(|count| *count as f64 / ensemble).collect(),
        };
        info!(objects = self.n, partitions = self.partitions, "consensus finalized");
        self.finalized = Some(matrix.clone());
        Ok(matrix)
    }

    /// Finalized matrix, if any
    pub fn matrix(&self) -> Option<&ConsensusMatrix> {
        self.finalized.as_ref()
    }
}
