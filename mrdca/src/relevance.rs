//! Local relevance weights for the dissimilarity sources of one cluster
//!
//! For a cluster with members C and prototype g the weights minimise
//! `sum_j w[j] * T[j]` subject to `prod_j w[j] = 1`, where
//! `T[j] = sum_{i in C} d_j(i, g)`. The closed form is
//! `w[j] = (prod_h T[h])^(1/P) / T[j]`: sources with a large total
//! dissimilarity get a small weight.

use crate::{dissimilarity::DissimilarityModel, error::ClusterError, types::Prototype};

/// Closed-form solver for per-cluster relevance weights
#[derive(Clone, Copy, Debug)]
pub struct RelevanceWeightSolver {
    /// Totals at or below this value are degenerate
    pub min_source_total: f64,
}

impl Default for RelevanceWeightSolver {
    fn default() -> Self {
        Self { min_source_total: 1e-12 }
    }
}

impl RelevanceWeightSolver {
    pub fn new(min_source_total: f64) -> Self {
        Self { min_source_total }
    }

    /// `T[j] = sum_{i in members} distance_to(j, i, prototype)` for every source
    pub fn source_totals(model: &DissimilarityModel, members: &[usize], prototype: &Prototype) -> Vec<f64> {
        (0..model.source_count())
            .map(|source| {
                members
                    .iter()
                    .map(|&object| model.distance_to(source, object, prototype))
                    .sum()
            })
            .collect()
    }

    /// Weights for `cluster`; fails with `DegenerateSource` on the first
    /// source whose total does not exceed `min_source_total`
    ///
    /// # Arguments
    /// * `model` - Dissimilarity sources
    /// * `cluster` - Cluster id, only used for error reporting
    /// * `members` - Non-empty member set
    /// * `prototype` - Current prototype of the cluster
    pub fn solve(
        &self,
        model: &DissimilarityModel,
        cluster: usize,
        members: &[usize],
        prototype: &Prototype,
    ) -> Result<Vec<f64>, ClusterError> {
        if members.is_empty() {
            return Err(ClusterError::EmptyCluster { cluster });
        }
        let totals = Self::source_totals(model, members, prototype);
        self.weights_from_totals(cluster, &totals)
    }

    /// Closed form on precomputed totals
    pub fn weights_from_totals(&self, cluster: usize, totals: &[f64]) -> Result<Vec<f64>, ClusterError> {
        if let Some((view, total)) = totals
            .iter()
            .enumerate()
            .find(|(_, total)| **total <= self.min_source_total || !total.is_finite())
        {
            return Err(ClusterError::DegenerateSource {
                cluster,
                view,
                total: *total,
            });
        }
        if totals.len() == 1 {
            return Ok(vec![1.0]);
        }
        // Geometric mean through logarithms, so large P cannot overflow the product
        let geometric_mean = (totals.iter().map(|total| total.ln()).sum::<f64>() / totals.len() as f64).exp();
        Ok(totals.iter().map(|total| geometric_mean / total).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> DissimilarityModel {
        DissimilarityModel::new(vec![
            vec![
                vec![0.0, 1.0, 2.0, 3.0],
                vec![1.0, 0.0, 2.0, 2.0],
                vec![2.0, 2.0, 0.0, 1.0],
                vec![3.0, 2.0, 1.0, 0.0],
            ],
            vec![
                vec![0.0, 2.0, 1.0, 4.0],
                vec![2.0, 0.0, 3.0, 3.0],
                vec![1.0, 3.0, 0.0, 2.0],
                vec![4.0, 3.0, 2.0, 0.0],
            ],
        ])
        .unwrap()
    }

    #[test]
    fn two_cluster_reference_weights() {
        let model = model();
        let solver = RelevanceWeightSolver::default();

        let first = solver.solve(&model, 0, &[0, 1], &Prototype::Medoid(0)).unwrap();
        let second = solver.solve(&model, 1, &[2, 3], &Prototype::Medoid(3)).unwrap();

        // totals are [1, 2] for both clusters, product 2
        let expected = [2f64.powf(0.5) / 1.0, 2f64.powf(0.5) / 2.0];
        for weights in [first, second] {
            assert!((weights[0] - expected[0]).abs() < 1e-12);
            assert!((weights[1] - expected[1]).abs() < 1e-12);
            assert!((weights.iter().product::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn heavier_source_gets_smaller_weight() {
        let solver = RelevanceWeightSolver::default();
        let weights = solver.weights_from_totals(0, &[1.0, 10.0, 100.0]).unwrap();
        assert!(weights[0] > weights[1] && weights[1] > weights[2]);
        assert!((weights.iter().product::<f64>() - 1.0).abs() < 1e-9);
        assert!((weights[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn singleton_medoid_cluster_is_degenerate() {
        let err = RelevanceWeightSolver::default()
            .solve(&model(), 1, &[2], &Prototype::Medoid(2))
            .unwrap_err();
        assert!(matches!(err, ClusterError::DegenerateSource { cluster: 1, view: 0, .. }));
    }

    #[test]
    fn near_zero_totals_are_degenerate() {
        let solver = RelevanceWeightSolver::new(1e-6);
        assert!(matches!(
            solver.weights_from_totals(3, &[1.0, 1e-7]),
            Err(ClusterError::DegenerateSource { cluster: 3, view: 1, .. })
        ));
        assert!(matches!(
            RelevanceWeightSolver::default().solve(&model(), 0, &[], &Prototype::Medoid(0)),
            Err(ClusterError::EmptyCluster { cluster: 0 })
        ));
    }
}
