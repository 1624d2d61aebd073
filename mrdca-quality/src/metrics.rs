//! Internal validity indices for a finished partition
//! Provides the Silhouette and Davies-Bouldin indices, both computed from the
//! partition plus either pairwise distances or feature vectors

use std::collections::HashMap;

use mrdca::{
    ClusterError, DistanceMetric, Partition,
    types::{CentroidValue, VectorDistance},
};
use rayon::prelude::*;

use crate::distances::PairwiseDistances;

/// Calculate cohesion of one cluster by measuring distances from its members to a centroid
///
/// # Arguments
/// * `members` - Object ids belonging to the cluster
/// * `centroid` - Cluster centroid
/// * `points` - Feature vectors of all objects
/// * `metric` - Distance metric to use for calculations
///
/// # Returns
/// * Tuple containing:
///   - Average distance of the members to the centroid (lower is more cohesive)
///   - HashMap of individual distances for each member
pub fn metric_calculate(
    members: &[usize],
    centroid: &[f64],
    points: &[Vec<f64>],
    metric: DistanceMetric,
) -> (f64, HashMap<usize, f64>) {
    // Calculate distance from each member to the centroid in parallel
    let point_scores: HashMap<usize, f64> = members
        .par_iter()
        .map(|object| (*object, points[*object].as_slice().distance_by(centroid, metric)))
        .collect();

    let cluster_score: f64 = point_scores.values().sum::<f64>() / (point_scores.len() as f64);

    (cluster_score, point_scores)
}

fn check_object_count(expected: usize, actual: usize) -> Result<(), ClusterError> {
    if expected != actual {
        return Err(ClusterError::invalid_parameter(format!(
            "partition covers {} objects, distances cover {}",
            actual, expected
        )));
    }
    Ok(())
}

/// Per-object silhouette values `s(i) = (b(i) - a(i)) / max(a(i), b(i))`
///
/// `a(i)` is the mean distance to the other members of the object's cluster
/// (0 for a singleton), `b(i)` the smallest mean distance to the members of
/// another non-empty cluster, and `s(i)` is 0 when both are 0.
/// Requires at least two non-empty clusters.
pub fn silhouette_samples<D: PairwiseDistances>(distances: &D, partition: &Partition) -> Result<Vec<f64>, ClusterError> {
    check_object_count(distances.object_count(), partition.object_count())?;
    let occupied = partition.non_empty_clusters().len();
    if occupied < 2 {
        return Err(ClusterError::InsufficientClusters { actual: occupied });
    }

    let sizes = partition.sizes();
    let labels = partition.labels();
    let k = partition.cluster_count();

    let samples = (0..labels.len())
        .into_par_iter()
        .map(|i| {
            // Sum of distances from i to every cluster
            let mut sums = vec![0.0; k];
            for (j, label) in labels.iter().enumerate() {
                if j != i {
                    sums[*label] += distances.pair(i, j);
                }
            }
            let own = labels[i];
            let a = if sizes[own] > 1 { sums[own] / (sizes[own] - 1) as f64 } else { 0.0 };
            let b = (0..k)
                .filter(|cluster| *cluster != own && sizes[*cluster] > 0)
                .map(|cluster| sums[cluster] / sizes[cluster] as f64)
                .fold(f64::INFINITY, f64::min);
            let max_ab = a.max(b);
            if max_ab == 0.0 { 0.0 } else { (b - a) / max_ab }
        })
        .collect();

    Ok(samples)
}

/// Mean silhouette over all objects, in `[-1, 1]`
pub fn silhouette<D: PairwiseDistances>(distances: &D, partition: &Partition) -> Result<f64, ClusterError> {
    let samples = silhouette_samples(distances, partition)?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// `(s_i + s_j) / separation`, with coincident prototypes of zero spread scoring 0
fn separation_ratio(spread: f64, separation: f64) -> f64 {
    if separation > 0.0 {
        spread / separation
    } else if spread == 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}

/// Mean over clusters of the worst `(dispersion[i] + dispersion[j]) / separation(i, j)`
fn davies_bouldin_from(dispersion: &[f64], separation: impl Fn(usize, usize) -> f64) -> f64 {
    let k = dispersion.len();
    let total: f64 = (0..k)
        .map(|i| {
            (0..k)
                .filter(|j| *j != i)
                .map(|j| separation_ratio(dispersion[i] + dispersion[j], separation(i, j)))
                .fold(0.0, f64::max)
        })
        .sum();
    total / k as f64
}

fn check_clusters(partition: &Partition) -> Result<Vec<Vec<usize>>, ClusterError> {
    if partition.cluster_count() < 2 {
        return Err(ClusterError::InsufficientClusters {
            actual: partition.cluster_count(),
        });
    }
    let groups = partition.groups();
    if let Some(cluster) = groups.iter().position(|members| members.is_empty()) {
        return Err(ClusterError::EmptyCluster { cluster });
    }
    Ok(groups)
}

/// Davies-Bouldin index over feature vectors with Euclidean distance; `>= 0`, lower is better
///
/// # Algorithm
/// 1. Centroid of every cluster and mean member distance to it (dispersion)
/// 2. For every cluster the maximum ratio against the other clusters
/// 3. Mean of the per-cluster maxima
pub fn davies_bouldin(points: &[Vec<f64>], partition: &Partition) -> Result<f64, ClusterError> {
    check_object_count(points.len(), partition.object_count())?;
    let dim = points[0].len();
    if let Some(row) = points.iter().find(|row| row.len() != dim) {
        return Err(ClusterError::shape(0, dim, row.len()));
    }
    let groups = check_clusters(partition)?;

    let centroids: Vec<Vec<f64>> = groups
        .par_iter()
        .map(|members| {
            members
                .iter()
                .fold(Vec::<f64>::zero(dim), |acc, object| acc.sum_by_field(&points[*object]))
                .div_by_n(members.len())
        })
        .collect();
    let dispersion: Vec<f64> = groups
        .iter()
        .zip(centroids.iter())
        .map(|(members, centroid)| metric_calculate(members, centroid, points, DistanceMetric::Euclidean).0)
        .collect();

    Ok(davies_bouldin_from(&dispersion, |i, j| {
        centroids[i].distance_by(&centroids[j], DistanceMetric::Euclidean)
    }))
}

/// Davies-Bouldin index for relational data, with medoids standing in for centroids
pub fn davies_bouldin_medoids<D: PairwiseDistances>(
    distances: &D,
    partition: &Partition,
    medoids: &[usize],
) -> Result<f64, ClusterError> {
    check_object_count(distances.object_count(), partition.object_count())?;
    if medoids.len() != partition.cluster_count() {
        return Err(ClusterError::invalid_parameter(format!(
            "{} medoids for {} clusters",
            medoids.len(),
            partition.cluster_count()
        )));
    }
    if let Some(medoid) = medoids.iter().find(|medoid| **medoid >= distances.object_count()) {
        return Err(ClusterError::invalid_parameter(format!("medoid {} out of range", medoid)));
    }
    let groups = check_clusters(partition)?;

    let dispersion: Vec<f64> = groups
        .par_iter()
        .zip(medoids.par_iter())
        .map(|(members, medoid)| {
            members.iter().map(|object| distances.pair(*object, *medoid)).sum::<f64>() / members.len() as f64
        })
        .collect();

    Ok(davies_bouldin_from(&dispersion, |i, j| distances.pair(medoids[i], medoids[j])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distances::FeaturePoints;
    use mrdca::DissimilarityMatrix;

    fn points() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 2.0],
            vec![1.5, 1.8],
            vec![5.0, 8.0],
            vec![8.0, 8.0],
            vec![1.0, 0.6],
            vec![9.0, 11.0],
            vec![8.0, 2.0],
            vec![10.0, 2.0],
        ]
    }

    fn labels() -> Partition {
        Partition::new(vec![0, 0, 1, 1, 0, 1, 2, 2], 3).unwrap()
    }

    #[test]
    fn eight_point_reference_values() {
        let points = points();
        let silhouette = silhouette(&FeaturePoints::euclidean(&points).unwrap(), &labels()).unwrap();
        let davies_bouldin = davies_bouldin(&points, &labels()).unwrap();
        assert!((silhouette - 0.692377544900).abs() < 1e-6);
        assert!((davies_bouldin - 0.382796637537).abs() < 1e-6);
    }

    #[test]
    fn matrix_reference_value() {
        let matrix = DissimilarityMatrix::new(vec![
            vec![0.0, 1.0, 1.4, 12.7, 14.1, 13.4],
            vec![1.0, 0.0, 1.4, 12.7, 14.1, 13.4],
            vec![1.4, 1.4, 0.0, 12.7, 14.1, 13.4],
            vec![12.7, 12.7, 12.7, 0.0, 1.0, 1.4],
            vec![14.1, 14.1, 14.1, 1.0, 0.0, 1.4],
            vec![13.4, 13.4, 13.4, 1.4, 1.4, 0.0],
        ])
        .unwrap();
        let partition = Partition::new(vec![0, 0, 0, 1, 1, 1], 2).unwrap();
        let score = silhouette(&matrix, &partition).unwrap();
        assert!((score - 0.905390954425).abs() < 1e-6);
    }

    #[test]
    fn singleton_cluster_uses_zero_cohesion() {
        let points = vec![vec![0.0], vec![1.0], vec![5.0]];
        let partition = Partition::new(vec![0, 0, 1], 2).unwrap();
        let samples = silhouette_samples(&FeaturePoints::euclidean(&points).unwrap(), &partition).unwrap();
        // a = 0 for the singleton, so s = 1
        assert_eq!(samples[2], 1.0);
        assert!((samples[0] - (5.0 - 1.0) / 5.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_objects_score_zero() {
        let points = vec![vec![0.0], vec![0.0]];
        let partition = Partition::new(vec![0, 1], 2).unwrap();
        let samples = silhouette_samples(&FeaturePoints::euclidean(&points).unwrap(), &partition).unwrap();
        assert_eq!(samples, vec![0.0, 0.0]);
    }

    #[test]
    fn silhouette_needs_two_occupied_clusters() {
        let points = points();
        let partition = Partition::new(vec![1; 8], 3).unwrap();
        assert!(matches!(
            silhouette(&FeaturePoints::euclidean(&points).unwrap(), &partition),
            Err(ClusterError::InsufficientClusters { actual: 1 })
        ));
        // an empty cluster is ignored as long as two others are occupied
        let partition = Partition::new(vec![0, 0, 2, 2, 0, 2, 2, 2], 3).unwrap();
        assert!(silhouette(&FeaturePoints::euclidean(&points).unwrap(), &partition).is_ok());
    }

    #[test]
    fn davies_bouldin_rejects_empty_clusters() {
        let partition = Partition::new(vec![0, 0, 2, 2, 0, 2, 2, 2], 3).unwrap();
        assert!(matches!(
            davies_bouldin(&points(), &partition),
            Err(ClusterError::EmptyCluster { cluster: 1 })
        ));
        let partition = Partition::new(vec![0; 8], 1).unwrap();
        assert!(matches!(
            davies_bouldin(&points(), &partition),
            Err(ClusterError::InsufficientClusters { actual: 1 })
        ));
    }

    #[test]
    fn medoid_variant_on_separated_groups() {
        let points = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
        let partition = Partition::new(vec![0, 0, 1, 1], 2).unwrap();
        let score = davies_bouldin_medoids(&FeaturePoints::euclidean(&points).unwrap(), &partition, &[0, 2]).unwrap();
        // dispersion 0.5 in both clusters, medoids 10 apart
        assert!((score - 0.1).abs() < 1e-12);
        assert!(davies_bouldin_medoids(&FeaturePoints::euclidean(&points).unwrap(), &partition, &[0]).is_err());
    }

    #[test]
    fn mismatched_sizes_are_rejected() {
        let partition = Partition::new(vec![0, 1], 2).unwrap();
        assert!(matches!(
            silhouette(&FeaturePoints::euclidean(&points()).unwrap(), &partition),
            Err(ClusterError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn metric_calculate_averages_member_distances() {
        let points = vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![6.0, 8.0]];
        let (score, per_point) = metric_calculate(&[0, 2], &[3.0, 4.0], &points, DistanceMetric::Euclidean);
        assert_eq!(score, 5.0);
        assert_eq!(per_point[&2], 5.0);
    }
}
