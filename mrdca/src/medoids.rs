//! Medoid prototypes for relational data
//! A medoid is the object minimising the weighted distance to every member of its cluster

use rayon::prelude::*;

use crate::{dissimilarity::DissimilarityModel, error::ClusterError, types::Prototype};

/// Weighted cost of `candidate` as prototype: `sum_{i in members} sum_j w[j] * d_j(i, candidate)`
pub fn medoid_cost(model: &DissimilarityModel, members: &[usize], weights: &[f64], candidate: usize) -> f64 {
    members
        .iter()
        .map(|&object| {
            weights
                .iter()
                .enumerate()
                .map(|(source, weight)| weight * model.distance(source, object, candidate))
                .sum::<f64>()
        })
        .sum()
}

/// Recalculate the medoid of one cluster
///
/// Candidates are the members plus the current medoid, so the cost of the
/// returned prototype never exceeds the cost of the current one.
///
/// # Arguments
/// * `model` - Dissimilarity sources
/// * `cluster` - Cluster id, for error reporting
/// * `members` - Objects assigned to the cluster, ascending
/// * `weights` - Current relevance weights of the cluster
/// * `current` - Current medoid, if any
///
/// # Tie-breaking
/// The current medoid is kept when it is among the cheapest candidates,
/// otherwise the lowest object index wins.
pub fn medoid_recalculate(
    model: &DissimilarityModel,
    cluster: usize,
    members: &[usize],
    weights: &[f64],
    current: Option<usize>,
) -> Result<Prototype, ClusterError> {
    if members.is_empty() {
        return Err(ClusterError::EmptyCluster { cluster });
    }

    // Cost of every member as candidate, computed in parallel
    let costs: Vec<(usize, f64)> = members
        .par_iter()
        .map(|&candidate| (candidate, medoid_cost(model, members, weights, candidate)))
        .collect();

    let (mut best, mut best_cost) = costs[0];
    for &(candidate, cost) in costs.iter().skip(1) {
        if cost < best_cost {
            best = candidate;
            best_cost = cost;
        }
    }

    if let Some(current) = current {
        if current != best && medoid_cost(model, members, weights, current) <= best_cost {
            best = current;
        }
    }

    Ok(Prototype::Medoid(best))
}
