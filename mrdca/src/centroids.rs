//! Centroid prototypes for multi-view data
//! Implements prototype recalculation by computing the mean of the member vectors in every view

use crate::{dissimilarity::DissimilarityModel, error::ClusterError, types::Prototype};

/// Recalculate a cluster prototype as one arithmetic mean per feature view
///
/// Weights are not needed: the objective separates by view, and with squared
/// Euclidean distances the per-view mean minimises each view's share of it.
///
/// # Arguments
/// * `model` - Dissimilarity model built from feature views
/// * `cluster` - Cluster id, for error reporting
/// * `members` - Objects assigned to the cluster
///
/// # Returns
/// * `Prototype::Centroid` with one vector per view
/// * `EmptyCluster` if `members` is empty, `InvalidParameter` if the model has no views
pub fn centroid_recalculate(
    model: &DissimilarityModel,
    cluster: usize,
    members: &[usize],
) -> Result<Prototype, ClusterError> {
    if members.is_empty() {
        return Err(ClusterError::EmptyCluster { cluster });
    }
    let views = model
        .views()
        .ok_or_else(|| ClusterError::invalid_parameter("centroid prototypes need a model built from feature views"))?;

    // Step 1: Average the member rows of every view
    let centroids = (0..views.view_count())
        .map(|view| views.centroid(view, members))
        .collect::<Result<Vec<Vec<f64>>, _>>()?;

    Ok(Prototype::Centroid(centroids))
}
