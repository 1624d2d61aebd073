//! Type definitions and trait implementations for relational clustering
//! Includes the feature-space distance metrics, prototype representations,
//! and helper traits for averaging feature vectors into centroids

use serde::{Deserialize, Serialize};

/// Distance metrics used to derive dissimilarity matrices from feature views
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// sqrt(sum((a[i] - b[i])^2))
    Euclidean,
    /// sum((a[i] - b[i])^2), the criterion minimised by a component-wise mean
    SquaredEuclidean,
    /// sum(|a[i] - b[i]|), also known as Manhattan distance
    Cityblock,
}

/// How cluster prototypes are recomputed in the update step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrototypeStrategy {
    /// Prototype is a member object minimising the weighted distance to the cluster
    #[default]
    Medoid,
    /// Prototype is the per-view component-wise mean of the member vectors
    Centroid,
}

/// Representative of a cluster
#[derive(Clone, Debug, PartialEq)]
pub enum Prototype {
    /// Index of the object acting as medoid
    Medoid(usize),
    /// One dense centroid per feature view
    Centroid(Vec<Vec<f64>>),
}

impl Prototype {
    /// Object index when the prototype is a medoid
    pub fn medoid(&self) -> Option<usize> {
        match self {
            Prototype::Medoid(idx) => Some(*idx),
            Prototype::Centroid(_) => None,
        }
    }

    pub fn strategy(&self) -> PrototypeStrategy {
        match self {
            Prototype::Medoid(_) => PrototypeStrategy::Medoid,
            Prototype::Centroid(_) => PrototypeStrategy::Centroid,
        }
    }
}

/// Trait for calculating the distance between two feature vectors
pub trait VectorDistance {
    /// Calculate the distance between two vectors under the given metric
    fn distance_by(&self, right: &Self, metric: DistanceMetric) -> f64;
}

impl VectorDistance for [f64] {
    /// Only paired elements are compared; callers validate equal lengths
    fn distance_by(&self, right: &Self, metric: DistanceMetric) -> f64 {
        let pairs = self.iter().zip(right.iter());
        match metric {
            DistanceMetric::Euclidean => pairs.map(|(a, b)| (a - b) * (a - b)).sum::<f64>().sqrt(),
            DistanceMetric::SquaredEuclidean => pairs.map(|(a, b)| (a - b) * (a - b)).sum::<f64>(),
            DistanceMetric::Cityblock => pairs.map(|(a, b)| (a - b).abs()).sum::<f64>(),
        }
    }
}

impl VectorDistance for Vec<f64> {
    fn distance_by(&self, right: &Self, metric: DistanceMetric) -> f64 {
        self.as_slice().distance_by(right.as_slice(), metric)
    }
}

/// Operations required for centroid calculations
pub trait CentroidValue {
    /// Create a zero value of the given dimension
    fn zero(dim: usize) -> Self;
    /// Element-wise sum of two values
    fn sum_by_field(&self, right: &Self) -> Self;
    /// Divide all elements by a scalar value (for averaging)
    fn div_by_n(&self, div: usize) -> Self;
}

impl CentroidValue for Vec<f64> {
    fn zero(dim: usize) -> Self {
        vec![0.0; dim]
    }
    fn sum_by_field(&self, right: &Self) -> Self {
        self.iter().zip(right.iter()).map(|(a, b)| a + b).collect()
    }
    fn div_by_n(&self, div: usize) -> Self {
        self.iter().map(|a| a / div as f64).collect()
    }
}
