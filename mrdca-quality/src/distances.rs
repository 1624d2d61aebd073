use mrdca::{
    ClusterError, DissimilarityMatrix, DissimilarityModel, DistanceMetric,
    types::VectorDistance,
};

/// Read-only pairwise distances over N objects, the input of the validity indices.
pub trait PairwiseDistances: Sync {
    fn object_count(&self) -> usize;
    fn pair(&self, i: usize, j: usize) -> f64;
}

impl PairwiseDistances for DissimilarityMatrix {
    fn object_count(&self) -> usize {
        self.len()
    }
    fn pair(&self, i: usize, j: usize) -> f64 {
        self.get(i, j)
    }
}

/// All sources of a model aggregated with one weight vector.
#[derive(Clone, Debug)]
pub struct WeightedDissimilarity<'a> {
    model: &'a DissimilarityModel,
    weights: Vec<f64>,
}

impl<'a> WeightedDissimilarity<'a> {
    /// `weights` needs one entry per source.
    pub fn new(model: &'a DissimilarityModel, weights: Vec<f64>) -> Option<Self> {
        if weights.len() != model.source_count() {
            return None;
        }
        Some(Self { model, weights })
    }

    /// Unit weight on every source.
    pub fn uniform(model: &'a DissimilarityModel) -> Self {
        Self {
            model,
            weights: vec![1.0; model.source_count()],
        }
    }
}

impl PairwiseDistances for WeightedDissimilarity<'_> {
    fn object_count(&self) -> usize {
        self.model.object_count()
    }
    fn pair(&self, i: usize, j: usize) -> f64 {
        self.weights
            .iter()
            .enumerate()
            .map(|(source, weight)| weight * self.model.distance(source, i, j))
            .sum()
    }
}

/// Feature vectors compared on the fly.
#[derive(Clone, Copy, Debug)]
pub struct FeaturePoints<'a> {
    points: &'a [Vec<f64>],
    metric: DistanceMetric,
}

impl<'a> FeaturePoints<'a> {
    /// Every point needs the dimension of the first one
    pub fn new(points: &'a [Vec<f64>], metric: DistanceMetric) -> Result<Self, ClusterError> {
        if let Some(first) = points.first() {
            if let Some(row) = points.iter().find(|row| row.len() != first.len()) {
                return Err(ClusterError::shape(0, first.len(), row.len()));
            }
        }
        Ok(Self { points, metric })
    }

    pub fn euclidean(points: &'a [Vec<f64>]) -> Result<Self, ClusterError> {
        Self::new(points, DistanceMetric::Euclidean)
    }
}

impl PairwiseDistances for FeaturePoints<'_> {
    fn object_count(&self) -> usize {
        self.points.len()
    }
    fn pair(&self, i: usize, j: usize) -> f64 {
        self.points[i].distance_by(&self.points[j], self.metric)
    }
}
