//! Dissimilarity matrices and the multi-view model they form
//!
//! A `DissimilarityModel` is the immutable input of a clustering run: P square
//! matrices over the same N objects, validated once at construction and read
//! through O(1) lookups afterwards. A model built from feature views also keeps
//! the views, which the centroid strategy needs.

use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::ClusterError,
    types::{DistanceMetric, Prototype, VectorDistance},
    views::FeatureViews,
};

/// Default tolerance for the symmetry and zero-diagonal checks
pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Symmetric, zero-diagonal, non-negative N x N matrix stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct DissimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DissimilarityMatrix {
    /// Validate and build a matrix with the default tolerance
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ClusterError> {
        Self::validated(0, rows, DEFAULT_SYMMETRY_TOLERANCE)
    }

    /// Validate `rows` as matrix number `view` of a model
    ///
    /// # Checks (in order)
    /// 1. Square shape, N >= 1 (`Shape`)
    /// 2. Finite entries (`NonFinite`)
    /// 3. Non-negative off-diagonal entries (`NegativeDissimilarity`)
    /// 4. Zero diagonal within `tolerance` (`InvalidParameter`)
    /// 5. `|d[i][j] - d[j][i]| <= tolerance` (`Asymmetry`)
    pub fn validated(view: usize, rows: Vec<Vec<f64>>, tolerance: f64) -> Result<Self, ClusterError> {
        let n = rows.len();
        if n == 0 {
            return Err(ClusterError::shape(view, 1, 0));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(ClusterError::shape(view, n, row.len()));
        }
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ClusterError::NonFinite { view, row: i, col: j });
                }
                if i != j && value < 0.0 {
                    return Err(ClusterError::NegativeDissimilarity {
                        view,
                        row: i,
                        col: j,
                        value,
                    });
                }
            }
            if row[i].abs() > tolerance {
                return Err(ClusterError::invalid_parameter(format!(
                    "non-zero diagonal in view {} at ({}, {}): {}",
                    view, i, i, row[i]
                )));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let difference = (rows[i][j] - rows[j][i]).abs();
                if difference > tolerance {
                    return Err(ClusterError::Asymmetry {
                        view,
                        row: i,
                        col: j,
                        difference,
                    });
                }
            }
        }
        // Entries within tolerance are snapped: exact zero diagonal, mean of each mirrored pair
        let mut data: Vec<f64> = rows.into_iter().flatten().collect();
        for i in 0..n {
            data[i * n + i] = 0.0;
            for j in (i + 1)..n {
                let mean = (data[i * n + j] + data[j * n + i]) / 2.0;
                data[i * n + j] = mean;
                data[j * n + i] = mean;
            }
        }
        Ok(Self { n, data })
    }

    /// Pairwise matrix of one feature view; rows are computed in parallel
    pub fn from_view(view: &[Vec<f64>], metric: DistanceMetric) -> Self {
        let n = view.len();
        let data: Vec<f64> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| (0..n).map(move |j| if i == j { 0.0 } else { view[i].distance_by(&view[j], metric) }))
            .collect();
        Self { n, data }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }
}

/// P dissimilarity sources over the same N objects
#[derive(Clone, Debug)]
pub struct DissimilarityModel {
    matrices: Vec<DissimilarityMatrix>,
    views: Option<FeatureViews>,
}

impl DissimilarityModel {
    pub fn new(matrices: Vec<Vec<Vec<f64>>>) -> Result<Self, ClusterError> {
        Self::with_tolerance(matrices, DEFAULT_SYMMETRY_TOLERANCE)
    }

    pub fn with_tolerance(matrices: Vec<Vec<Vec<f64>>>, tolerance: f64) -> Result<Self, ClusterError> {
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(ClusterError::invalid_parameter("symmetry tolerance must be non-negative"));
        }
        let matrices = matrices
            .into_iter()
            .enumerate()
            .map(|(view, rows)| DissimilarityMatrix::validated(view, rows, tolerance))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_matrices(matrices)
    }

    /// Combine already validated matrices; they must share N
    pub fn from_matrices(matrices: Vec<DissimilarityMatrix>) -> Result<Self, ClusterError> {
        let n = match matrices.first() {
            Some(matrix) => matrix.len(),
            None => return Err(ClusterError::shape(0, 1, 0)),
        };
        if let Some((view, matrix)) = matrices.iter().enumerate().find(|(_, m)| m.len() != n) {
            return Err(ClusterError::shape(view, n, matrix.len()));
        }
        debug!(objects = n, sources = matrices.len(), "dissimilarity model built");
        Ok(Self { matrices, views: None })
    }

    /// Derive one matrix per view and keep the views for centroid prototypes
    pub fn from_views(views: FeatureViews, metric: DistanceMetric) -> Result<Self, ClusterError> {
        let matrices: Vec<DissimilarityMatrix> = (0..views.view_count())
            .map(|view| DissimilarityMatrix::from_view(views.view(view), metric))
            .collect();
        for (view, matrix) in matrices.iter().enumerate() {
            if let Some(pos) = matrix.data.iter().position(|value| !value.is_finite()) {
                return Err(ClusterError::NonFinite {
                    view,
                    row: pos / matrix.n,
                    col: pos % matrix.n,
                });
            }
        }
        debug!(objects = views.object_count(), sources = matrices.len(), ?metric, "dissimilarity model derived from views");
        Ok(Self {
            matrices,
            views: Some(views),
        })
    }

    #[inline]
    pub fn distance(&self, source: usize, i: usize, j: usize) -> f64 {
        self.matrices[source].get(i, j)
    }

    /// Distance of `object` to a prototype under one source
    ///
    /// Centroids are compared with squared Euclidean distance in the source's
    /// feature view. A centroid on a model without views is infinitely far.
    pub fn distance_to(&self, source: usize, object: usize, prototype: &Prototype) -> f64 {
        match prototype {
            Prototype::Medoid(medoid) => self.distance(source, object, *medoid),
            Prototype::Centroid(centroids) => match &self.views {
                Some(views) => views
                    .row(source, object)
                    .distance_by(centroids[source].as_slice(), DistanceMetric::SquaredEuclidean),
                None => f64::INFINITY,
            },
        }
    }

    /// `sum_j weights[j] * distance_to(j, object, prototype)`
    pub fn weighted_distance(&self, object: usize, prototype: &Prototype, weights: &[f64]) -> f64 {
        weights
            .iter()
            .enumerate()
            .map(|(source, weight)| weight * self.distance_to(source, object, prototype))
            .sum()
    }

    pub fn source_count(&self) -> usize {
        self.matrices.len()
    }

    pub fn object_count(&self) -> usize {
        self.matrices[0].len()
    }

    pub fn matrix(&self, source: usize) -> &DissimilarityMatrix {
        &self.matrices[source]
    }

    pub fn views(&self) -> Option<&FeatureViews> {
        self.views.as_ref()
    }
}
