use crate::{error::ClusterError, types::CentroidValue};

/// P feature views over the same N objects; view `p` is an N x d_p table.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureViews {
    views: Vec<Vec<Vec<f64>>>,
}

impl FeatureViews {
    pub fn new(views: Vec<Vec<Vec<f64>>>) -> Result<Self, ClusterError> {
        let n = match views.first() {
            Some(view) => view.len(),
            None => return Err(ClusterError::shape(0, 1, 0)),
        };
        if n == 0 {
            return Err(ClusterError::shape(0, 1, 0));
        }
        for (view_id, view) in views.iter().enumerate() {
            if view.len() != n {
                return Err(ClusterError::shape(view_id, n, view.len()));
            }
            let dim = view[0].len();
            if dim == 0 {
                return Err(ClusterError::shape(view_id, 1, 0));
            }
            for (row_id, row) in view.iter().enumerate() {
                if row.len() != dim {
                    return Err(ClusterError::shape(view_id, dim, row.len()));
                }
                if let Some(col) = row.iter().position(|value| !value.is_finite()) {
                    return Err(ClusterError::NonFinite {
                        view: view_id,
                        row: row_id,
                        col,
                    });
                }
            }
        }
        Ok(Self { views })
    }

    /// Single view built from a point table, the usual input of the validity indices.
    pub fn from_points(points: Vec<Vec<f64>>) -> Result<Self, ClusterError> {
        Self::new(vec![points])
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    pub fn object_count(&self) -> usize {
        self.views[0].len()
    }

    pub fn dim(&self, view: usize) -> usize {
        self.views[view][0].len()
    }

    pub fn row(&self, view: usize, object: usize) -> &[f64] {
        &self.views[view][object]
    }

    pub fn view(&self, view: usize) -> &[Vec<f64>] {
        &self.views[view]
    }

    /// Component-wise mean of the given objects in one view.
    pub fn centroid(&self, view: usize, members: &[usize]) -> Result<Vec<f64>, ClusterError> {
        if members.is_empty() {
            return Err(ClusterError::invalid_parameter("centroid of an empty member set"));
        }
        let sum = members.iter().fold(Vec::<f64>::zero(self.dim(view)), |acc, &object| {
            acc.sum_by_field(&self.views[view][object])
        });
        Ok(sum.div_by_n(members.len()))
    }
}
