use std::collections::BTreeSet;

use crate::{error::ClusterError, types::Prototype};

/// Crisp assignment of N objects to cluster ids in `[0, k)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    labels: Vec<usize>,
    k: usize,
}

impl Partition {
    pub fn new(labels: Vec<usize>, k: usize) -> Result<Self, ClusterError> {
        if k == 0 {
            return Err(ClusterError::invalid_parameter("k must be at least 1"));
        }
        if labels.is_empty() {
            return Err(ClusterError::invalid_parameter("partition has no objects"));
        }
        if let Some((object, label)) = labels.iter().enumerate().find(|(_, label)| **label >= k) {
            return Err(ClusterError::invalid_parameter(format!(
                "object {} has label {} outside [0, {})",
                object, label, k
            )));
        }
        Ok(Self { labels, k })
    }

    /// Build from member lists, e.g. `[[0, 1], [2, 3]]`; each object appears exactly once.
    pub fn from_groups(groups: &[Vec<usize>], n: usize) -> Result<Self, ClusterError> {
        let mut labels: Vec<Option<usize>> = vec![None; n];
        for (cluster, members) in groups.iter().enumerate() {
            for &object in members {
                match labels.get_mut(object) {
                    Some(slot) if slot.is_none() => *slot = Some(cluster),
                    Some(_) => {
                        return Err(ClusterError::invalid_parameter(format!(
                            "object {} appears in more than one group",
                            object
                        )));
                    }
                    None => {
                        return Err(ClusterError::invalid_parameter(format!(
                            "object {} outside [0, {})",
                            object, n
                        )));
                    }
                }
            }
        }
        let labels = labels
            .into_iter()
            .enumerate()
            .map(|(object, label)| {
                label.ok_or_else(|| ClusterError::invalid_parameter(format!("object {} is in no group", object)))
            })
            .collect::<Result<Vec<usize>, _>>()?;
        Self::new(labels, groups.len())
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn label(&self, object: usize) -> usize {
        self.labels[object]
    }

    pub fn cluster_count(&self) -> usize {
        self.k
    }

    pub fn object_count(&self) -> usize {
        self.labels.len()
    }

    /// Members of `cluster` in ascending object order.
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(object, label)| if *label == cluster { Some(object) } else { None })
            .collect()
    }

    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.k];
        for (object, label) in self.labels.iter().enumerate() {
            groups[*label].push(object);
        }
        groups
    }

    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k];
        for label in self.labels.iter() {
            sizes[*label] += 1;
        }
        sizes
    }

    pub fn non_empty_clusters(&self) -> BTreeSet<usize> {
        self.labels.iter().copied().collect()
    }

    /// First empty cluster id, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.sizes().iter().position(|size| *size == 0)
    }
}

/// One cluster of a finished or in-progress run.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    pub id: usize,
    pub members: Vec<usize>,
    pub prototype: Prototype,
    /// One relevance weight per source; their product is 1.
    pub weights: Vec<f64>,
}
