//! Iterative assignment/update loop with locally learned relevance weights
//!
//! One round is `Assigning` (every object moves to the cluster with minimum
//! weighted aggregate distance) followed by `Updating` (prototypes, then
//! relevance weights, per cluster). Each phase is a parallel map with a
//! barrier in between; rounds run sequentially, so the objective never
//! increases from one round to the next.

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    centroids::centroid_recalculate,
    context::OptimizerConfig,
    dissimilarity::DissimilarityModel,
    error::ClusterError,
    medoids::medoid_recalculate,
    partition::{Cluster, Partition},
    relevance::RelevanceWeightSolver,
    types::{Prototype, PrototypeStrategy},
};

/// Lifecycle of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptimizerState {
    Initialized,
    Assigning,
    Updating,
    Converged,
    IterationLimitReached,
    Done,
}

impl OptimizerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Converged | Self::IterationLimitReached | Self::Done)
    }
}

/// How a finished run ended; neither case is an error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Converged,
    IterationLimitReached,
}

/// Summary of one completed round
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundReport {
    pub round: usize,
    pub objective: f64,
    /// Previous objective minus this one
    pub decrease: f64,
    /// Objects whose label changed in this round
    pub moved: usize,
    pub state: OptimizerState,
}

/// Partition, clusters and objective trace of a run
#[derive(Clone, Debug, PartialEq)]
pub struct ClusteringOutcome {
    pub partition: Partition,
    pub clusters: Vec<Cluster>,
    /// `None` for the state of an interrupted run
    pub termination: Option<Termination>,
    pub rounds: usize,
    pub objective: f64,
    /// Objective after initialization followed by one value per round
    pub objective_history: Vec<f64>,
}

impl ClusteringOutcome {
    pub fn reached_iteration_limit(&self) -> bool {
        self.termination == Some(Termination::IterationLimitReached)
    }

    /// Weight vectors indexed by cluster id
    pub fn weights(&self) -> Vec<Vec<f64>> {
        self.clusters.iter().map(|cluster| cluster.weights.clone()).collect()
    }

    /// Medoid of every cluster, when the run used medoid prototypes
    pub fn medoids(&self) -> Option<Vec<usize>> {
        self.clusters.iter().map(|cluster| cluster.prototype.medoid()).collect()
    }
}

/// A run that failed mid-way, with the state of the last completed round
#[derive(Debug, Error)]
#[error("{error} after {} completed rounds", .last_valid.rounds)]
pub struct OptimizerFailure {
    #[source]
    pub error: ClusterError,
    pub last_valid: ClusteringOutcome,
}

/// Relational partitioning with per-cluster relevance weights
#[derive(Clone, Debug)]
pub struct PartitionOptimizer<'a> {
    model: &'a DissimilarityModel,
    config: OptimizerConfig,
    solver: RelevanceWeightSolver,
    state: OptimizerState,
    partition: Partition,
    clusters: Vec<Cluster>,
    round: usize,
    objective_history: Vec<f64>,
    termination: Option<Termination>,
}

impl<'a> PartitionOptimizer<'a> {
    /// Start from an initial partition
    ///
    /// Prototypes are computed from the partition with unit weights, then the
    /// weights are solved for those prototypes. Every cluster must be non-empty.
    pub fn from_partition(
        model: &'a DissimilarityModel,
        partition: Partition,
        config: OptimizerConfig,
    ) -> Result<Self, ClusterError> {
        check_config(model, &config)?;
        if partition.object_count() != model.object_count() {
            return Err(ClusterError::invalid_parameter(format!(
                "partition covers {} objects, model has {}",
                partition.object_count(),
                model.object_count()
            )));
        }
        if let Some(cluster) = partition.first_empty() {
            return Err(ClusterError::EmptyCluster { cluster });
        }

        let solver = config.solver();
        let unit = vec![1.0; model.source_count()];
        let clusters = partition
            .groups()
            .into_par_iter()
            .enumerate()
            .map(|(id, members)| {
                let prototype = prototype_recalculate(model, config.strategy, id, &members, &unit, None)?;
                let weights = solver.solve(model, id, &members, &prototype)?;
                Ok(Cluster {
                    id,
                    members,
                    prototype,
                    weights,
                })
            })
            .collect::<Result<Vec<Cluster>, ClusterError>>()?;

        Ok(Self::initialized(model, config, solver, partition, clusters))
    }

    /// Start from initial prototypes with unit weights
    ///
    /// Objects are assigned to the nearest prototype right away; a prototype
    /// that attracts no object fails with `EmptyCluster`.
    pub fn from_prototypes(
        model: &'a DissimilarityModel,
        prototypes: Vec<Prototype>,
        config: OptimizerConfig,
    ) -> Result<Self, ClusterError> {
        check_config(model, &config)?;
        if prototypes.is_empty() {
            return Err(ClusterError::invalid_parameter("at least one prototype is required"));
        }
        for prototype in prototypes.iter() {
            check_prototype(model, config.strategy, prototype)?;
        }

        let unit = vec![1.0; model.source_count()];
        let mut clusters: Vec<Cluster> = prototypes
            .into_iter()
            .enumerate()
            .map(|(id, prototype)| Cluster {
                id,
                members: Vec::new(),
                prototype,
                weights: unit.clone(),
            })
            .collect();

        let partition = Partition::new(assign_points(model, &clusters), clusters.len())?;
        if let Some(cluster) = partition.first_empty() {
            return Err(ClusterError::EmptyCluster { cluster });
        }
        for (cluster, members) in clusters.iter_mut().zip(partition.groups()) {
            cluster.members = members;
        }

        let solver = config.solver();
        Ok(Self::initialized(model, config, solver, partition, clusters))
    }

    fn initialized(
        model: &'a DissimilarityModel,
        config: OptimizerConfig,
        solver: RelevanceWeightSolver,
        partition: Partition,
        clusters: Vec<Cluster>,
    ) -> Self {
        let objective = objective(model, &clusters);
        debug!(
            objects = model.object_count(),
            sources = model.source_count(),
            k = clusters.len(),
            objective,
            "optimizer initialized"
        );
        Self {
            model,
            config,
            solver,
            state: OptimizerState::Initialized,
            partition,
            clusters,
            round: 0,
            objective_history: vec![objective],
            termination: None,
        }
    }

    pub fn state(&self) -> OptimizerState {
        self.state
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn objective(&self) -> f64 {
        self.objective_history[self.objective_history.len() - 1]
    }

    pub fn objective_history(&self) -> &[f64] {
        &self.objective_history
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Run one Assign + Update round
    ///
    /// On failure nothing is committed: partition, clusters and state stay as
    /// they were after the last completed round.
    pub fn step(&mut self) -> Result<RoundReport, ClusterError> {
        if self.state.is_terminal() {
            return Err(ClusterError::FinalizedState);
        }
        let resume_state = self.state;

        // Assigning
        self.state = OptimizerState::Assigning;
        let labels = assign_points(self.model, &self.clusters);
        let moved = labels
            .iter()
            .zip(self.partition.labels())
            .filter(|(new, old)| new != old)
            .count();
        let partition = match Partition::new(labels, self.clusters.len()) {
            Ok(partition) => partition,
            Err(err) => {
                self.state = resume_state;
                return Err(err);
            }
        };
        if let Some(cluster) = partition.first_empty() {
            self.state = resume_state;
            warn!(round = self.round + 1, cluster, "assignment emptied a cluster");
            return Err(ClusterError::EmptyCluster { cluster });
        }

        // Updating
        self.state = OptimizerState::Updating;
        let clusters = match recalculate(self.model, self.config.strategy, &self.solver, &partition, &self.clusters) {
            Ok(clusters) => clusters,
            Err(err) => {
                self.state = resume_state;
                warn!(round = self.round + 1, error = %err, "cluster update failed");
                return Err(err);
            }
        };

        let objective = objective(self.model, &clusters);
        let previous = self.objective();
        let decrease = previous - objective;

        self.partition = partition;
        self.clusters = clusters;
        self.round += 1;
        self.objective_history.push(objective);

        let threshold = self.config.tolerance * self.objective_history[0].abs();
        self.state = if decrease <= threshold {
            OptimizerState::Converged
        } else if self.round >= self.config.max_iterations {
            OptimizerState::IterationLimitReached
        } else {
            OptimizerState::Assigning
        };
        self.termination = match self.state {
            OptimizerState::Converged => Some(Termination::Converged),
            OptimizerState::IterationLimitReached => Some(Termination::IterationLimitReached),
            _ => None,
        };

        debug!(round = self.round, objective, decrease, moved, state = ?self.state, "round completed");
        Ok(RoundReport {
            round: self.round,
            objective,
            decrease,
            moved,
            state: self.state,
        })
    }

    /// Current state as an outcome; `termination` is set once the loop has stopped
    pub fn snapshot(&self) -> ClusteringOutcome {
        ClusteringOutcome {
            partition: self.partition.clone(),
            clusters: self.clusters.clone(),
            termination: self.termination,
            rounds: self.round,
            objective: self.objective(),
            objective_history: self.objective_history.clone(),
        }
    }

    /// Hand out the outcome of a stopped loop and move to `Done`
    ///
    /// Fails with `InvalidParameter` while rounds are still pending and with
    /// `FinalizedState` once the outcome was already taken.
    pub fn finish(&mut self) -> Result<ClusteringOutcome, ClusterError> {
        match self.state {
            OptimizerState::Done => return Err(ClusterError::FinalizedState),
            OptimizerState::Converged | OptimizerState::IterationLimitReached => {}
            _ => return Err(ClusterError::invalid_parameter("optimizer has rounds pending")),
        }
        let outcome = self.snapshot();
        info!(
            termination = ?outcome.termination,
            rounds = outcome.rounds,
            objective = outcome.objective,
            "optimizer finished"
        );
        self.state = OptimizerState::Done;
        Ok(outcome)
    }

    /// Iterate until convergence or the iteration limit
    pub fn run(mut self) -> Result<ClusteringOutcome, OptimizerFailure> {
        while !self.state.is_terminal() {
            if let Err(error) = self.step() {
                return Err(OptimizerFailure {
                    error,
                    last_valid: self.snapshot(),
                });
            }
        }
        self.finish().map_err(|error| OptimizerFailure {
            error,
            last_valid: self.snapshot(),
        })
    }
}

fn check_config(model: &DissimilarityModel, config: &OptimizerConfig) -> Result<(), ClusterError> {
    config.validate()?;
    if config.strategy == PrototypeStrategy::Centroid && model.views().is_none() {
        return Err(ClusterError::invalid_parameter(
            "centroid strategy needs a model built from feature views",
        ));
    }
    Ok(())
}

fn check_prototype(
    model: &DissimilarityModel,
    strategy: PrototypeStrategy,
    prototype: &Prototype,
) -> Result<(), ClusterError> {
    if prototype.strategy() != strategy {
        return Err(ClusterError::invalid_parameter(format!(
            "{:?} prototype supplied to a {:?} run",
            prototype.strategy(),
            strategy
        )));
    }
    match prototype {
        Prototype::Medoid(medoid) if *medoid >= model.object_count() => Err(ClusterError::invalid_parameter(
            format!("medoid {} outside [0, {})", medoid, model.object_count()),
        )),
        Prototype::Medoid(_) => Ok(()),
        Prototype::Centroid(centroids) => {
            // check_config guarantees views for the centroid strategy
            let Some(views) = model.views() else {
                return Err(ClusterError::invalid_parameter("centroid prototype without feature views"));
            };
            if centroids.len() != views.view_count() {
                return Err(ClusterError::shape(0, views.view_count(), centroids.len()));
            }
            for (view, centroid) in centroids.iter().enumerate() {
                if centroid.len() != views.dim(view) {
                    return Err(ClusterError::shape(view, views.dim(view), centroid.len()));
                }
            }
            Ok(())
        }
    }
}

/// Assign every object to the cluster of minimum weighted aggregate distance,
/// ties going to the lowest cluster id
fn assign_points(model: &DissimilarityModel, clusters: &[Cluster]) -> Vec<usize> {
    (0..model.object_count())
        .into_par_iter()
        .map(|object| {
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for cluster in clusters.iter() {
                let distance = model.weighted_distance(object, &cluster.prototype, &cluster.weights);
                if distance < best_distance {
                    best = cluster.id;
                    best_distance = distance;
                }
            }
            best
        })
        .collect()
}

fn prototype_recalculate(
    model: &DissimilarityModel,
    strategy: PrototypeStrategy,
    cluster: usize,
    members: &[usize],
    weights: &[f64],
    current: Option<&Prototype>,
) -> Result<Prototype, ClusterError> {
    match strategy {
        PrototypeStrategy::Medoid => {
            medoid_recalculate(model, cluster, members, weights, current.and_then(|prototype| prototype.medoid()))
        }
        PrototypeStrategy::Centroid => centroid_recalculate(model, cluster, members),
    }
}

/// Prototype with the current weights, then weights for the new prototype
fn recalculate(
    model: &DissimilarityModel,
    strategy: PrototypeStrategy,
    solver: &RelevanceWeightSolver,
    partition: &Partition,
    current: &[Cluster],
) -> Result<Vec<Cluster>, ClusterError> {
    partition
        .groups()
        .into_par_iter()
        .zip(current.par_iter())
        .map(|(members, cluster)| {
            let prototype = prototype_recalculate(
                model,
                strategy,
                cluster.id,
                &members,
                &cluster.weights,
                Some(&cluster.prototype),
            )?;
            let weights = solver.solve(model, cluster.id, &members, &prototype)?;
            Ok(Cluster {
                id: cluster.id,
                members,
                prototype,
                weights,
            })
        })
        .collect()
}

/// `sum_k sum_{i in cluster k} sum_j w[k][j] * d_j(i, prototype[k])`
pub fn objective(model: &DissimilarityModel, clusters: &[Cluster]) -> f64 {
    clusters
        .par_iter()
        .map(|cluster| {
            cluster
                .members
                .iter()
                .map(|&object| model.weighted_distance(object, &cluster.prototype, &cluster.weights))
                .sum::<f64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{types::DistanceMetric, views::FeatureViews};
    use rand::{RngExt, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn two_source_model() -> DissimilarityModel {
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

    /// Two well separated groups of points seen through two views
    fn blob_views(seed: u64) -> FeatureViews {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let mut first = Vec::new();
        let mut second = Vec::new();
        for object in 0..12 {
            let offset = if object < 6 { 0.0 } else { 10.0 };
            first.push(vec![
                offset + rng.random_range(0.0..1.0),
                offset + rng.random_range(0.0..1.0),
            ]);
            second.push(vec![offset * 3.0 + rng.random_range(0.0..3.0)]);
        }
        FeatureViews::new(vec![first, second]).unwrap()
    }

    #[test]
    fn fixed_point_converges_in_one_round() {
        let model = two_source_model();
        let partition = Partition::from_groups(&[vec![0, 1], vec![2, 3]], 4).unwrap();
        let optimizer = PartitionOptimizer::from_partition(&model, partition, OptimizerConfig::default()).unwrap();

        assert_eq!(optimizer.state(), OptimizerState::Initialized);
        assert_eq!(optimizer.clusters()[0].prototype, Prototype::Medoid(0));
        assert_eq!(optimizer.clusters()[1].prototype, Prototype::Medoid(2));
        let expected = 4.0 * 2f64.sqrt();
        assert!((optimizer.objective() - expected).abs() < 1e-12);

        let outcome = optimizer.run().unwrap();
        assert_eq!(outcome.termination, Some(Termination::Converged));
        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.partition.labels(), &[0, 0, 1, 1]);
        for weights in outcome.weights() {
            assert!((weights[0] - 2f64.sqrt()).abs() < 1e-12);
            assert!((weights[1] - 0.5f64.sqrt()).abs() < 1e-12);
        }
        assert_eq!(outcome.medoids(), Some(vec![0, 2]));
    }

    #[test]
    fn duplicate_prototypes_leave_a_cluster_empty() {
        let model = two_source_model();
        // Both prototypes at object 0: every object ties and goes to cluster 0
        let err = PartitionOptimizer::from_prototypes(
            &model,
            vec![Prototype::Medoid(0), Prototype::Medoid(0)],
            OptimizerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ClusterError::EmptyCluster { cluster: 1 }));
    }

    #[test]
    fn tie_at_start_leaves_a_degenerate_singleton() {
        let model = two_source_model();
        // Object 2 ties between prototypes 0 and 3 and goes to cluster 0, leaving {3}
        let optimizer = PartitionOptimizer::from_prototypes(
            &model,
            vec![Prototype::Medoid(0), Prototype::Medoid(3)],
            OptimizerConfig::default(),
        )
        .unwrap();
        assert_eq!(optimizer.partition().labels(), &[0, 0, 0, 1]);

        let failure = optimizer.run().unwrap_err();
        assert!(matches!(failure.error, ClusterError::DegenerateSource { cluster: 1, .. }));
        assert_eq!(failure.last_valid.rounds, 0);
        assert_eq!(failure.last_valid.termination, None);
        assert_eq!(failure.last_valid.partition.labels(), &[0, 0, 0, 1]);
    }

    #[test]
    fn step_after_termination_is_rejected() {
        let model = two_source_model();
        let partition = Partition::from_groups(&[vec![0, 1], vec![2, 3]], 4).unwrap();
        let mut optimizer = PartitionOptimizer::from_partition(&model, partition, OptimizerConfig::default()).unwrap();
        let report = optimizer.step().unwrap();
        assert_eq!(report.state, OptimizerState::Converged);
        assert_eq!(report.moved, 0);
        assert!(matches!(optimizer.step(), Err(ClusterError::FinalizedState)));
    }

    #[test]
    fn finish_moves_to_done_once() {
        let model = two_source_model();
        let partition = Partition::from_groups(&[vec![0, 1], vec![2, 3]], 4).unwrap();
        let mut optimizer = PartitionOptimizer::from_partition(&model, partition, OptimizerConfig::default()).unwrap();
        assert!(matches!(optimizer.finish(), Err(ClusterError::InvalidParameter { .. })));

        optimizer.step().unwrap();
        let outcome = optimizer.finish().unwrap();
        assert_eq!(optimizer.state(), OptimizerState::Done);
        assert_eq!(outcome.termination, Some(Termination::Converged));
        assert_eq!(optimizer.snapshot().termination, Some(Termination::Converged));
        assert!(matches!(optimizer.finish(), Err(ClusterError::FinalizedState)));
        assert!(matches!(optimizer.step(), Err(ClusterError::FinalizedState)));
    }

    #[test]
    fn assignment_emptying_a_cluster_fails_the_run() {
        // Both centroids land on 1.5, every object ties and goes to cluster 0
        let views = FeatureViews::from_points(vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let model = DissimilarityModel::from_views(views, DistanceMetric::Euclidean).unwrap();
        let start = Partition::new(vec![0, 1, 1, 0], 2).unwrap();
        let config = OptimizerConfig {
            strategy: PrototypeStrategy::Centroid,
            ..OptimizerConfig::default()
        };

        let failure = PartitionOptimizer::from_partition(&model, start.clone(), config)
            .unwrap()
            .run()
            .unwrap_err();
        assert!(matches!(failure.error, ClusterError::EmptyCluster { cluster: 1 }));
        assert_eq!(failure.last_valid.partition, start);
        assert_eq!(failure.last_valid.rounds, 0);
        assert_eq!(failure.last_valid.termination, None);
        assert_eq!(failure.last_valid.objective_history.len(), 1);
        assert_eq!(failure.to_string(), "Cluster 1 is empty after 0 completed rounds");
        assert!(std::error::Error::source(&failure).is_some());
    }

    #[test]
    fn iteration_limit_is_a_flag() {
        let model = DissimilarityModel::from_views(blob_views(7), DistanceMetric::Euclidean).unwrap();
        // Object 5 starts in the wrong group and moves in the first round
        let labels: Vec<usize> = (0..12).map(|object| if object < 5 { 0 } else { 1 }).collect();
        let partition = Partition::new(labels, 2).unwrap();
        let config = OptimizerConfig {
            max_iterations: 1,
            ..OptimizerConfig::default()
        };
        let outcome = PartitionOptimizer::from_partition(&model, partition, config).unwrap().run().unwrap();
        assert_eq!(outcome.rounds, 1);
        assert!(outcome.reached_iteration_limit());
        assert_eq!(outcome.partition.label(5), 0);
        assert_eq!(outcome.objective_history.len(), 2);
    }

    #[test]
    fn centroid_strategy_recovers_blobs() {
        let model = DissimilarityModel::from_views(blob_views(11), DistanceMetric::Euclidean).unwrap();
        let prototypes = vec![
            Prototype::Centroid(vec![vec![0.5, 0.5], vec![1.5]]),
            Prototype::Centroid(vec![vec![10.5, 10.5], vec![31.5]]),
        ];
        let config = OptimizerConfig {
            strategy: PrototypeStrategy::Centroid,
            ..OptimizerConfig::default()
        };
        let outcome = PartitionOptimizer::from_prototypes(&model, prototypes, config).unwrap().run().unwrap();
        assert_eq!(outcome.termination, Some(Termination::Converged));
        let expected: Vec<usize> = (0..12).map(|object| if object < 6 { 0 } else { 1 }).collect();
        assert_eq!(outcome.partition.labels(), expected.as_slice());
        for cluster in outcome.clusters.iter() {
            assert!((cluster.weights.iter().product::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn objective_history_never_increases() {
        for seed in 0..20 {
            let model = DissimilarityModel::from_views(blob_views(seed), DistanceMetric::Cityblock).unwrap();
            let mut rng = ChaChaRng::seed_from_u64(seed);
            let mut labels: Vec<usize> = (0..12).map(|_| rng.random_range(0..3)).collect();
            labels[0] = 0;
            labels[1] = 1;
            labels[2] = 2;
            let partition = Partition::new(labels, 3).unwrap();
            // Singleton clusters have a degenerate medoid and are skipped
            let Ok(mut optimizer) = PartitionOptimizer::from_partition(&model, partition, OptimizerConfig::default())
            else {
                continue;
            };
            while !optimizer.state().is_terminal() {
                if optimizer.step().is_err() {
                    break;
                }
            }
            for pair in optimizer.objective_history().windows(2) {
                assert!(pair[1] <= pair[0] + 1e-9 * pair[0].abs().max(1.0));
            }
            assert!(optimizer.round() <= OptimizerConfig::default().max_iterations);
        }
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        let model = two_source_model();
        let partition = Partition::new(vec![0, 1, 0], 2).unwrap();
        assert!(PartitionOptimizer::from_partition(&model, partition, OptimizerConfig::default()).is_err());

        let centroid_run = OptimizerConfig {
            strategy: PrototypeStrategy::Centroid,
            ..OptimizerConfig::default()
        };
        let partition = Partition::new(vec![0, 1, 0, 1], 2).unwrap();
        assert!(matches!(
            PartitionOptimizer::from_partition(&model, partition, centroid_run),
            Err(ClusterError::InvalidParameter { .. })
        ));
        assert!(PartitionOptimizer::from_prototypes(&model, vec![Prototype::Medoid(9)], OptimizerConfig::default())
            .is_err());
        assert!(PartitionOptimizer::from_prototypes(&model, vec![], OptimizerConfig::default()).is_err());
    }
}
