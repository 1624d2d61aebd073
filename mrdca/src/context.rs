use serde::{Deserialize, Serialize};

use crate::{error::ClusterError, relevance::RelevanceWeightSolver, types::PrototypeStrategy};

// Parameters of one optimizer run. Missing JSON fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub strategy: PrototypeStrategy,
    /// Convergence threshold, relative to the objective after initialization
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Source totals at or below this value fail with `DegenerateSource`
    pub min_source_total: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            strategy: PrototypeStrategy::Medoid,
            tolerance: 1e-6,
            max_iterations: 50,
            min_source_total: 1e-12,
        }
    }
}

impl OptimizerConfig {
    pub fn from_json(document: &str) -> Result<Self, ClusterError> {
        let config: OptimizerConfig = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClusterError::invalid_parameter(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(ClusterError::invalid_parameter("max_iterations must be at least 1"));
        }
        if self.min_source_total.is_nan() || self.min_source_total < 0.0 {
            return Err(ClusterError::invalid_parameter(format!(
                "min_source_total must be non-negative, got {}",
                self.min_source_total
            )));
        }
        Ok(())
    }

    pub fn solver(&self) -> RelevanceWeightSolver {
        RelevanceWeightSolver::new(self.min_source_total)
    }
}
