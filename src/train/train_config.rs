use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which quantity `train` compares against `error_threshold`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMetric {
    /// Σ 0.5·e² of the hidden-layer weighted error for the one sample drawn
    /// this epoch. Noisy: a single lucky draw can stop training.
    #[default]
    SampleHidden,
    /// Mean squared output error over the whole training set, recomputed
    /// after every step.
    DatasetMse,
}

/// Hyperparameters for a `train` run.
///
/// # Fields
/// - `max_epochs`:       hard upper bound on the epoch counter; at most
///                       `max_epochs - 1` steps run
/// - `min_epochs`:       the error threshold is ignored before this epoch
/// - `learning_rate`:    SGD step size
/// - `error_threshold`:  training stops once the error is at or below this
/// - `log_every`:        report progress every N epochs; `0` disables
/// - `error_metric`:     see `ErrorMetric`
///
/// Missing fields in a JSON file fall back to `TrainConfig::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub max_epochs: u64,
    pub min_epochs: u64,
    pub learning_rate: f64,
    pub error_threshold: f64,
    pub log_every: u64,
    pub error_metric: ErrorMetric,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            max_epochs: 80_000,
            min_epochs: 40_000,
            learning_rate: 0.1,
            error_threshold: 0.0002,
            log_every: 1000,
            error_metric: ErrorMetric::SampleHidden,
        }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        if !self.error_threshold.is_finite() || self.error_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "error_threshold must be a non-negative number, got {}",
                self.error_threshold
            )));
        }
        Ok(())
    }

    /// Reads and validates a config from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
