use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_report::EpochReport;
use crate::train::sink::ProgressSink;
use crate::train::train_config::{ErrorMetric, TrainConfig};
use crate::train::trainer::train_step;
use crate::train::training_set::TrainingSet;

/// How a training run ended. Both are normal completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainStatus {
    /// The error was at or below the threshold once `min_epochs` had passed.
    Converged,
    /// The epoch budget ran out first.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrainOutcome {
    pub status: TrainStatus,
    /// Number of training steps actually run.
    pub epochs: u64,
    pub final_error: f64,
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` by online backpropagation on randomly drawn samples.
///
/// Each epoch resets the network's error, draws one sample uniformly from
/// `set`, runs a forward pass and a backpropagation step on it. The loop runs
/// while `epoch < max_epochs` and either `epoch < min_epochs` or the error is
/// still above `error_threshold`, so it always stops within `max_epochs`.
///
/// Every `config.log_every` epochs a report goes to `sink`; one final report
/// carrying the connection matrices is sent when the loop ends.
///
/// # Errors
/// Only `Error::InvalidConfig`, when `config` fails validation. The network is
/// left untouched in that case.
pub fn train<G, S, const F: usize, const H: usize, const O: usize>(
    network: &mut Network<F, H, O>,
    set: &TrainingSet<'_, F, O>,
    config: &TrainConfig,
    rng: &mut G,
    sink: &mut S,
) -> Result<TrainOutcome>
where
    G: Rng + ?Sized,
    S: ProgressSink,
{
    config.validate()?;
    let optimizer = Sgd::new(config.learning_rate);

    info!(
        input_features = F,
        hidden_nodes = H,
        output_nodes = O,
        samples = set.len(),
        max_epochs = config.max_epochs,
        min_epochs = config.min_epochs,
        learning_rate = config.learning_rate,
        error_threshold = config.error_threshold,
        "starting training"
    );

    network.training_error = 1.0;
    let mut epoch: u64 = 1;

    while epoch < config.max_epochs
        && (epoch < config.min_epochs || network.training_error > config.error_threshold)
    {
        network.training_error = 0.0;

        let (input, expected) = set.sample(rng.gen_range(0..set.len()));
        train_step(network, input, expected, &optimizer);

        if config.error_metric == ErrorMetric::DatasetMse {
            network.training_error = network.evaluate(set);
        }

        if config.log_every != 0 && epoch % config.log_every == 0 {
            sink.report(&EpochReport::of(network, epoch, false));
        }

        epoch += 1;
    }

    let converged =
        epoch >= config.min_epochs && network.training_error <= config.error_threshold;
    let outcome = TrainOutcome {
        status: if converged { TrainStatus::Converged } else { TrainStatus::Exhausted },
        epochs: epoch - 1,
        final_error: network.training_error,
    };

    info!(
        status = ?outcome.status,
        epochs = outcome.epochs,
        error = outcome.final_error,
        "training completed"
    );
    sink.report(&EpochReport::of(network, epoch, true));

    Ok(outcome)
}
