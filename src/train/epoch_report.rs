use serde::Serialize;

use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Borrowed snapshot of a network's state at one epoch, handed to a
/// `ProgressSink`.
///
/// Connection matrices are only filled in for the final report of a run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EpochReport<'a, const F: usize, const H: usize, const O: usize> {
    /// 1-based epoch counter.
    pub epoch: u64,
    /// `training_error` of the network at report time.
    pub error: f64,
    pub hidden: &'a [f64],
    pub hidden_bias: &'a [f64],
    pub output: &'a [f64],
    pub output_bias: &'a [f64],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_to_hidden: Option<&'a Matrix<F, H>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_to_output: Option<&'a Matrix<H, O>>,
}

impl<'a, const F: usize, const H: usize, const O: usize> EpochReport<'a, F, H, O> {
    pub fn of(network: &'a Network<F, H, O>, epoch: u64, with_connections: bool) -> Self {
        EpochReport {
            epoch,
            error: network.training_error(),
            hidden: network.hidden_activation(),
            hidden_bias: network.hidden_bias(),
            output: network.output_activation(),
            output_bias: network.output_bias(),
            input_to_hidden: with_connections.then(|| network.input_to_hidden()),
            hidden_to_output: with_connections.then(|| network.hidden_to_output()),
        }
    }

    pub fn is_final(&self) -> bool {
        self.input_to_hidden.is_some()
    }
}
