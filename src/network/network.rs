use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::layers::dense::Layer;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::train::training_set::TrainingSet;

/// Hidden and output activations produced by one forward pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activations<const H: usize, const O: usize> {
    pub hidden: [f64; H],
    pub output: [f64; O],
}

/// Single-hidden-layer sigmoid network with `F` inputs, `H` hidden units and
/// `O` outputs.
///
/// All state lives inline: parameters, the activation caches of the last
/// forward pass, and the error accumulated by the last backpropagation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Network<const F: usize, const H: usize, const O: usize> {
    pub hidden: Layer<F, H>,
    pub output: Layer<H, O>,
    pub(crate) training_error: f64,
}

impl<const F: usize, const H: usize, const O: usize> Network<F, H, O> {
    /// Builds a network with every weight and bias drawn from U[0, 1).
    pub fn new<G: Rng + ?Sized>(rng: &mut G) -> Network<F, H, O> {
        let mut network = Network::from_layers(
            Layer::from_parts(Matrix::zeros(), [0.0; H]),
            Layer::from_parts(Matrix::zeros(), [0.0; O]),
        );
        network.initialize(rng);
        network
    }

    /// Builds a network from known parameters.
    pub fn from_layers(hidden: Layer<F, H>, output: Layer<H, O>) -> Network<F, H, O> {
        Network {
            hidden,
            output,
            training_error: 1.0,
        }
    }

    /// Redraws all parameters, clears both caches and resets the error to 1.
    pub fn initialize<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        debug!(
            input_features = F,
            hidden_nodes = H,
            output_nodes = O,
            "initializing connection weights"
        );
        self.hidden.randomize(rng);
        self.output.randomize(rng);
        self.training_error = 1.0;
    }

    /// Forward pass; caches activations in each layer for backprop and
    /// returns them.
    pub fn forward(&mut self, input: &[f64; F]) -> Activations<H, O> {
        let hidden = self.hidden.feed_from(input);
        let output = self.output.feed_from(&hidden);
        Activations { hidden, output }
    }

    pub fn predict(&mut self, input: &[f64; F]) -> [f64; O] {
        self.forward(input).output
    }

    /// Mean squared error of the current parameters over the whole set.
    ///
    /// Runs a forward pass per sample, so the caches end up holding the
    /// activations of the last sample.
    pub fn evaluate(&mut self, set: &TrainingSet<'_, F, O>) -> f64 {
        let total: f64 = set
            .iter()
            .map(|(input, expected)| MseLoss::loss(&self.predict(input), expected))
            .sum();
        total / set.len() as f64
    }

    /// Loading trained parameters is not provided.
    pub fn load<P: AsRef<Path>>(_path: P) -> Result<Network<F, H, O>> {
        Err(Error::Unsupported("loading trained network parameters"))
    }

    pub fn input_to_hidden(&self) -> &Matrix<F, H> {
        &self.hidden.weights
    }

    pub fn hidden_to_output(&self) -> &Matrix<H, O> {
        &self.output.weights
    }

    pub fn hidden_bias(&self) -> &[f64; H] {
        &self.hidden.biases
    }

    pub fn output_bias(&self) -> &[f64; O] {
        &self.output.biases
    }

    pub fn hidden_activation(&self) -> &[f64; H] {
        &self.hidden.neurons
    }

    pub fn output_activation(&self) -> &[f64; O] {
        &self.output.neurons
    }

    /// Error accumulated by backpropagation since the last reset.
    pub fn training_error(&self) -> f64 {
        self.training_error
    }

    pub(crate) fn cached_activations(&self) -> Activations<H, O> {
        Activations {
            hidden: self.hidden.neurons,
            output: self.output.neurons,
        }
    }
}
