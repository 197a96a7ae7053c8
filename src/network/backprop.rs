use crate::activation::activation::sigmoid_derivative;
use crate::network::network::{Activations, Network};
use crate::optim::sgd::Sgd;

/// Per-node error terms computed by one backpropagation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deltas<const H: usize, const O: usize> {
    pub output: [f64; O],
    pub hidden: [f64; H],
    /// Σ 0.5·e² over hidden units, where e is the output delta weighted back
    /// through the hidden-to-output connections.
    pub error: f64,
}

impl<const F: usize, const H: usize, const O: usize> Network<F, H, O> {
    /// Backpropagates using the activations cached by the last `forward`.
    ///
    /// No forward pass is run here: calling this twice in a row reuses the same
    /// (now stale) activations while the parameters keep moving.
    pub fn backpropagate(
        &mut self,
        input: &[f64; F],
        expected: &[f64; O],
        optimizer: &Sgd,
    ) -> Deltas<H, O> {
        let activations = self.cached_activations();
        self.backpropagate_from(input, &activations, expected, optimizer)
    }

    /// Backpropagates from explicitly supplied activations, updating every
    /// parameter in place and adding the sample error to `training_error`.
    ///
    /// Deltas are computed from the pre-update weights; output-side parameters
    /// are then updated before hidden-side ones.
    pub fn backpropagate_from(
        &mut self,
        input: &[f64; F],
        activations: &Activations<H, O>,
        expected: &[f64; O],
        optimizer: &Sgd,
    ) -> Deltas<H, O> {
        let mut delta_output = [0.0; O];
        for ((d, &out), &target) in delta_output
            .iter_mut()
            .zip(activations.output.iter())
            .zip(expected.iter())
        {
            *d = (target - out) * sigmoid_derivative(out);
        }

        let mut delta_hidden = [0.0; H];
        let mut error = 0.0;
        for (i, d) in delta_hidden.iter_mut().enumerate() {
            let weighted: f64 = delta_output
                .iter()
                .zip(self.output.weights.data[i].iter())
                .map(|(delta, w)| delta * w)
                .sum();
            *d = weighted * sigmoid_derivative(activations.hidden[i]);
            error += 0.5 * weighted * weighted;
        }
        self.training_error += error;

        optimizer.step(&mut self.output, &activations.hidden, &delta_output);
        optimizer.step(&mut self.hidden, input, &delta_hidden);

        Deltas {
            output: delta_output,
            hidden: delta_hidden,
            error,
        }
    }
}
