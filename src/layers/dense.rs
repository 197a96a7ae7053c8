use rand::Rng;

use crate::activation::activation::sigmoid;
use crate::math::matrix::{self, Matrix};

/// Fully connected sigmoid layer with `IN` inputs and `OUT` units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer<const IN: usize, const OUT: usize> {
    /// Activation cache, written by `feed_from`.
    pub neurons: [f64; OUT],
    /// `weights.data[j][i]` connects input `j` to unit `i`.
    pub weights: Matrix<IN, OUT>,
    pub biases: [f64; OUT],
}

impl<const IN: usize, const OUT: usize> Layer<IN, OUT> {
    /// Builds a layer from known parameters with an empty activation cache.
    pub fn from_parts(weights: Matrix<IN, OUT>, biases: [f64; OUT]) -> Layer<IN, OUT> {
        Layer {
            neurons: [0.0; OUT],
            weights,
            biases,
        }
    }

    /// Redraws every weight and bias from U[0, 1) and clears the cache.
    pub fn randomize<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        self.weights.fill_random(rng);
        matrix::fill_random(&mut self.biases, rng);
        self.neurons = [0.0; OUT];
    }

    /// Computes `sigmoid(b + x·W)` without touching the cache.
    pub fn activate(&self, input: &[f64; IN]) -> [f64; OUT] {
        let mut out = [0.0; OUT];
        for (i, a) in out.iter_mut().enumerate() {
            let mut sum = self.biases[i];
            for (j, x) in input.iter().enumerate() {
                sum += x * self.weights.data[j][i];
            }
            *a = sigmoid(sum);
        }
        out
    }

    pub fn feed_from(&mut self, input: &[f64; IN]) -> [f64; OUT] {
        self.neurons = self.activate(input);
        self.neurons
    }

    /// Moves biases and weights along `delta`, scaled by `lr`.
    ///
    /// `input` is whatever fed this layer on the step that produced `delta`.
    pub fn apply_delta(&mut self, input: &[f64; IN], delta: &[f64; OUT], lr: f64) {
        for (i, d) in delta.iter().enumerate() {
            self.biases[i] += d * lr;
            for (j, x) in input.iter().enumerate() {
                self.weights.data[j][i] += x * d * lr;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_layer() -> Layer<2, 1> {
        Layer::from_parts(Matrix::from_data([[0.5], [0.5]]), [0.0])
    }

    #[test]
    fn feed_from_caches_activation() {
        let mut layer = half_layer();
        let out = layer.feed_from(&[0.0, 0.0]);
        assert_eq!(out, [0.5]);
        assert_eq!(layer.neurons, [0.5]);
    }

    #[test]
    fn activate_leaves_cache_alone() {
        let layer = half_layer();
        let out = layer.activate(&[1.0, 1.0]);
        assert_eq!(out, [sigmoid(1.0)]);
        assert_eq!(layer.neurons, [0.0]);
    }

    #[test]
    fn apply_delta_scales_by_input_and_rate() {
        let mut layer = half_layer();
        layer.apply_delta(&[1.0, 0.0], &[0.2], 0.5);
        assert!((layer.biases[0] - 0.1).abs() < 1e-12);
        assert!((layer.weights.data[0][0] - 0.6).abs() < 1e-12);
        // Zero input leaves its connection untouched.
        assert_eq!(layer.weights.data[1][0], 0.5);
    }
}
