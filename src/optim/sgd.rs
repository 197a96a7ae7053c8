use crate::layers::dense::Layer;

#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one online update to a layer given its delta and the input it saw.
    pub fn step<const IN: usize, const OUT: usize>(
        &self,
        layer: &mut Layer<IN, OUT>,
        input: &[f64; IN],
        delta: &[f64; OUT],
    ) {
        layer.apply_delta(input, delta, self.learning_rate);
    }
}
