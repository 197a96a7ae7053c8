use crate::{
    network::{backprop::Deltas, network::Network},
    optim::sgd::Sgd,
};

/// One online training step: forward pass on `input`, then backpropagation
/// toward `expected` using the activations that pass produced.
pub fn train_step<const F: usize, const H: usize, const O: usize>(
    network: &mut Network<F, H, O>,
    input: &[f64; F],
    expected: &[f64; O],
    optimizer: &Sgd,
) -> Deltas<H, O> {
    let activations = network.forward(input);
    network.backpropagate_from(input, &activations, expected, optimizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn step_moves_output_toward_target() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut network: Network<2, 3, 1> = Network::new(&mut rng);
        let sgd = Sgd::new(0.5);

        let before = network.predict(&[1.0, 0.0])[0];
        train_step(&mut network, &[1.0, 0.0], &[0.0], &sgd);
        let after = network.predict(&[1.0, 0.0])[0];

        assert!(after < before);
    }

    #[test]
    fn step_matches_forward_then_cached_backprop() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut a: Network<2, 2, 2> = Network::new(&mut rng);
        let mut b = a.clone();
        let sgd = Sgd::new(0.1);

        let da = train_step(&mut a, &[0.2, 0.9], &[1.0, 0.0], &sgd);
        b.forward(&[0.2, 0.9]);
        let db = b.backpropagate(&[0.2, 0.9], &[1.0, 0.0], &sgd);

        assert_eq!(da, db);
        assert_eq!(a, b);
    }
}
