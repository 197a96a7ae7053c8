pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_of_exact_prediction_is_zero() {
        assert_eq!(MseLoss::loss(&[0.3, 0.7], &[0.3, 0.7]), 0.0);
    }

    #[test]
    fn mse_averages_over_outputs() {
        assert!((MseLoss::loss(&[1.0, 0.0], &[0.0, 0.0]) - 0.5).abs() < 1e-12);
    }
}
