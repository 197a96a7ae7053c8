use std::f64::consts::E;

/// Logistic sigmoid: `1 / (1 + e^-x)`.
///
/// In f64 the result is strictly inside (0, 1) only for roughly |x| < 36;
/// beyond that it saturates to exactly 0.0 or 1.0.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed through its output.
///
/// `s` must be an already-activated value `sigmoid(z)`, not the raw weighted
/// sum `z`; the result is `s * (1 - s)`.
pub fn sigmoid_derivative(s: f64) -> f64 {
    s * (1.0 - s)
}
