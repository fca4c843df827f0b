/// Logistic function, mapping ℝ to (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of tanh expressed through its output.
pub fn tanh_derivative(output: f64) -> f64 {
    1.0 - output * output
}

/// Derivative of the sigmoid expressed through its output.
pub fn sigmoid_derivative(output: f64) -> f64 {
    output * (1.0 - output)
}
