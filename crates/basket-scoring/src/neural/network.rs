//! Forward pass, backpropagation, and initialization over `DenseLayer`s.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use basket_core::models::DenseLayer;

use crate::activation::{sigmoid, sigmoid_derivative, tanh_derivative};

/// Xavier-uniform layers `input → hidden… → 1`, drawn from a seeded RNG.
pub(crate) fn xavier_init(input: usize, hidden: &[usize], seed: u64) -> Vec<DenseLayer> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut widths = Vec::with_capacity(hidden.len() + 2);
    widths.push(input);
    widths.extend_from_slice(hidden);
    widths.push(1);

    widths
        .windows(2)
        .map(|pair| {
            let (fan_in, fan_out) = (pair[0], pair[1]);
            let bound = (6.0 / (fan_in + fan_out) as f64).sqrt();
            let mut layer = DenseLayer::zeros(fan_in, fan_out);
            for w in layer.weights.iter_mut().flatten() {
                *w = rng.gen_range(-bound..bound);
            }
            layer
        })
        .collect()
}

/// Activations of every layer, input first.
fn forward(layers: &[DenseLayer], input: &[f64]) -> Vec<Vec<f64>> {
    let mut activations = Vec::with_capacity(layers.len() + 1);
    activations.push(input.to_vec());
    for (idx, layer) in layers.iter().enumerate() {
        let z = layer.affine(&activations[idx]);
        let a = if idx + 1 == layers.len() {
            z.into_iter().map(sigmoid).collect()
        } else {
            z.into_iter().map(f64::tanh).collect()
        };
        activations.push(a);
    }
    activations
}

/// Network output in (0, 1).
pub(crate) fn output(layers: &[DenseLayer], input: &[f64]) -> f64 {
    forward(layers, input)
        .last()
        .and_then(|a| a.first().copied())
        .unwrap_or(0.0)
}

/// One SGD pass minimising squared error. Returns the epoch's mean loss.
pub(crate) fn sgd_epoch(layers: &mut [DenseLayer], samples: &[(&[f64], f64)], rate: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut total = 0.0;

    for (input, target) in samples {
        let activations = forward(layers, input);
        let out = activations[activations.len() - 1][0];
        let err = out - target;
        total += err * err;

        let mut delta = vec![err * sigmoid_derivative(out)];
        for idx in (0..layers.len()).rev() {
            let prev = &activations[idx];
            // Propagate through pre-update weights.
            let next_delta = if idx > 0 {
                let layer = &layers[idx];
                (0..layer.input_dim())
                    .map(|j| {
                        let back: f64 = layer
                            .weights
                            .iter()
                            .zip(&delta)
                            .map(|(row, d)| row[j] * d)
                            .sum();
                        back * tanh_derivative(prev[j])
                    })
                    .collect()
            } else {
                Vec::new()
            };

            let layer = &mut layers[idx];
            for (k, d) in delta.iter().enumerate() {
                for (w, x) in layer.weights[k].iter_mut().zip(prev) {
                    *w -= rate * d * x;
                }
                layer.biases[k] -= rate * d;
            }
            delta = next_delta;
        }
    }

    total / samples.len() as f64
}
