use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Trainable state of a scoring model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelParameters {
    /// Per-category weights plus the two auxiliary scalars.
    Heuristic {
        category_weights: BTreeMap<String, f64>,
        average_price: f64,
        diversity_index: f64,
    },
    /// Dense layers of the feed-forward approximator, input side first.
    Neural { layers: Vec<DenseLayer> },
}

impl ModelParameters {
    /// True when every parameter is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            ModelParameters::Heuristic {
                category_weights,
                average_price,
                diversity_index,
            } => {
                category_weights.values().all(|w| w.is_finite())
                    && average_price.is_finite()
                    && diversity_index.is_finite()
            }
            ModelParameters::Neural { layers } => layers.iter().all(DenseLayer::is_finite),
        }
    }
}

/// Fully connected layer: `weights[out][in]` and one bias per output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
}

impl DenseLayer {
    /// Zero-initialised layer.
    pub fn zeros(inputs: usize, outputs: usize) -> Self {
        Self {
            weights: vec![vec![0.0; inputs]; outputs],
            biases: vec![0.0; outputs],
        }
    }

    pub fn input_dim(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    pub fn output_dim(&self) -> usize {
        self.biases.len()
    }

    /// Pre-activation output `W·x + b`.
    pub fn affine(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f64>() + bias)
            .collect()
    }

    pub fn is_finite(&self) -> bool {
        self.biases.iter().all(|b| b.is_finite())
            && self.weights.iter().flatten().all(|w| w.is_finite())
    }
}
