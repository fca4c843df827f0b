//! Feed-forward scorer: tanh hidden layers, one sigmoid output unit.

mod network;

use tracing::debug;

use basket_core::config::{ScorerBackend, ScoringConfig, TrainingConfig};
use basket_core::errors::TrainingError;
use basket_core::models::{
    DenseLayer, FeatureLayout, FeatureVector, HistoryProfile, ModelParameters, Score,
};
use basket_core::traits::{IScorer, TrainingBatch};

use crate::labels;

/// Trainable scorer whose parameters are dense weight matrices.
pub struct NeuralScorer {
    layout: FeatureLayout,
    hidden_layers: Vec<usize>,
    seed: u64,
    training: TrainingConfig,
    layers: Vec<DenseLayer>,
}

impl NeuralScorer {
    pub fn new(layout: FeatureLayout, scoring: &ScoringConfig, training: &TrainingConfig) -> Self {
        let layers = network::xavier_init(layout.dim(), &scoring.hidden_layers, scoring.seed);
        Self {
            layout,
            hidden_layers: scoring.hidden_layers.clone(),
            seed: scoring.seed,
            training: training.clone(),
            layers,
        }
    }

    /// Layer widths from input to output.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = vec![self.layout.dim()];
        shape.extend(self.layers.iter().map(DenseLayer::output_dim));
        shape
    }
}

impl IScorer for NeuralScorer {
    fn backend(&self) -> ScorerBackend {
        ScorerBackend::Neural
    }

    fn predict(&self, features: &FeatureVector, _profile: &HistoryProfile) -> Score {
        if features.len() != self.layout.dim() {
            return Score::MIN;
        }
        Score::new(network::output(&self.layers, features.values()))
    }

    fn fit(&mut self, batch: &TrainingBatch<'_>) -> Result<f64, TrainingError> {
        let limit = self.training.max_examples;
        if batch.examples.len() > limit {
            return Err(TrainingError::ResourceExhausted {
                examples: batch.examples.len(),
                limit,
            });
        }
        if let Some(bad) = batch
            .examples
            .iter()
            .find(|ex| ex.features.len() != self.layout.dim())
        {
            return Err(TrainingError::DimensionMismatch {
                expected: self.layout.dim(),
                actual: bad.features.len(),
            });
        }

        let samples: Vec<(&[f64], f64)> = batch
            .examples
            .iter()
            .map(|ex| {
                (
                    ex.features.values(),
                    labels::relevance(ex, &self.layout, batch.profile, &self.training),
                )
            })
            .collect();

        // Train a copy; commit only if every epoch stays finite.
        let mut layers = self.layers.clone();
        let mut loss = 0.0;
        for epoch in 0..self.training.epochs {
            loss = network::sgd_epoch(&mut layers, &samples, self.training.neural_learning_rate);
            if !loss.is_finite() {
                return Err(TrainingError::Diverged { epoch, loss });
            }
        }
        if !layers.iter().all(DenseLayer::is_finite) {
            return Err(TrainingError::Diverged {
                epoch: self.training.epochs.saturating_sub(1),
                loss,
            });
        }

        debug!(loss = loss, examples = samples.len(), "network weights updated");
        self.layers = layers;
        Ok(loss)
    }

    fn parameters(&self) -> ModelParameters {
        ModelParameters::Neural {
            layers: self.layers.clone(),
        }
    }

    fn reset(&mut self) {
        self.layers = network::xavier_init(self.layout.dim(), &self.hidden_layers, self.seed);
    }
}
