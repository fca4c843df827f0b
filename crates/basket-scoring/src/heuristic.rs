//! Logistic multi-factor scorer with adaptive per-category weights.
//!
//! ```text
//! logit = (affinity + price_fit + tag_overlap) × diversity_penalty + recency
//! score = sigmoid(logit)
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use basket_core::config::{HeuristicWeights, ScorerBackend, ScoringConfig, TrainingConfig};
use basket_core::errors::TrainingError;
use basket_core::models::{FeatureLayout, FeatureVector, HistoryProfile, ModelParameters, Score};
use basket_core::traits::{IScorer, TrainingBatch};

use crate::activation::sigmoid;
use crate::{labels, prior};

#[derive(Debug, Clone, PartialEq)]
struct HeuristicState {
    /// Indexed by layout category.
    category_weights: Vec<f64>,
    average_price: f64,
    diversity_index: f64,
}

/// Every factor of one prediction, for debugging and rationale tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorBreakdown {
    pub category_affinity: f64,
    pub price_fit: f64,
    pub tag_overlap: f64,
    /// Multiplier in (0, 1]; 1.0 when the category is not over-represented.
    pub diversity_penalty: f64,
    pub recency: f64,
    pub logit: f64,
    pub score: Score,
}

/// Heuristic scorer.
pub struct HeuristicScorer {
    layout: FeatureLayout,
    weights: HeuristicWeights,
    training: TrainingConfig,
    seed: u64,
    prior_ceiling: f64,
    state: HeuristicState,
}

impl HeuristicScorer {
    pub fn new(layout: FeatureLayout, scoring: &ScoringConfig, training: &TrainingConfig) -> Self {
        let state = initial_state(&layout, scoring.seed, training);
        Self {
            layout,
            weights: scoring.heuristic.clone(),
            training: training.clone(),
            seed: scoring.seed,
            prior_ceiling: scoring.prior_ceiling,
            state,
        }
    }

    /// Current weight of a layout category.
    pub fn category_weight(&self, category: usize) -> Option<f64> {
        self.state.category_weights.get(category).copied()
    }

    pub fn diversity_index(&self) -> f64 {
        self.state.diversity_index
    }

    pub fn average_price(&self) -> f64 {
        self.state.average_price
    }

    /// Factor-by-factor evaluation. `None` for an empty history, which has
    /// no factors and scores from the prior instead.
    pub fn breakdown(
        &self,
        features: &FeatureVector,
        profile: &HistoryProfile,
    ) -> Option<FactorBreakdown> {
        if profile.is_empty() {
            return None;
        }
        Some(self.evaluate(&self.state, features, profile))
    }

    fn evaluate(
        &self,
        state: &HeuristicState,
        features: &FeatureVector,
        profile: &HistoryProfile,
    ) -> FactorBreakdown {
        let w = &self.weights;
        let category = features.category_index(&self.layout);

        let weight = category
            .and_then(|c| state.category_weights.get(c).copied())
            .unwrap_or(0.0);
        let share = labels::category_share(features, &self.layout, profile);
        let category_affinity = share * weight * w.category_affinity;

        let price_fit = features.in_price_band(&self.layout) * w.price_band_bonus
            + (1.0 - features.price_deviation(&self.layout).min(1.0)) * w.price_proximity;

        let tag_overlap = labels::tag_overlap(features, &self.layout, profile) * w.tag_overlap;

        let diversity_penalty = if share > w.overrepresentation_ratio {
            1.0 - state.diversity_index * w.diversity_penalty
        } else {
            1.0
        };

        let recency = match category {
            Some(c) if profile.is_recent(c) => w.recency_bonus,
            _ => 0.0,
        };

        let logit = (category_affinity + price_fit + tag_overlap) * diversity_penalty + recency;
        FactorBreakdown {
            category_affinity,
            price_fit,
            tag_overlap,
            diversity_penalty,
            recency,
            logit,
            score: Score::new(sigmoid(logit)),
        }
    }

    fn score_with(
        &self,
        state: &HeuristicState,
        features: &FeatureVector,
        profile: &HistoryProfile,
    ) -> Score {
        if profile.is_empty() {
            return prior::untrained(self.seed, features, self.prior_ceiling);
        }
        self.evaluate(state, features, profile).score
    }

    /// Weight update for one pass, applied to a copy of the state.
    fn updated_state(&self, batch: &TrainingBatch<'_>) -> HeuristicState {
        let t = &self.training;
        let profile = batch.profile;
        let mut next = self.state.clone();

        for purchased in 0..next.category_weights.len() {
            let share = profile.category_share(purchased);
            if profile.count(purchased) == 0 {
                continue;
            }
            let step = share * t.learning_rate;
            next.category_weights[purchased] =
                (next.category_weights[purchased] + step).min(t.weight_max);

            for absent in 0..next.category_weights.len() {
                if profile.count(absent) == 0 {
                    next.category_weights[absent] = (next.category_weights[absent]
                        - step * t.absent_decay_fraction)
                        .max(t.weight_min);
                }
            }
        }

        next.average_price = profile.price_band.map_or(0.0, |b| b.mean);
        next.diversity_index = if self.layout.num_categories() == 0 {
            0.0
        } else {
            profile.distinct_categories() as f64 / self.layout.num_categories() as f64
        };
        next
    }
}

fn initial_state(layout: &FeatureLayout, seed: u64, training: &TrainingConfig) -> HeuristicState {
    let mut rng = StdRng::seed_from_u64(seed);
    let (lo, hi) = (training.initial_weight_min, training.initial_weight_max);
    let category_weights = (0..layout.num_categories())
        .map(|_| if hi > lo { rng.gen_range(lo..hi) } else { lo })
        .collect();
    HeuristicState {
        category_weights,
        average_price: 0.0,
        diversity_index: training.initial_diversity_index,
    }
}

impl IScorer for HeuristicScorer {
    fn backend(&self) -> ScorerBackend {
        ScorerBackend::Heuristic
    }

    fn predict(&self, features: &FeatureVector, profile: &HistoryProfile) -> Score {
        self.score_with(&self.state, features, profile)
    }

    fn fit(&mut self, batch: &TrainingBatch<'_>) -> Result<f64, TrainingError> {
        let next = self.updated_state(batch);

        let loss = if batch.examples.is_empty() {
            0.0
        } else {
            let total: f64 = batch
                .examples
                .iter()
                .map(|ex| {
                    let target = labels::relevance(ex, &self.layout, batch.profile, &self.training);
                    let predicted = self.score_with(&next, &ex.features, batch.profile).value();
                    (predicted - target).powi(2)
                })
                .sum();
            total / batch.examples.len() as f64
        };

        if !loss.is_finite() {
            return Err(TrainingError::Diverged { epoch: 0, loss });
        }

        debug!(
            loss = loss,
            diversity_index = next.diversity_index,
            average_price = next.average_price,
            "heuristic weights updated"
        );
        self.state = next;
        Ok(loss)
    }

    fn parameters(&self) -> ModelParameters {
        ModelParameters::Heuristic {
            category_weights: self
                .layout
                .categories()
                .iter()
                .cloned()
                .zip(self.state.category_weights.iter().copied())
                .collect(),
            average_price: self.state.average_price,
            diversity_index: self.state.diversity_index,
        }
    }

    fn reset(&mut self) {
        self.state = initial_state(&self.layout, self.seed, &self.training);
    }
}
