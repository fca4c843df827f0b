//! # basket-scoring
//!
//! Two interchangeable realizations of [`IScorer`]:
//! a logistic multi-factor heuristic with per-category weights, and a small
//! feed-forward network trained by SGD. Both map features to [0, 1].
//!
//! [`IScorer`]: basket_core::traits::IScorer

pub mod activation;
pub mod heuristic;
pub mod labels;
pub mod neural;
pub mod prior;

pub use heuristic::{FactorBreakdown, HeuristicScorer};
pub use neural::NeuralScorer;

use basket_core::config::{BasketConfig, ScorerBackend};
use basket_core::models::FeatureLayout;
use basket_core::traits::IScorer;

/// Build the scorer selected by `config.scoring.backend`.
pub fn build_scorer(config: &BasketConfig, layout: &FeatureLayout) -> Box<dyn IScorer> {
    match config.scoring.backend {
        ScorerBackend::Heuristic => Box::new(HeuristicScorer::new(
            layout.clone(),
            &config.scoring,
            &config.training,
        )),
        ScorerBackend::Neural => Box::new(NeuralScorer::new(
            layout.clone(),
            &config.scoring,
            &config.training,
        )),
    }
}
