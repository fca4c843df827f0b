//! Trainer: drives `IScorer::fit` and owns the generation counter and log.

use chrono::Utc;
use tracing::{info, warn};

use basket_core::errors::BasketResult;
use basket_core::models::{ModelStats, TrainingEvent};
use basket_core::traits::{IScorer, TrainingBatch};
use basket_core::{Catalog, UserHistory};
use basket_features::FeatureExtractor;

use crate::batch;

/// Generation counter plus append-only training log.
///
/// Training is deliberately not idempotent: repeated calls with the same
/// history keep advancing the generation.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    generation: u64,
    log: Vec<TrainingEvent>,
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed training passes since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn log(&self) -> &[TrainingEvent] {
        &self.log
    }

    pub fn latest(&self) -> Option<&TrainingEvent> {
        self.log.last()
    }

    /// Run one training pass.
    ///
    /// Returns `Ok(None)` without touching anything when `history` is empty.
    /// On error the scorer's parameters, the generation and the log are as
    /// they were before the call.
    pub fn train(
        &mut self,
        scorer: &mut dyn IScorer,
        extractor: &FeatureExtractor,
        catalog: &Catalog,
        history: &UserHistory,
    ) -> BasketResult<Option<TrainingEvent>> {
        if history.is_empty() {
            return Ok(None);
        }

        let profile = extractor.profile(history);
        let (examples, rejected) = batch::build_examples(extractor, catalog, history, &profile);
        let training_batch = TrainingBatch {
            history,
            profile: &profile,
            layout: extractor.layout(),
            examples,
        };

        let loss = match scorer.fit(&training_batch) {
            Ok(loss) => loss,
            Err(err) => {
                warn!(
                    generation = self.generation,
                    error = %err,
                    "training pass failed, parameters retained"
                );
                return Err(err.into());
            }
        };

        self.generation += 1;
        let event = TrainingEvent {
            generation: self.generation,
            num_purchases: history.len(),
            loss,
            timestamp: Utc::now(),
        };
        self.log.push(event.clone());

        info!(
            generation = event.generation,
            num_purchases = event.num_purchases,
            loss = event.loss,
            backend = %scorer.backend(),
            rejected = rejected.len(),
            "training pass complete"
        );
        Ok(Some(event))
    }

    /// Snapshot of generation, parameters and log.
    pub fn stats(&self, scorer: &dyn IScorer) -> ModelStats {
        ModelStats {
            generation: self.generation,
            parameters: scorer.parameters(),
            training_log: self.log.clone(),
        }
    }

    /// Forget every pass and return the scorer to its untrained prior.
    pub fn reset(&mut self, scorer: &mut dyn IScorer) {
        self.generation = 0;
        self.log.clear();
        scorer.reset();
    }
}
