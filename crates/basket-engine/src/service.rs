//! RecommendationService: the per-session train-then-recommend pipeline.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use basket_core::config::{BasketConfig, ScorerBackend};
use basket_core::errors::{BasketResult, ValidationError};
use basket_core::models::{HistoryProfile, ModelStats, RecommendationBatch};
use basket_core::traits::IScorer;
use basket_core::{Catalog, Recommendation, TrainingEvent, UserHistory};
use basket_features::FeatureExtractor;
use basket_learning::Trainer;
use basket_observability::quality::{self, QualityReport};
use basket_observability::{ranking_span, recommend_span, training_span};
use basket_ranking::DiversityRanker;
use basket_scoring::{build_scorer, prior};

use crate::count::desired_count;
use crate::rationale::{RationaleContext, POPULAR_PICK};

/// Feature extraction, scoring, training and ranking over one catalog.
///
/// Owns its model state exclusively. The catalog is shared read-only.
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    config: BasketConfig,
    extractor: FeatureExtractor,
    scorer: Box<dyn IScorer>,
    trainer: Trainer,
    ranker: DiversityRanker,
}

impl RecommendationService {
    /// Validate `config` and build an untrained service.
    pub fn new(catalog: Arc<Catalog>, config: BasketConfig) -> BasketResult<Self> {
        config.validate()?;
        let extractor = FeatureExtractor::new(&catalog, &config.features);
        let scorer = build_scorer(&config, extractor.layout());
        let ranker = DiversityRanker::new(&config.ranking);
        info!(
            products = catalog.len(),
            categories = catalog.categories().len(),
            tags = catalog.tags().len(),
            backend = %config.scoring.backend,
            "recommendation service ready"
        );
        Ok(Self {
            catalog,
            config,
            extractor,
            scorer,
            trainer: Trainer::new(),
            ranker,
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &BasketConfig {
        &self.config
    }

    pub fn backend(&self) -> ScorerBackend {
        self.scorer.backend()
    }

    pub fn generation(&self) -> u64 {
        self.trainer.generation()
    }

    /// One training pass. `Ok(None)` for an empty history.
    pub fn train(&mut self, history: &UserHistory) -> BasketResult<Option<TrainingEvent>> {
        let span = training_span!(self.scorer.backend(), history.len());
        let _guard = span.enter();
        self.trainer
            .train(self.scorer.as_mut(), &self.extractor, &self.catalog, history)
    }

    /// Score and rank unpurchased products without training.
    ///
    /// Empty for an empty history or `n == 0`. Identical inputs give
    /// identical output while the parameters are unchanged.
    pub fn recommend(
        &self,
        history: &UserHistory,
        n: usize,
    ) -> BasketResult<Vec<Recommendation>> {
        if history.is_empty() || n == 0 {
            return Ok(Vec::new());
        }
        let span = recommend_span!(history.len(), n);
        let _guard = span.enter();

        let profile = self.extractor.profile(history);
        let candidates = self.score_candidates(history, &profile);
        Ok(self.rank(candidates, n))
    }

    /// Train on `history`, then recommend `desired_count(history.len())`
    /// products and snapshot the model.
    pub fn update(&mut self, history: &UserHistory) -> BasketResult<RecommendationBatch> {
        self.train(history)?;
        let target = desired_count(history.len());
        let recommendations = self.recommend(history, target)?;
        info!(
            generation = self.trainer.generation(),
            num_purchases = history.len(),
            target = target,
            returned = recommendations.len(),
            "recommendation pass complete"
        );
        Ok(RecommendationBatch {
            recommendations,
            stats: self.stats(),
        })
    }

    /// Cold-start list ranked by the untrained prior.
    pub fn featured(&self, n: usize) -> Vec<Recommendation> {
        if n == 0 {
            return Vec::new();
        }
        let empty = UserHistory::new();
        let profile = self.extractor.profile(&empty);
        let seed = self.config.scoring.seed;
        let ceiling = self.config.scoring.prior_ceiling;

        let candidates: Vec<Recommendation> = self
            .catalog
            .products()
            .iter()
            .filter_map(|product| {
                match self.extractor.extract_with_profile(product, &profile) {
                    Ok(features) => Some(Recommendation::new(
                        product.clone(),
                        prior::untrained(seed, &features, ceiling),
                        POPULAR_PICK,
                    )),
                    Err(err) => {
                        warn!(product_id = product.id, error = %err, "product excluded");
                        None
                    }
                }
            })
            .collect();
        self.rank(candidates, n)
    }

    /// Generation, parameters and training log.
    pub fn stats(&self) -> ModelStats {
        self.trainer.stats(self.scorer.as_ref())
    }

    /// Quality figures for a list produced from `history`.
    pub fn quality_report(
        &self,
        history: &UserHistory,
        recommendations: &[Recommendation],
    ) -> Option<QualityReport> {
        quality::evaluate(
            history,
            recommendations,
            self.trainer.log(),
            self.catalog.categories().len(),
        )
    }

    /// Discard parameters and the training log. Generation returns to 0.
    pub fn reset(&mut self) {
        self.trainer.reset(self.scorer.as_mut());
        info!(backend = %self.scorer.backend(), "model reset");
    }

    /// Score every unpurchased, well-formed product in catalog order.
    fn score_candidates(
        &self,
        history: &UserHistory,
        profile: &HistoryProfile,
    ) -> Vec<Recommendation> {
        let purchased = history.purchased_ids();
        let rationale = RationaleContext::new(history);

        let scored: Vec<Result<Recommendation, ValidationError>> = self
            .catalog
            .products()
            .par_iter()
            .filter(|product| !purchased.contains(&product.id))
            .map(|product| {
                let features = self.extractor.extract_with_profile(product, profile)?;
                let score = self.scorer.predict(&features, profile);
                Ok(Recommendation::new(
                    product.clone(),
                    score,
                    rationale.explain(product),
                ))
            })
            .collect();

        let mut candidates = Vec::with_capacity(scored.len());
        for result in scored {
            match result {
                Ok(rec) => candidates.push(rec),
                Err(err) => warn!(error = %err, "product excluded from recommendations"),
            }
        }
        candidates
    }

    fn rank(&self, candidates: Vec<Recommendation>, n: usize) -> Vec<Recommendation> {
        let span = ranking_span!(candidates.len(), n);
        let _guard = span.enter();
        self.ranker.rank(candidates, n)
    }
}

impl std::fmt::Debug for RecommendationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationService")
            .field("products", &self.catalog.len())
            .field("backend", &self.scorer.backend())
            .field("generation", &self.trainer.generation())
            .finish()
    }
}
