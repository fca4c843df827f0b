//! Engine configuration with TOML, environment, and default layers.

pub mod defaults;
mod feature_config;
mod observability_config;
mod ranking_config;
mod scoring_config;
mod training_config;

pub use feature_config::FeatureConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::{RankingConfig, ScoreFloorConfig};
pub use scoring_config::{HeuristicWeights, ScorerBackend, ScoringConfig};
pub use training_config::TrainingConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BASKET_SCORER`, `BASKET_SEED`, `BASKET_LOG_LEVEL`)
/// 2. Config file (`basket.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketConfig {
    pub features: FeatureConfig,
    pub scoring: ScoringConfig,
    pub training: TrainingConfig,
    pub ranking: RankingConfig,
    pub observability: ObservabilityConfig,
}

impl BasketConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: BasketConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string. Missing fields keep defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: BasketConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `BASKET_*` process environment overrides.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = lookup("BASKET_SCORER") {
            self.scoring.backend =
                backend
                    .parse()
                    .map_err(|message| ConfigError::ValidationFailed {
                        field: "BASKET_SCORER".to_string(),
                        message,
                    })?;
        }
        if let Some(seed) = lookup("BASKET_SEED") {
            self.scoring.seed = seed.parse().map_err(|_| ConfigError::ValidationFailed {
                field: "BASKET_SEED".to_string(),
                message: format!("expected an unsigned integer, got {seed:?}"),
            })?;
        }
        if let Some(level) = lookup("BASKET_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn fail(field: &str, message: &str) -> Result<(), ConfigError> {
            Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: message.to_string(),
            })
        }

        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return fail(field, "must be a finite number");
            }
        }
        if let Some(price) = self.features.max_reference_price {
            if !(price.is_finite() && price > 0.0) {
                return fail("features.max_reference_price", "must be a positive number");
            }
        }
        if !(0.0..=1.0).contains(&self.scoring.prior_ceiling) {
            return fail("scoring.prior_ceiling", "must be between 0.0 and 1.0");
        }
        if self.scoring.hidden_layers.is_empty() || self.scoring.hidden_layers.len() > 2 {
            return fail("scoring.hidden_layers", "must list one or two hidden layers");
        }
        if self.scoring.hidden_layers.contains(&0) {
            return fail("scoring.hidden_layers", "hidden layer widths must be non-zero");
        }
        let t = &self.training;
        if t.weight_min > t.weight_max {
            return fail("training.weight_min", "must not exceed training.weight_max");
        }
        if t.initial_weight_min > t.initial_weight_max {
            return fail(
                "training.initial_weight_min",
                "must not exceed training.initial_weight_max",
            );
        }
        if t.learning_rate <= 0.0 || t.neural_learning_rate <= 0.0 {
            return fail("training.learning_rate", "learning rates must be positive");
        }
        if !(0.0..=1.0).contains(&t.label_cap) {
            return fail("training.label_cap", "must be between 0.0 and 1.0");
        }
        if t.epochs == 0 {
            return fail("training.epochs", "must be greater than 0");
        }
        if let Some(floor) = self.ranking.floor.fixed {
            if !(0.0..=1.0).contains(&floor) {
                return fail("ranking.floor.fixed", "must be between 0.0 and 1.0");
            }
        }
        if !(0.0..=1.0).contains(&self.ranking.floor.ratio) {
            return fail("ranking.floor.ratio", "must be between 0.0 and 1.0");
        }
        Ok(())
    }

    fn float_fields(&self) -> Vec<(&'static str, f64)> {
        let h = &self.scoring.heuristic;
        let t = &self.training;
        let f = &self.ranking.floor;
        let mut fields = vec![
            ("scoring.prior_ceiling", self.scoring.prior_ceiling),
            ("scoring.heuristic.category_affinity", h.category_affinity),
            ("scoring.heuristic.price_band_bonus", h.price_band_bonus),
            ("scoring.heuristic.price_proximity", h.price_proximity),
            ("scoring.heuristic.tag_overlap", h.tag_overlap),
            ("scoring.heuristic.overrepresentation_ratio", h.overrepresentation_ratio),
            ("scoring.heuristic.diversity_penalty", h.diversity_penalty),
            ("scoring.heuristic.recency_bonus", h.recency_bonus),
            ("training.learning_rate", t.learning_rate),
            ("training.weight_min", t.weight_min),
            ("training.weight_max", t.weight_max),
            ("training.absent_decay_fraction", t.absent_decay_fraction),
            ("training.initial_weight_min", t.initial_weight_min),
            ("training.initial_weight_max", t.initial_weight_max),
            ("training.initial_diversity_index", t.initial_diversity_index),
            ("training.neural_learning_rate", t.neural_learning_rate),
            ("training.label_cap", t.label_cap),
            ("training.label_category_weight", t.label_category_weight),
            ("training.label_tag_weight", t.label_tag_weight),
            ("ranking.floor.ratio", f.ratio),
            ("ranking.floor.minimum", f.minimum),
        ];
        if let Some(fixed) = f.fixed {
            fields.push(("ranking.floor.fixed", fixed));
        }
        fields
    }
}
