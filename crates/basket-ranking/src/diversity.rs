//! DiversityRanker: scored candidates → bounded, category-balanced top-N.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use basket_core::config::{RankingConfig, ScoreFloorConfig};
use basket_core::models::Recommendation;

/// Diversity-constrained ranker.
#[derive(Debug, Clone)]
pub struct DiversityRanker {
    base_quota: usize,
    floor: ScoreFloorConfig,
}

impl DiversityRanker {
    pub fn new(config: &RankingConfig) -> Self {
        Self {
            base_quota: config.base_quota,
            floor: config.floor.clone(),
        }
    }

    /// Same-category floor for a candidate pool.
    pub fn floor_for(&self, candidates: &[Recommendation]) -> f64 {
        let mean = if candidates.is_empty() {
            0.0
        } else {
            candidates.iter().map(|c| c.score.value()).sum::<f64>() / candidates.len() as f64
        };
        self.floor.resolve(mean)
    }

    /// Select up to `n` candidates.
    ///
    /// `candidates` must be in catalog order and exclude purchased products;
    /// duplicate ids keep their first occurrence. The output has exactly
    /// `min(n, unique candidates)` entries.
    pub fn rank(&self, candidates: Vec<Recommendation>, n: usize) -> Vec<Recommendation> {
        let pool = dedup(candidates);
        if n == 0 || pool.is_empty() {
            return Vec::new();
        }

        let floor = self.floor_for(&pool);

        // Stable: equal scores keep catalog order.
        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.sort_by(|&a, &b| {
            pool[b]
                .score
                .partial_cmp(&pool[a].score)
                .unwrap_or(Ordering::Equal)
        });

        let mut taken = vec![false; pool.len()];
        let mut admitted: Vec<usize> = Vec::with_capacity(n.min(pool.len()));
        let mut seen_categories: HashSet<Option<&str>> = HashSet::new();

        for &idx in &order {
            if admitted.len() >= n {
                break;
            }
            let candidate = &pool[idx];
            let category = candidate.category();
            let admit = !seen_categories.contains(&category)
                || admitted.len() < self.base_quota
                || candidate.score.value() > floor;
            if admit {
                seen_categories.insert(category);
                taken[idx] = true;
                admitted.push(idx);
            } else {
                debug!(
                    product_id = candidate.product.id,
                    score = candidate.score.value(),
                    floor = floor,
                    "same-category repeat below floor skipped"
                );
            }
        }

        let first_pass = admitted.len();
        for &idx in &order {
            if admitted.len() >= n {
                break;
            }
            if !taken[idx] {
                taken[idx] = true;
                admitted.push(idx);
            }
        }

        debug!(
            requested = n,
            pool = pool.len(),
            first_pass = first_pass,
            backfilled = admitted.len() - first_pass,
            categories = seen_categories.len(),
            "ranking complete"
        );

        let mut slots: Vec<Option<Recommendation>> = pool.into_iter().map(Some).collect();
        admitted
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect()
    }
}

impl Default for DiversityRanker {
    fn default() -> Self {
        Self::new(&RankingConfig::default())
    }
}

fn dedup(candidates: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.product.id))
        .collect()
}
