//! Quality report over a recommendation list and the history it was built from.

mod report;

pub use report::{LossPoint, QualityReport};

use std::collections::{BTreeMap, HashSet};

use basket_core::models::{Recommendation, TrainingEvent};
use basket_core::UserHistory;

const TOP_K: usize = 6;
const PRECISION_WINDOW: usize = 5;
const RELEVANCE_WINDOW: usize = 10;
const TREND_WINDOW: usize = 5;
const HIT_RATIO: f64 = 0.7;
const HIT_MINIMUM: f64 = 0.2;

/// Compute a [`QualityReport`].
///
/// Returns `None` when `history` has fewer than two purchases. A missing
/// training log counts as loss 1.
pub fn evaluate(
    history: &UserHistory,
    recommendations: &[Recommendation],
    training_log: &[TrainingEvent],
    num_categories: usize,
) -> Option<QualityReport> {
    if history.len() < 2 {
        return None;
    }

    let count = recommendations.len();
    let share = |matching: usize| {
        if count == 0 {
            0.0
        } else {
            pct(matching as f64 / count as f64)
        }
    };

    let precision_at_k = precision_at_k(history, recommendations);

    let scores: Vec<f64> = recommendations.iter().map(|r| r.score.value()).collect();
    let mean = if count == 0 {
        0.0
    } else {
        scores.iter().sum::<f64>() / count as f64
    };
    let threshold = (mean * HIT_RATIO).max(HIT_MINIMUM);
    let hits = scores.iter().filter(|&&s| s > threshold).count();

    let recommended_categories: HashSet<Option<&str>> =
        recommendations.iter().map(|r| r.category()).collect();
    let diversity = if count == 0 || num_categories == 0 {
        0.0
    } else {
        pct(recommended_categories.len() as f64 / num_categories as f64)
    };

    let recent: HashSet<Option<&str>> = history
        .recent(RELEVANCE_WINDOW)
        .iter()
        .map(|r| r.product.category_name())
        .collect();
    let relevant = recommendations
        .iter()
        .filter(|r| recent.contains(&r.category()))
        .count();

    let favourite = favourite_category(history);
    let novel = recommendations
        .iter()
        .filter(|r| r.category() != favourite)
        .count();

    let max = scores.iter().copied().fold(0.0_f64, f64::max);
    let min = scores.iter().copied().fold(1.0_f64, f64::min);
    let confidence_spread = if max > 0.0 { pct((max - min) / max) } else { 0.0 };

    let loss = training_log.last().map_or(1.0, |e| e.loss);
    let accuracy = pct(1.0 - loss);

    let loss_trend = training_log[training_log.len().saturating_sub(TREND_WINDOW)..]
        .iter()
        .map(|e| LossPoint {
            generation: e.generation,
            loss_pct: e.loss * 100.0,
            num_purchases: e.num_purchases,
        })
        .collect();

    Some(QualityReport {
        precision_at_k,
        hit_rate: share(hits),
        hits,
        diversity,
        relevance: share(relevant),
        novelty: share(novel),
        confidence_spread,
        accuracy,
        mean_score: pct(mean),
        loss_trend,
    })
}

fn precision_at_k(history: &UserHistory, recommendations: &[Recommendation]) -> f64 {
    let window = history.recent(PRECISION_WINDOW);
    let categories: HashSet<Option<&str>> =
        window.iter().map(|r| r.product.category_name()).collect();
    let tags: HashSet<&str> = window
        .iter()
        .flat_map(|r| r.product.tag_list())
        .map(String::as_str)
        .collect();

    let top = &recommendations[..recommendations.len().min(TOP_K)];
    if top.is_empty() {
        return 0.0;
    }
    let points: f64 = top
        .iter()
        .map(|rec| {
            let mut p = 0.0;
            if categories.contains(&rec.category()) {
                p += 0.5;
            }
            if rec.product.tag_list().iter().any(|t| tags.contains(t.as_str())) {
                p += 0.5;
            }
            p
        })
        .sum();
    pct(points / top.len() as f64)
}

/// Most purchased category; ties go to the one purchased first.
fn favourite_category(history: &UserHistory) -> Option<&str> {
    let mut counts: BTreeMap<Option<&str>, (usize, usize)> = BTreeMap::new();
    for (position, record) in history.iter().enumerate() {
        let entry = counts
            .entry(record.product.category_name())
            .or_insert((0, position));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
        .and_then(|(category, _)| category)
}

fn pct(ratio: f64) -> f64 {
    if ratio.is_finite() {
        (ratio * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
