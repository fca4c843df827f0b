//! HistoryProfile construction.

use basket_core::constants::RECENT_PURCHASE_WINDOW;
use basket_core::models::{FeatureLayout, HistoryProfile, PriceBand};
use basket_core::UserHistory;

/// Digest `history` against `layout`.
///
/// Categories or tags outside the layout are ignored for the indexed counts
/// but every record still counts toward `len` and the price band.
pub fn build(layout: &FeatureLayout, history: &UserHistory) -> HistoryProfile {
    let mut category_counts = vec![0usize; layout.num_categories()];
    let mut seen_tags = vec![false; layout.num_tags()];

    for record in history.iter() {
        if let Some(idx) = record
            .product
            .category_name()
            .and_then(|c| layout.category_index(c))
        {
            category_counts[idx] += 1;
        }
        for tag in record.product.tag_list() {
            if let Some(idx) = layout.tag_index(tag) {
                seen_tags[idx] = true;
            }
        }
    }

    let mut recent_categories: Vec<usize> = history
        .recent(RECENT_PURCHASE_WINDOW)
        .iter()
        .filter_map(|r| r.product.category_name().and_then(|c| layout.category_index(c)))
        .collect();
    recent_categories.sort_unstable();
    recent_categories.dedup();

    HistoryProfile {
        len: history.len(),
        category_counts,
        seen_tags,
        recent_categories,
        price_band: price_band(history),
    }
}

fn price_band(history: &UserHistory) -> Option<PriceBand> {
    let prices: Vec<f64> = history
        .iter()
        .map(|r| r.product.price)
        .filter(|p| p.is_finite())
        .collect();
    if prices.is_empty() {
        return None;
    }
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    Some(PriceBand { min, max, mean })
}
