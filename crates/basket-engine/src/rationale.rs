//! Human-readable reasons attached to each recommendation.

use std::collections::{HashMap, HashSet};

use basket_core::constants::MAX_RATIONALE_TAGS;
use basket_core::{Product, UserHistory};

pub const POPULAR_PICK: &str = "Popular pick";
pub const RECOMMENDED_FOR_YOU: &str = "Recommended for you";

/// Precomputed history digest for explaining many products.
#[derive(Debug, Clone)]
pub struct RationaleContext<'h> {
    empty: bool,
    category_counts: HashMap<&'h str, usize>,
    seen_tags: HashSet<&'h str>,
}

impl<'h> RationaleContext<'h> {
    pub fn new(history: &'h UserHistory) -> Self {
        let mut category_counts = HashMap::new();
        let mut seen_tags = HashSet::new();
        for record in history.iter() {
            if let Some(category) = record.product.category_name() {
                *category_counts.entry(category).or_insert(0) += 1;
            }
            seen_tags.extend(record.product.tag_list().iter().map(String::as_str));
        }
        Self {
            empty: history.is_empty(),
            category_counts,
            seen_tags,
        }
    }

    /// Reason for recommending `product`, first matching rule wins:
    /// repeated category, single category purchase, shared tags, fallback.
    pub fn explain(&self, product: &Product) -> String {
        if self.empty {
            return POPULAR_PICK.to_string();
        }

        if let Some(category) = product.category_name() {
            match self.category_counts.get(category).copied().unwrap_or(0) {
                0 => {}
                1 => return format!("Based on your {category} purchase"),
                n => return format!("You often buy {category} ({n} purchases)"),
            }
        }

        let shared: Vec<&str> = product
            .tag_list()
            .iter()
            .map(String::as_str)
            .filter(|tag| self.seen_tags.contains(tag))
            .take(MAX_RATIONALE_TAGS)
            .collect();
        if !shared.is_empty() {
            return format!("Matches your interests: {}", shared.join(", "));
        }

        RECOMMENDED_FOR_YOU.to_string()
    }
}
