use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::constants::DERIVED_FEATURE_COUNT;

/// Fixed layout of a feature vector, frozen from the catalog.
///
/// ```text
/// [ category one-hot (|C|) | tag indicators (|T|) | price_norm | price_deviation | in_price_band ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureLayout {
    categories: Vec<String>,
    tags: Vec<String>,
}

impl FeatureLayout {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            categories: catalog.categories().to_vec(),
            tags: catalog.tags().to_vec(),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }

    pub fn num_tags(&self) -> usize {
        self.tags.len()
    }

    /// Total vector length.
    pub fn dim(&self) -> usize {
        self.categories.len() + self.tags.len() + DERIVED_FEATURE_COUNT
    }

    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    pub fn tag_index(&self, tag: &str) -> Option<usize> {
        self.tags.binary_search_by(|t| t.as_str().cmp(tag)).ok()
    }

    pub fn tag_offset(&self) -> usize {
        self.categories.len()
    }

    pub fn derived_offset(&self) -> usize {
        self.categories.len() + self.tags.len()
    }
}

/// Dense numeric encoding of one (product, history) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Category index encoded by the one-hot block.
    pub fn category_index(&self, layout: &FeatureLayout) -> Option<usize> {
        self.values
            .get(..layout.num_categories())?
            .iter()
            .position(|&v| v > 0.5)
    }

    /// Vocabulary indices of the product's tags.
    pub fn tag_indices<'a>(&'a self, layout: &FeatureLayout) -> impl Iterator<Item = usize> + 'a {
        let start = layout.tag_offset();
        let end = layout.derived_offset().min(self.values.len());
        self.values
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter(|(_, &v)| v > 0.5)
            .map(|(idx, _)| idx)
    }

    /// Price divided by the reference price, in [0, 1].
    pub fn price_norm(&self, layout: &FeatureLayout) -> f64 {
        self.derived(layout, 0)
    }

    /// Normalized distance from the history's mean price, in [0, 1].
    pub fn price_deviation(&self, layout: &FeatureLayout) -> f64 {
        self.derived(layout, 1)
    }

    /// 1.0 when the price falls within the historical price band.
    pub fn in_price_band(&self, layout: &FeatureLayout) -> f64 {
        self.derived(layout, 2)
    }

    fn derived(&self, layout: &FeatureLayout, slot: usize) -> f64 {
        self.values
            .get(layout.derived_offset() + slot)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Inclusive price range of a history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl PriceBand {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Per-pass digest of a history, indexed by the feature layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryProfile {
    /// History length, including records whose category is unknown.
    pub len: usize,
    /// Purchase count per layout category index.
    pub category_counts: Vec<usize>,
    /// Whether each vocabulary tag appears anywhere in the history.
    pub seen_tags: Vec<bool>,
    /// Layout category indices present in the recent-purchase window.
    pub recent_categories: Vec<usize>,
    /// `None` when the history is empty.
    pub price_band: Option<PriceBand>,
}

impl HistoryProfile {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn count(&self, category: usize) -> usize {
        self.category_counts.get(category).copied().unwrap_or(0)
    }

    /// Share of the history that falls in `category`, in [0, 1].
    pub fn category_share(&self, category: usize) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        self.count(category) as f64 / self.len as f64
    }

    pub fn has_seen_tag(&self, tag: usize) -> bool {
        self.seen_tags.get(tag).copied().unwrap_or(false)
    }

    pub fn is_recent(&self, category: usize) -> bool {
        self.recent_categories.contains(&category)
    }

    /// Number of distinct categories purchased.
    pub fn distinct_categories(&self) -> usize {
        self.category_counts.iter().filter(|&&c| c > 0).count()
    }
}
