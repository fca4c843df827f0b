use serde::{Deserialize, Serialize};

/// Unique product identifier.
pub type ProductId = u64;

/// Immutable catalog entry.
///
/// `category` and `tags` are optional so a malformed catalog row can still be
/// loaded; feature extraction rejects it per product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Create a well-formed product with no tags yet.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: Some(category.into()),
            price,
            tags: Some(Vec::new()),
            image: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Category name, `None` when missing or blank.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Tags, empty when missing.
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}
