//! Read-only product catalog with its frozen category set and tag vocabulary.

mod product;

pub use product::{Product, ProductId};

use std::collections::{BTreeSet, HashMap};

use crate::errors::{BasketError, BasketResult};

/// Fixed, ordered product inventory.
///
/// The category set C (first-appearance order) and tag vocabulary T (sorted)
/// are derived once at construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    tags: Vec<String>,
    positions: HashMap<ProductId, usize>,
    max_price: f64,
}

impl Catalog {
    /// Build a catalog. Product ids must be unique.
    pub fn new(products: Vec<Product>) -> BasketResult<Self> {
        let mut positions = HashMap::with_capacity(products.len());
        let mut categories: Vec<String> = Vec::new();
        let mut tags = BTreeSet::new();
        let mut max_price: f64 = 0.0;

        for (idx, product) in products.iter().enumerate() {
            if positions.insert(product.id, idx).is_some() {
                return Err(BasketError::DuplicateProduct { id: product.id });
            }
            if let Some(category) = product.category_name() {
                if !categories.iter().any(|c| c == category) {
                    categories.push(category.to_string());
                }
            }
            tags.extend(product.tag_list().iter().cloned());
            if product.price.is_finite() {
                max_price = max_price.max(product.price);
            }
        }

        Ok(Self {
            products,
            categories,
            tags: tags.into_iter().collect(),
            positions,
            max_price,
        })
    }

    /// Load a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> BasketResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.positions.get(&id).map(|&idx| &self.products[idx])
    }

    /// The closed category set C.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The catalog-wide tag vocabulary T.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    pub fn tag_index(&self, tag: &str) -> Option<usize> {
        self.tags.binary_search_by(|t| t.as_str().cmp(tag)).ok()
    }

    /// Highest finite price in the catalog (0.0 for an empty catalog).
    pub fn max_price(&self) -> f64 {
        self.max_price
    }
}
