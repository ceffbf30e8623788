//! Product records served by the mock API.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are owned by the remote API; this side only reads them and keeps
/// snapshots inside cart lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image URI.
    #[serde(default)]
    pub image: String,
    /// Free-text grouping label.
    #[serde(default)]
    pub category: String,
    /// Units available; `0` means the product cannot be bought.
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Create a product with the given id, name and price.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: String::new(),
            stock: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Check if the product can be purchased.
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Stock status line shown on the detail page.
    pub fn stock_label(&self) -> String {
        if self.is_available() {
            format!("In Stock ({} available)", self.stock)
        } else {
            "Out of Stock".to_string()
        }
    }

    /// Other products in the same category, excluding this one, in input order.
    pub fn related<'a>(&self, catalog: &'a [Product], limit: usize) -> Vec<&'a Product> {
        catalog
            .iter()
            .filter(|p| p.id != self.id && p.category == self.category)
            .take(limit)
            .collect()
    }
}
