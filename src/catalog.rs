//! Product catalog loading and validation.
//!
//! The catalog is the external source of products (the storefront does
//! not own them). It is read once at startup from a JSON file, or falls
//! back to a built-in sample catalog when no file is given.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::Product;

/// An ordered, validated collection of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads a catalog from a JSON file containing an array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if any
    /// product carries a negative price, or if two products share an id.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;

        let products: Vec<Product> = serde_json::from_str(&content)
            .context(format!("Failed to parse catalog file: {}", path.display()))?;

        Self::from_products(products)
    }

    /// Builds a catalog from already-constructed products, validating them.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if product.price < 0.0 {
                anyhow::bail!(
                    "Product '{}' (id {}) has a negative price",
                    product.name,
                    product.id
                );
            }
            if !seen.insert(product.id) {
                anyhow::bail!("Duplicate product id {} in catalog", product.id);
            }
        }

        Ok(Self { products })
    }

    /// The built-in sample catalog used when no catalog file is given.
    #[must_use]
    pub fn sample() -> Self {
        let products = vec![
            Product::new(1, "Wireless Headphones", 89.99)
                .with_image("headphones.png")
                .with_rating(4.5)
                .with_description("Over-ear headphones with 30h battery life"),
            Product::new(2, "Smart Watch", 129.00)
                .with_image("watch.png")
                .with_rating(4.0)
                .with_description("Fitness tracking and notifications"),
            Product::new(3, "Ceramic Mug", 9.50)
                .with_image("mug.png")
                .with_rating(4.8)
                .with_description("350ml stoneware mug"),
            Product::new(4, "Desk Lamp", 24.00)
                .with_image("lamp.png")
                .with_rating(4.2)
                .with_description("Adjustable LED desk lamp"),
            Product::new(5, "Canvas Backpack", 54.90)
                .with_image("backpack.png")
                .with_rating(4.6)
                .with_description("20L water-resistant backpack"),
            Product::new(6, "Mechanical Keyboard", 99.00)
                .with_image("keyboard.png")
                .with_rating(4.7)
                .with_description("Hot-swappable 65% board"),
        ];

        // Sample data is hand-maintained; validation cannot fail here
        Self { products }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
