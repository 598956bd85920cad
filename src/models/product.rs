//! Product and cart line data structures.

use serde::{Deserialize, Serialize};

/// A product offered by the storefront.
///
/// Products are sourced from the catalog and never mutated after
/// construction. The id is unique within a catalog and serves as the
/// identity of a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Display name
    pub name: String,
    /// Unit price (non-negative)
    pub price: f64,
    /// Image reference (may be empty)
    #[serde(default)]
    pub image: String,
    /// Rating, informational only
    #[serde(default)]
    pub rating: f64,
    /// Optional long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Creates a new Product with the given id, name, and price.
    ///
    /// Image and rating default to empty/zero; use the builder methods
    /// to set them.
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: String::new(),
            rating: 0.0,
            description: None,
        }
    }

    /// Sets the image reference for this product.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the rating for this product.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the description for this product.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A cart entry: a product's fields plus a quantity.
///
/// # Invariants
///
/// - `quantity` is always positive while the line exists; a line whose
///   quantity would drop to zero or below is deleted instead
/// - At most one line per product id exists in a cart
///
/// The serialized form is the wire format of the persisted store:
/// `{id, name, price, image, rating, quantity}`, no version field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier (line identity)
    pub id: u32,
    /// Product display name
    pub name: String,
    /// Unit price at the time the line was added
    pub price: f64,
    /// Image reference copied from the product
    #[serde(default)]
    pub image: String,
    /// Rating copied from the product
    #[serde(default)]
    pub rating: f64,
    /// Number of units (positive)
    pub quantity: u32,
}

impl CartLine {
    /// Creates a new line for the given product with quantity 1.
    pub fn new(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            rating: product.rating,
            quantity: 1,
        }
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new() {
        let product = Product::new(1, "Mug", 9.5);
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Mug");
        assert_eq!(product.price, 9.5);
        assert!(product.image.is_empty());
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_product_builder() {
        let product = Product::new(2, "Lamp", 24.0)
            .with_image("lamp.png")
            .with_rating(4.5)
            .with_description("Desk lamp");

        assert_eq!(product.image, "lamp.png");
        assert_eq!(product.rating, 4.5);
        assert_eq!(product.description, Some("Desk lamp".to_string()));
    }

    #[test]
    fn test_cart_line_copies_product_fields() {
        let product = Product::new(3, "Chair", 49.99).with_image("chair.png").with_rating(4.0);
        let line = CartLine::new(&product);

        assert_eq!(line.id, 3);
        assert_eq!(line.name, "Chair");
        assert_eq!(line.price, 49.99);
        assert_eq!(line.image, "chair.png");
        assert_eq!(line.rating, 4.0);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_cart_line_subtotal() {
        let mut line = CartLine::new(&Product::new(1, "Mug", 9.5));
        line.quantity = 3;
        assert_eq!(line.subtotal(), 28.5);
    }

    #[test]
    fn test_cart_line_serde_round_trip() {
        let mut line = CartLine::new(&Product::new(7, "Teapot", 15.25).with_rating(4.0));
        line.quantity = 2;

        let json = serde_json::to_string(&line).unwrap();
        let parsed: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }

    #[test]
    fn test_cart_line_tolerates_missing_optional_fields() {
        // Older persisted data may lack image/rating; they default
        let json = r#"{"id":1,"name":"Mug","price":9.5,"quantity":1}"#;
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert!(line.image.is_empty());
        assert_eq!(line.rating, 0.0);
    }
}
