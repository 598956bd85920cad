//! Cart state management.
//!
//! `CartManager` owns the authoritative in-memory cart and keeps the
//! persisted store in agreement after every change. The storage backend
//! is injected (see [`crate::storage`]), and display updates are
//! pull-based: the UI reads `item_count()`/`lines()` on each frame, so a
//! mutation is reflected on the next draw without any callback wiring.

use anyhow::{Context, Result};

use crate::constants::CART_STORAGE_KEY;
use crate::models::{CartLine, Product};
use crate::storage::StorageBackend;

/// The authoritative in-memory cart, synchronized to a storage backend.
///
/// Lines are kept in insertion order (first added stays first). Every
/// mutating operation ends with the full line list being re-serialized
/// and written to the store; the store never holds an incremental diff.
pub struct CartManager {
    lines: Vec<CartLine>,
    store: Box<dyn StorageBackend>,
    load_warning: Option<String>,
}

impl CartManager {
    /// Creates a cart manager, initializing from any previously persisted cart.
    ///
    /// An absent key yields an empty cart. A malformed persisted value
    /// also yields an empty cart, with a warning recorded for the UI to
    /// surface (the stored value is left in place until the next save
    /// overwrites it).
    pub fn new(store: Box<dyn StorageBackend>) -> Result<Self> {
        let mut load_warning = None;

        let lines = match store
            .load(CART_STORAGE_KEY)
            .context("Failed to load persisted cart")?
        {
            Some(raw) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => lines,
                Err(e) => {
                    load_warning = Some(format!("Stored cart was unreadable, starting empty: {e}"));
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self {
            lines,
            store,
            load_warning,
        })
    }

    /// Adds one unit of the given product to the cart.
    ///
    /// If a line with the product's id already exists its quantity is
    /// incremented, otherwise a new line with quantity 1 is appended.
    /// Persists the cart and returns the confirmation message to show.
    pub fn add_item(&mut self, product: &Product) -> Result<String> {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::new(product));
        }

        self.persist()?;
        Ok(format!("{} added to cart!", product.name))
    }

    /// Removes the line with the given product id, if present.
    ///
    /// A missing id is a no-op, not an error. Persists the cart.
    pub fn remove_item(&mut self, product_id: u32) -> Result<()> {
        self.lines.retain(|line| line.id != product_id);
        self.persist()
    }

    /// Sets the quantity of the line with the given product id.
    ///
    /// A missing id is a no-op. A quantity of zero or below removes the
    /// line entirely. Persists the cart.
    pub fn update_quantity(&mut self, product_id: u32, quantity: i64) -> Result<()> {
        if !self.lines.iter().any(|line| line.id == product_id) {
            return Ok(());
        }

        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product_id) {
            line.quantity = quantity as u32;
        }
        self.persist()
    }

    /// Sum of `price * quantity` over all lines. Pure read, no rounding.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities over all lines. Pure read.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Takes the warning recorded when the persisted cart was unreadable.
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }

    /// Re-serializes the full line list and overwrites the stored value.
    fn persist(&self) -> Result<()> {
        let serialized =
            serde_json::to_string(&self.lines).context("Failed to serialize cart")?;
        self.store
            .save(CART_STORAGE_KEY, &serialized)
            .context("Failed to persist cart")
    }
}
