//! Core data structures for products and cart lines.

pub mod product;

pub use product::{CartLine, Product};
