//! Integration tests for cart persistence across application runs.
//!
//! Each test builds a `FileStore` in a temp directory, mutates a cart
//! through one `CartManager`, and reloads it through a fresh manager the
//! way a new page load would.

use lazyshop::cart::CartManager;
use lazyshop::constants::CART_STORAGE_KEY;
use lazyshop::models::Product;
use lazyshop::storage::{FileStore, StorageBackend};
use std::fs;
use tempfile::TempDir;

fn file_cart(temp_dir: &TempDir) -> CartManager {
    let store = FileStore::new(temp_dir.path().to_path_buf());
    CartManager::new(Box::new(store)).unwrap()
}

#[test]
fn cart_round_trips_across_instances() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut cart = file_cart(&temp_dir);
        cart.add_item(&Product::new(2, "Lamp", 24.0).with_image("lamp.png").with_rating(4.2))
            .unwrap();
        cart.add_item(&Product::new(1, "Mug", 9.5)).unwrap();
        cart.update_quantity(2, 3).unwrap();
    }

    // A fresh manager sees the identical ordered line list
    let cart = file_cart(&temp_dir);
    let ids: Vec<u32> = cart.lines().iter().map(|line| line.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(cart.lines()[0].quantity, 3);
    assert_eq!(cart.lines()[0].image, "lamp.png");
    assert_eq!(cart.lines()[0].rating, 4.2);
    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.total(), 81.5);
}

#[test]
fn store_holds_the_full_serialized_list() {
    let temp_dir = TempDir::new().unwrap();

    let mut cart = file_cart(&temp_dir);
    cart.add_item(&Product::new(1, "Mug", 9.5)).unwrap();
    cart.add_item(&Product::new(2, "Lamp", 24.0)).unwrap();
    cart.remove_item(1).unwrap();

    // The stored value is the whole current list, overwritten each time
    let raw = fs::read_to_string(temp_dir.path().join("cart.json")).unwrap();
    let lines: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = lines.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["id"], 2);
    assert_eq!(array[0]["quantity"], 1);
}

#[test]
fn missing_store_file_yields_empty_cart() {
    let temp_dir = TempDir::new().unwrap();
    let mut cart = file_cart(&temp_dir);

    assert!(cart.is_empty());
    assert_eq!(cart.take_load_warning(), None);
}

#[test]
fn corrupt_store_file_falls_back_to_empty_cart() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("cart.json"), "{{{corrupt").unwrap();

    let mut cart = file_cart(&temp_dir);
    assert!(cart.is_empty());
    assert!(cart.take_load_warning().is_some());

    // The next mutation overwrites the corrupt value (last write wins)
    cart.add_item(&Product::new(1, "Mug", 9.5)).unwrap();
    let reloaded = file_cart(&temp_dir);
    assert_eq!(reloaded.item_count(), 1);
}

#[test]
fn storage_backend_uses_the_cart_key() {
    let temp_dir = TempDir::new().unwrap();

    let mut cart = file_cart(&temp_dir);
    cart.add_item(&Product::new(1, "Mug", 9.5)).unwrap();

    let store = FileStore::new(temp_dir.path().to_path_buf());
    assert!(store.load(CART_STORAGE_KEY).unwrap().is_some());
}
