//! LazyShop Library
//!
//! This library provides core functionality for the LazyShop terminal
//! storefront, including cart state management, persisted key-value
//! storage, the deal countdown timer, and catalog loading.

// Module declarations
pub mod cart;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod models;
pub mod storage;
pub mod tui;
