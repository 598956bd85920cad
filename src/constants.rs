//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, storage keys, and timing values.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyShop";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "lazyshop";

/// Storage key under which the serialized cart is persisted.
pub const CART_STORAGE_KEY: &str = "cart";

/// How long a notification stays visible before it is dropped, in milliseconds.
pub const NOTIFICATION_DWELL_MS: u64 = 3_000;

/// Countdown tick period in milliseconds (one recomputation per second).
pub const COUNTDOWN_TICK_MS: u64 = 1_000;

/// Default deal deadline offset in days from application start.
pub const DEFAULT_DEAL_DAYS: i64 = 2;

/// Milliseconds per day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 3_600_000;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1_000;
