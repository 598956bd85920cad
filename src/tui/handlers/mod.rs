//! Input handler modules for different TUI contexts.

pub mod main;
pub mod popups;

use anyhow::Result;
use crossterm::event;

use super::{AppState, PopupType};

// Re-export handler functions
pub use main::handle_main_input;
pub use popups::{handle_cart_input, handle_newsletter_input};

/// Routes a key event to the handler for the active context.
///
/// Returns `Ok(true)` when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::Cart) => handle_cart_input(state, key),
        Some(PopupType::Newsletter) => handle_newsletter_input(state, key),
        None => handle_main_input(state, key),
    }
}
