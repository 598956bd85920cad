//! Popup input handlers for the cart view and the newsletter form.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::tui::AppState;

/// Handle input for the cart popup.
pub fn handle_cart_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
            state.close_popup();
            Ok(false)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.cart_selected = state.cart_selected.saturating_sub(1);
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.cart_selected + 1 < state.cart.lines().len() {
                state.cart_selected += 1;
            }
            Ok(false)
        }
        KeyCode::Char('+') => {
            let selected = selected_line(state);
            if let Some((id, quantity)) = selected {
                if let Err(e) = state.cart.update_quantity(id, quantity + 1) {
                    state.set_error(format!("Failed to save cart: {e:#}"));
                }
            }
            Ok(false)
        }
        KeyCode::Char('-') => {
            // Dropping to zero removes the line
            let selected = selected_line(state);
            if let Some((id, quantity)) = selected {
                if let Err(e) = state.cart.update_quantity(id, quantity - 1) {
                    state.set_error(format!("Failed to save cart: {e:#}"));
                }
                state.clamp_cart_selection();
            }
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let selected = selected_line(state);
            if let Some((id, _)) = selected {
                if let Err(e) = state.cart.remove_item(id) {
                    state.set_error(format!("Failed to save cart: {e:#}"));
                }
                state.clamp_cart_selection();
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Id and quantity of the cart line under the cursor, if any.
fn selected_line(state: &AppState) -> Option<(u32, i64)> {
    state
        .cart
        .lines()
        .get(state.cart_selected)
        .map(|line| (line.id, i64::from(line.quantity)))
}

/// Handle input for the newsletter signup popup.
pub fn handle_newsletter_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            state.close_popup();
            Ok(false)
        }
        KeyCode::Enter => {
            // Empty submissions are ignored; the popup stays open
            if let Some(message) = state.newsletter.submit() {
                state.notifications.push(message);
                state.close_popup();
            }
            Ok(false)
        }
        KeyCode::Backspace => {
            state.newsletter.backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            state.newsletter.type_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
