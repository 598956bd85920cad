//! Main storefront view input handler.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::tui::AppState;

/// Handle input for the main product list view.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_previous_product();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next_product();
            Ok(false)
        }
        KeyCode::Enter | KeyCode::Char('a') => {
            state.add_selected_to_cart();
            Ok(false)
        }
        KeyCode::Char('c') => {
            state.open_cart();
            Ok(false)
        }
        KeyCode::Char('n') => {
            state.open_newsletter();
            Ok(false)
        }
        _ => Ok(false),
    }
}
