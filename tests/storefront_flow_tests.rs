//! Integration tests for the storefront interaction flow.
//!
//! Drives `AppState` through key events the way `run_tui` would,
//! checking that cart mutations, notifications, and the countdown
//! breakdown all line up.

use chrono::{Duration, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lazyshop::cart::CartManager;
use lazyshop::catalog::Catalog;
use lazyshop::config::Config;
use lazyshop::countdown::{CountdownTimer, TimeBreakdown};
use lazyshop::storage::MemoryStore;
use lazyshop::tui::handlers::handle_key_event;
use lazyshop::tui::{AppState, PopupType};

fn test_state() -> AppState {
    let cart = CartManager::new(Box::new(MemoryStore::new())).unwrap();
    AppState::new(
        Catalog::sample(),
        cart,
        CountdownTimer::new(2),
        Config::new(),
    )
}

fn press(state: &mut AppState, code: KeyCode) {
    handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

#[test]
fn browse_add_and_review_cart() {
    let mut state = test_state();

    // Add the first product twice and the second product once
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.cart.item_count(), 3);
    assert_eq!(state.cart.lines().len(), 2);
    assert_eq!(state.notifications.entries().len(), 3);

    let products = state.catalog.products();
    let expected_total = products[0].price * 2.0 + products[1].price;
    assert_eq!(state.cart.total(), expected_total);

    // Open the cart and drop the first line's quantity back to one
    press(&mut state, KeyCode::Char('c'));
    assert_eq!(state.active_popup, Some(PopupType::Cart));
    press(&mut state, KeyCode::Char('-'));
    assert_eq!(state.cart.lines()[0].quantity, 1);

    // Remove the selected line entirely
    press(&mut state, KeyCode::Char('d'));
    assert_eq!(state.cart.lines().len(), 1);

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.active_popup, None);
}

#[test]
fn newsletter_flow_from_key_events() {
    let mut state = test_state();

    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.active_popup, Some(PopupType::Newsletter));

    for c in "deal-hunter@example.com".chars() {
        press(&mut state, KeyCode::Char(c));
    }
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.active_popup, None);
    assert_eq!(
        state.notifications.entries().last().unwrap().message,
        "Thank you for subscribing with: deal-hunter@example.com"
    );
}

#[test]
fn countdown_breakdown_matches_simulated_clock() {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let mut timer = CountdownTimer::new_at(start, 2);

    // One second in
    let breakdown = timer.tick(start + Duration::seconds(1)).unwrap();
    assert_eq!(
        breakdown,
        TimeBreakdown {
            days: 1,
            hours: 23,
            minutes: 59,
            seconds: 59
        }
    );

    // At the deadline the zero breakdown is shown and the timer stops
    let breakdown = timer.tick(timer.target()).unwrap();
    assert_eq!(
        breakdown,
        TimeBreakdown {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0
        }
    );
    assert!(!timer.is_running());

    // Stopped timers ignore further ticks
    assert_eq!(timer.tick(timer.target() + Duration::seconds(5)), None);
}

#[test]
fn cart_mutations_survive_within_a_session() {
    let mut state = test_state();

    press(&mut state, KeyCode::Char('a'));
    press(&mut state, KeyCode::Char('c'));
    press(&mut state, KeyCode::Char('+'));
    press(&mut state, KeyCode::Char('+'));

    assert_eq!(state.cart.lines()[0].quantity, 3);
    assert_eq!(state.cart.item_count(), 3);
}
