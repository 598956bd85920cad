//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod cart_view;
pub mod handlers;
pub mod newsletter;
pub mod notifications;
pub mod product_list;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::cart::CartManager;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::constants::{APP_NAME, COUNTDOWN_TICK_MS};
use crate::countdown::{CountdownTimer, TimeBreakdown};

// Re-export TUI components
pub use cart_view::CartView;
pub use newsletter::{NewsletterForm, NewsletterView};
pub use notifications::{NotificationQueue, Notifications};
pub use product_list::ProductList;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Cart contents popup
    Cart,
    /// Newsletter signup popup
    Newsletter,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Product catalog shown in the main view
    pub catalog: Catalog,
    /// Authoritative cart, synchronized to the persisted store
    pub cart: CartManager,
    /// Deal countdown timer
    pub countdown: CountdownTimer,
    /// Last computed countdown breakdown (None hides the segment)
    pub countdown_display: Option<TimeBreakdown>,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Currently selected product index in the catalog list
    pub selected: usize,
    /// Currently selected line index in the cart popup
    pub cart_selected: usize,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Newsletter signup form state
    pub newsletter: NewsletterForm,
    /// Live toast notifications
    pub notifications: NotificationQueue,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from the catalog, cart, countdown, and config.
    ///
    /// Performs the initial countdown tick (the timer displays
    /// immediately, before the first one-second period elapses) and
    /// surfaces any warning the cart recorded while loading persisted
    /// data.
    pub fn new(
        catalog: Catalog,
        mut cart: CartManager,
        mut countdown: CountdownTimer,
        config: Config,
    ) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let countdown_display = countdown.tick(Utc::now());
        let error_message = cart.take_load_warning();

        Self {
            catalog,
            cart,
            countdown,
            countdown_display,
            theme,
            selected: 0,
            cart_selected: 0,
            active_popup: None,
            newsletter: NewsletterForm::new(),
            notifications: NotificationQueue::new(),
            status_message: String::new(),
            error_message,
            config,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Moves the product selection down, saturating at the last product.
    pub fn select_next_product(&mut self) {
        if self.selected + 1 < self.catalog.len() {
            self.selected += 1;
        }
    }

    /// Moves the product selection up, saturating at the first product.
    pub fn select_previous_product(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Adds one unit of the currently selected product to the cart.
    ///
    /// On success the cart is persisted and the confirmation toast is
    /// queued; a failed save is shown as an error, never a crash.
    pub fn add_selected_to_cart(&mut self) {
        let Some(product) = self.catalog.products().get(self.selected).cloned() else {
            return;
        };

        match self.cart.add_item(&product) {
            Ok(message) => {
                self.notifications.push(message);
                self.clear_error();
            }
            Err(e) => self.set_error(format!("Failed to save cart: {e:#}")),
        }
    }

    /// Opens the cart popup with the selection reset to the first line.
    pub fn open_cart(&mut self) {
        self.cart_selected = 0;
        self.active_popup = Some(PopupType::Cart);
    }

    /// Opens the newsletter signup popup.
    pub fn open_newsletter(&mut self) {
        self.active_popup = Some(PopupType::Newsletter);
    }

    /// Closes the active popup, if any.
    pub fn close_popup(&mut self) {
        self.active_popup = None;
    }

    /// Clamps the cart selection after a line was removed.
    pub fn clamp_cart_selection(&mut self) {
        let len = self.cart.lines().len();
        if len == 0 {
            self.cart_selected = 0;
        } else if self.cart_selected >= len {
            self.cart_selected = len - 1;
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_period = Duration::from_millis(COUNTDOWN_TICK_MS);
    let mut last_countdown_tick = Instant::now();

    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Drop notifications whose dwell time has elapsed
        state.notifications.expire(Instant::now());

        // Advance the countdown once per second while it runs; the
        // running check is the tick registration, so a stopped timer
        // costs nothing
        if state.countdown.is_running() && last_countdown_tick.elapsed() >= tick_period {
            state.countdown_display = state.countdown.tick(Utc::now());
            last_countdown_tick = Instant::now();
        }

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Product list
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    ProductList::render(f, chunks[1], state, &state.theme);
    StatusBar::render(f, chunks[2], state, &state.theme);

    // Render popup if active
    match state.active_popup {
        Some(PopupType::Cart) => CartView::render(f, state, &state.theme),
        Some(PopupType::Newsletter) => NewsletterView::render(f, &state.newsletter, &state.theme),
        None => {}
    }

    // Toasts go on top of everything
    Notifications::render(f, &state.notifications, &state.theme);
}

/// Render title bar with the app name and the cart count badge
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        format!(" {APP_NAME} "),
        Style::default()
            .fg(state.theme.primary)
            .add_modifier(Modifier::BOLD),
    )];

    // Badge is hidden while the cart is empty, shown once count > 0
    let count = state.cart.item_count();
    if count > 0 {
        spans.push(Span::styled(
            format!(" Cart [{count}] "),
            Style::default()
                .fg(state.theme.background)
                .bg(state.theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let title_widget = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(state.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Computes a centered rect occupying the given percentages of the screen.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
