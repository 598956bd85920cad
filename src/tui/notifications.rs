//! Transient toast notifications.
//!
//! Each notification is independent: it appears, stays for a fixed
//! dwell time, and is dropped on the first expiry sweep after that.
//! Several notifications may coexist when triggered in quick
//! succession; there is no queueing or suppression policy.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use super::Theme;
use crate::constants::NOTIFICATION_DWELL_MS;

/// A single transient message with its creation instant.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The one-line message to display
    pub message: String,
    created_at: Instant,
}

/// Holds the live notifications and expires them over time.
#[derive(Debug)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    dwell: Duration,
}

impl NotificationQueue {
    /// Creates an empty queue with the default dwell time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dwell(Duration::from_millis(NOTIFICATION_DWELL_MS))
    }

    /// Creates an empty queue with an explicit dwell time (used in tests).
    #[must_use]
    pub const fn with_dwell(dwell: Duration) -> Self {
        Self {
            entries: Vec::new(),
            dwell,
        }
    }

    /// Adds a notification timestamped now.
    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(message, Instant::now());
    }

    /// Adds a notification with an explicit creation instant.
    pub fn push_at(&mut self, message: impl Into<String>, now: Instant) {
        self.entries.push(Notification {
            message: message.into(),
            created_at: now,
        });
    }

    /// Drops every notification whose dwell time has elapsed at `now`.
    pub fn expire(&mut self, now: Instant) {
        let dwell = self.dwell;
        self.entries
            .retain(|entry| now.duration_since(entry.created_at) < dwell);
    }

    /// The live notifications, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Whether any notification is currently live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast notification widget.
pub struct Notifications;

impl Notifications {
    /// Renders the live notifications stacked in the top-right corner.
    pub fn render(f: &mut Frame, queue: &NotificationQueue, theme: &Theme) {
        let screen = f.area();

        for (i, notification) in queue.entries().iter().enumerate() {
            // Width fits the message plus borders, capped to the screen
            let width = (notification.message.len() as u16 + 4).min(screen.width);
            let height = 3u16;
            let y = 1 + (i as u16) * height;
            if y + height > screen.height {
                break;
            }

            let area = Rect {
                x: screen.width.saturating_sub(width + 1),
                y,
                width,
                height,
            };

            let toast = Paragraph::new(notification.message.as_str())
                .style(Style::default().fg(theme.text).bg(theme.highlight_bg))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.success))
                        .style(Style::default().bg(theme.highlight_bg)),
                );

            f.render_widget(Clear, area);
            f.render_widget(toast, area);
        }
    }
}
