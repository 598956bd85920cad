//! Status bar widget for the deal countdown, status messages, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the countdown and contextual help.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        // First line: error, status message, or nothing
        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            )));
        }

        // Deal countdown line; skipped entirely once the timer has stopped
        if let Some(remaining) = &state.countdown_display {
            content_lines.push(Line::from(vec![
                Span::styled("Deal ends in: ", Style::default().fg(theme.primary)),
                Span::styled(
                    format!(
                        "{}d {:02}h {:02}m {:02}s",
                        remaining.days, remaining.hours, remaining.minutes, remaining.seconds
                    ),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        // Pad so the help line stays at the bottom (4 height - 2 borders = 2 content + 1 help)
        const MAX_CONTENT_LINES: usize = 2;
        let padding_needed = MAX_CONTENT_LINES.saturating_sub(content_lines.len());

        let mut status_text: Vec<Line> = Vec::new();
        for line in content_lines.into_iter().take(MAX_CONTENT_LINES) {
            status_text.push(line);
        }
        for _ in 0..padding_needed {
            status_text.push(Line::from(""));
        }
        status_text.push(Self::help_line(state, theme));

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Contextual key hints for the bottom line of the status bar.
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        if !state.config.ui.show_hints {
            return Line::from("");
        }

        let hints: &[(&str, &str)] = match state.active_popup {
            Some(PopupType::Cart) => &[
                ("↑/↓", "Select"),
                ("+/-", "Quantity"),
                ("d", "Remove"),
                ("Esc", "Close"),
            ],
            Some(PopupType::Newsletter) => &[("Enter", "Subscribe"), ("Esc", "Close")],
            None => &[
                ("↑/↓", "Browse"),
                ("Enter", "Add to cart"),
                ("c", "Cart"),
                ("n", "Newsletter"),
                ("q", "Quit"),
            ],
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(theme.accent),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }

        Line::from(spans)
    }
}
