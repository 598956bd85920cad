//! Newsletter signup form.
//!
//! A small popup with a single email field. Submitting a non-empty
//! value produces a confirmation notification and clears the field;
//! submitting an empty value does nothing. No validation beyond
//! non-empty is applied.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, Theme};

/// State of the newsletter signup form.
#[derive(Debug, Default)]
pub struct NewsletterForm {
    /// Current contents of the email field
    pub email: String,
}

impl NewsletterForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits the form.
    ///
    /// Returns the confirmation message and clears the field when the
    /// value is non-empty; returns `None` otherwise.
    pub fn submit(&mut self) -> Option<String> {
        if self.email.is_empty() {
            return None;
        }

        let message = format!("Thank you for subscribing with: {}", self.email);
        self.email.clear();
        Some(message)
    }

    /// Appends a typed character to the email field.
    pub fn type_char(&mut self, c: char) {
        self.email.push(c);
    }

    /// Deletes the last character of the email field.
    pub fn backspace(&mut self) {
        self.email.pop();
    }
}

/// Newsletter popup widget.
pub struct NewsletterView;

impl NewsletterView {
    /// Renders the signup form popup.
    pub fn render(f: &mut Frame, form: &NewsletterForm, theme: &Theme) {
        let area = centered_rect(50, 25, f.area());
        f.render_widget(Clear, area);

        let lines = vec![
            Line::from(Span::styled(
                "Subscribe to our newsletter",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Email: ", Style::default().fg(theme.text_muted)),
                Span::styled(form.email.as_str(), Style::default().fg(theme.text)),
                Span::styled("_", Style::default().fg(theme.accent)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Enter: subscribe | Esc: close",
                Style::default().fg(theme.text_muted),
            )),
        ];

        let popup = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Newsletter ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(popup, area);
    }
}
