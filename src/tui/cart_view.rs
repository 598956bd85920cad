//! Cart popup widget: line items, quantities, and the running total.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, AppState, Theme};

/// Popup showing the cart contents.
pub struct CartView;

impl CartView {
    /// Renders the cart popup over the main view.
    pub fn render(f: &mut Frame, state: &AppState, theme: &Theme) {
        let area = centered_rect(60, 60, f.area());
        f.render_widget(Clear, area);

        let mut lines: Vec<Line> = Vec::new();

        if state.cart.is_empty() {
            lines.push(Line::from(Span::styled(
                "Your cart is empty",
                Style::default().fg(theme.text_muted),
            )));
        } else {
            for (i, line) in state.cart.lines().iter().enumerate() {
                let selected = i == state.cart_selected;
                let marker = if selected { "> " } else { "  " };
                let base_style = if selected {
                    Style::default()
                        .fg(theme.text)
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };

                lines.push(Line::from(vec![
                    Span::styled(marker, base_style),
                    Span::styled(format!("{:<26}", line.name), base_style),
                    Span::styled(format!("x{:<4}", line.quantity), base_style.fg(theme.accent)),
                    Span::styled(
                        format!("@ ${:>7.2}", line.price),
                        base_style.fg(theme.text_muted),
                    ),
                    Span::styled(format!("  ${:>8.2}", line.subtotal()), base_style),
                ]));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} item(s)", state.cart.item_count()),
                    Style::default().fg(theme.text_muted),
                ),
                Span::raw("   "),
                Span::styled("Total: ", Style::default().fg(theme.primary)),
                Span::styled(
                    format!("${:.2}", state.cart.total()),
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        let popup = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Cart ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(popup, area);
    }
}
