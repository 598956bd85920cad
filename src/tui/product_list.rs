//! Product list widget for the main storefront view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::{AppState, Theme};

/// Scrollable product list widget.
pub struct ProductList;

impl ProductList {
    /// Renders the catalog with the current selection highlighted.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let items: Vec<ListItem> = state
            .catalog
            .products()
            .iter()
            .map(|product| {
                let stars = Self::stars(product.rating);
                let mut spans = vec![
                    Span::styled(
                        format!("{:<28}", product.name),
                        Style::default().fg(theme.text),
                    ),
                    Span::styled(
                        format!("${:>8.2}  ", product.price),
                        Style::default().fg(theme.accent),
                    ),
                    Span::styled(stars, Style::default().fg(theme.warning)),
                ];
                if let Some(description) = &product.description {
                    spans.push(Span::styled(
                        format!("  {description}"),
                        Style::default().fg(theme.text_muted),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Products ")
                    .style(Style::default().bg(theme.background)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(state.selected));

        f.render_stateful_widget(list, area, &mut list_state);
    }

    /// Renders a rating as a five-character star gauge.
    fn stars(rating: f64) -> String {
        let filled = rating.round().clamp(0.0, 5.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_rounding() {
        assert_eq!(ProductList::stars(4.5), "★★★★★");
        assert_eq!(ProductList::stars(4.2), "★★★★☆");
        assert_eq!(ProductList::stars(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_stars_out_of_range_is_clamped() {
        assert_eq!(ProductList::stars(9.0), "★★★★★");
        assert_eq!(ProductList::stars(-1.0), "☆☆☆☆☆");
    }
}
