//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query (byte offset)
    cursor: usize,
    /// Maximum query length in characters
    max_len: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, max_len: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            max_len,
            theme,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let used = self.query.chars().count();
        let counter_style = if used >= self.max_len {
            self.theme.warning()
        } else {
            self.theme.muted()
        };
        let counter = Line::from(Span::styled(
            format!(" {used}/{} ", self.max_len),
            counter_style,
        ))
        .right_aligned();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent())
            .title(" Search ")
            .title(counter);

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("›", self.theme.muted()), Span::raw(" ")];

        if self.query.is_empty() {
            spans.push(caret);
            spans.push(Span::styled("Type to search", self.theme.muted()));
        } else {
            // Split query at cursor position
            let (before, after) = self.query.split_at(self.cursor.min(self.query.len()));
            spans.push(Span::raw(before));
            spans.push(caret);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
