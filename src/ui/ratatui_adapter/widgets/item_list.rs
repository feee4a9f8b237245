//! Item list widget for displaying the visible rows

use crate::filter::DisplayRow;
use crate::selection::SelectionMode;
use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget},
};

/// Item list widget that displays rows with radio or checkbox markers
pub struct ItemList<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
    /// Matched character positions, one entry per row from the scroll offset
    highlights: &'a [Vec<u32>],
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub const fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            highlights: &[],
        }
    }

    /// Set match positions for highlighting
    #[must_use]
    pub const fn with_highlights(mut self, highlights: &'a [Vec<u32>]) -> Self {
        self.highlights = highlights;
        self
    }

    fn marker(&self, row: &DisplayRow) -> &'static str {
        let selected = self.state.modal.is_selected(&row.label);
        match (self.state.selection_mode(), selected) {
            (SelectionMode::Single, true) => "(•)",
            (SelectionMode::Single, false) => "( )",
            (SelectionMode::Multi, true) => "[x]",
            (SelectionMode::Multi, false) => "[ ]",
        }
    }

    /// Split a label into plain and matched runs
    fn label_spans(&self, label: &str, indices: &[u32], base: Style) -> Vec<Span<'static>> {
        if indices.is_empty() {
            return vec![Span::styled(label.to_string(), base)];
        }

        let matched_style = base.patch(self.theme.matched());
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_matched = false;

        for (i, c) in label.chars().enumerate() {
            let matched = u32::try_from(i).is_ok_and(|i| indices.binary_search(&i).is_ok());
            if matched != run_matched && !run.is_empty() {
                let style = if run_matched { matched_style } else { base };
                spans.push(Span::styled(std::mem::take(&mut run), style));
            }
            run_matched = matched;
            run.push(c);
        }
        if !run.is_empty() {
            let style = if run_matched { matched_style } else { base };
            spans.push(Span::styled(run, style));
        }

        spans
    }

    /// Render a single row
    fn render_row(&self, row: &DisplayRow, indices: &[u32], is_cursor: bool) -> ListItem<'static> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let marker = self.marker(row);
        let marker_style = if marker.contains(['•', 'x']) {
            self.theme.ticked()
        } else {
            self.theme.muted()
        };

        let text_style = if is_cursor {
            self.theme.cursor_row()
        } else {
            self.theme.plain()
        };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.accent()),
            Span::raw(" "),
            Span::styled(marker, marker_style),
            Span::raw(" "),
        ];

        if row.is_create() {
            spans.push(Span::styled(row.label.clone(), text_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                self.state.labels.create_suffix.clone(),
                self.theme.create_suffix(),
            ));
        } else {
            spans.extend(self.label_spans(&row.label, indices, text_style));
        }

        let item = ListItem::new(Line::from(spans));
        if is_cursor {
            item.style(self.theme.cursor_row())
        } else {
            item
        }
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let rows = self.state.modal.rows();
        if rows.is_empty() {
            Paragraph::new(self.state.labels.empty_message.as_str())
                .style(self.theme.muted())
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        // Calculate visible range
        let start = self.state.scroll_offset.min(rows.len());
        let end = (start + area.height as usize).min(rows.len());

        let items: Vec<ListItem> = rows[start..end]
            .iter()
            .enumerate()
            .map(|(offset, row)| {
                let indices = self.highlights.get(offset).map_or(&[][..], Vec::as_slice);
                self.render_row(row, indices, start + offset == self.state.cursor)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
