//! Select-all bar widget
//!
//! In multi-select mode this shows the tri-state select-all checkbox for
//! the visible rows. In single-select mode it shows the current value.

use crate::selection::{SelectAllState, SelectionController};
use crate::ui::ratatui_adapter::state::AppState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line bar above the item list
pub struct SelectAllBar<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SelectAllBar<'a> {
    /// Create a new select-all bar
    #[must_use]
    pub const fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn left_line(&self) -> Line<'static> {
        let modal = &self.state.modal;
        match modal.select_all_state() {
            Some(select_all) => {
                let (marker, style) = match select_all {
                    SelectAllState::All => ("[x]", self.theme.ticked()),
                    SelectAllState::Partial => ("[-]", self.theme.ticked()),
                    SelectAllState::None => ("[ ]", self.theme.muted()),
                };
                let label_style = if modal.rows().is_empty() {
                    self.theme.muted()
                } else {
                    self.theme.plain()
                };
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(marker, style),
                    Span::raw(" "),
                    Span::styled("Select all", label_style),
                ])
            }
            None => {
                let current = match modal.controller() {
                    SelectionController::Single(single) => {
                        single.current().map(str::to_string)
                    }
                    SelectionController::Multi(_) => None,
                };
                Line::from(vec![
                    Span::styled("  Current: ", self.theme.muted()),
                    current.map_or_else(
                        || Span::styled("none", self.theme.muted()),
                        |value| Span::styled(value, self.theme.ticked()),
                    ),
                ])
            }
        }
    }

    fn right_text(&self) -> String {
        let modal = &self.state.modal;
        let shown = modal.rows().len();
        let total = modal.options().len();
        if modal.mode().is_multi() {
            format!("{} selected · {shown}/{total} shown ", modal.selected_count())
        } else {
            format!("{shown}/{total} shown ")
        }
    }
}

impl Widget for SelectAllBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let right = self.right_text();
        let right_width = (right.chars().count() as u16).min(area.width);
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

        Paragraph::new(self.left_line()).render(left_area, buf);
        Paragraph::new(Span::styled(right, self.theme.muted())).render(right_area, buf);
    }
}
