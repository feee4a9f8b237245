//! Application state for the ratatui TUI
//!
//! `AppState` plays the caller's role in the modal contract: it owns the
//! query text and the committed value, feeds them to the
//! [`SelectionModal`] as props, and reacts to the events the modal raises.
//! It also keeps the purely visual bits (cursor, scroll, help overlay).

use crate::filter::DisplayRow;
use crate::modal::{ModalEvent, SelectionModal};
use crate::selection::SelectionMode;
use crate::ui::output::{OutputWriter, StatusBarWriter};
use crate::ui::traits::PickerConfig;
use crate::ui::types::{PickerLabels, PickerResult};
use ratatui::layout::{Position, Rect};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal picking mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Application state for the picker
pub struct AppState {
    /// The selection modal being presented
    pub modal: SelectionModal,
    /// Query text (owned here, mirrored into the modal)
    pub query: String,
    /// Cursor position within the query string (byte offset)
    pub query_cursor: usize,
    /// Maximum query length in characters
    pub max_query_len: usize,
    /// Current cursor position in the visible rows
    pub cursor: usize,
    /// Scroll offset for the row list
    pub scroll_offset: usize,
    /// Height of the visible row area (set during render)
    pub visible_height: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Create-row suffix and empty-state text
    pub labels: PickerLabels,
    /// Status bar messages
    pub status: StatusBarWriter,
    /// Whether the picker should exit
    pub should_exit: bool,
    /// Outcome once the modal has been committed or dismissed
    pub result: Option<PickerResult>,
    /// Screen area of the row list (set during render)
    pub list_area: Rect,
    /// Screen area of the modal frame (set during render)
    pub modal_area: Rect,
    /// Screen area of the close hint on the frame border (set during render)
    pub close_area: Rect,
}

impl AppState {
    /// Create state for a picker session and open the modal
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        let max_query_len = config.max_query_len.max(1);
        let query: String = config.query.chars().take(max_query_len).collect();

        let mut modal = SelectionModal::new(config.header, config.options, config.value)
            .with_rules(config.rules);
        modal.set_query(query.clone());
        modal.set_visible(true);

        Self {
            modal,
            query_cursor: query.len(),
            query,
            max_query_len,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 10, // Default, updated during render
            mode: Mode::Normal,
            labels: config.labels,
            status: StatusBarWriter::new(),
            should_exit: false,
            result: None,
            list_area: Rect::default(),
            modal_area: Rect::default(),
            close_area: Rect::default(),
        }
    }

    /// Selection mode of the modal
    #[must_use]
    pub const fn selection_mode(&self) -> SelectionMode {
        self.modal.mode()
    }

    fn row_count(&self) -> usize {
        self.modal.rows().len()
    }

    /// Row under the cursor
    #[must_use]
    pub fn current_row(&self) -> Option<&DisplayRow> {
        self.modal.rows().get(self.cursor)
    }

    // ------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.row_count().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first row
    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last row
    pub fn jump_to_end(&mut self) {
        self.cursor = self.row_count().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    pub fn adjust_scroll(&mut self) {
        let height = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Map a screen position to a visible row index
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.list_area.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.scroll_offset + usize::from(row - self.list_area.y);
        (index < self.row_count()).then_some(index)
    }

    /// Check whether a screen position lies outside the modal frame
    #[must_use]
    pub fn is_backdrop(&self, column: u16, row: u16) -> bool {
        !self.modal_area.contains(Position::new(column, row))
    }

    /// Check whether a screen position lies on the close hint
    #[must_use]
    pub fn is_close_button(&self, column: u16, row: u16) -> bool {
        self.close_area.contains(Position::new(column, row))
    }

    // ------------------------------------------------------------------
    // Query editing
    // ------------------------------------------------------------------

    /// Add a character to the query
    ///
    /// Returns `false` when the query is already at its length limit.
    pub fn query_push(&mut self, c: char) -> bool {
        if self.query.chars().count() >= self.max_query_len {
            self.status
                .warning(&format!("Query limit reached ({} characters)", self.max_query_len));
            return false;
        }
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.report_query();
        true
    }

    /// Remove a character from the query (backspace)
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let prev_char_boundary = self.query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.query.remove(prev_char_boundary);
        self.query_cursor = prev_char_boundary;
        self.report_query();
        true
    }

    /// Delete character under cursor
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.query_cursor);
        self.report_query();
        true
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let trimmed = self.query[..self.query_cursor].trim_end();
        if let Some(last_space) = trimmed.rfind(' ') {
            self.query.drain(last_space + 1..self.query_cursor);
            self.query_cursor = last_space + 1;
        } else {
            self.query.drain(..self.query_cursor);
            self.query_cursor = 0;
        }
        self.report_query();
        true
    }

    /// Move query cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move query cursor right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.query_cursor = 0;
        self.report_query();
        true
    }

    /// Pass the edited query through the modal's query-changed signal
    fn report_query(&mut self) {
        let event = self.modal.edit_query(self.query.clone());
        self.handle_event(event);
    }

    // ------------------------------------------------------------------
    // Modal interactions
    // ------------------------------------------------------------------

    /// Tap the row under the cursor
    pub fn tap_current(&mut self) {
        self.tap_row(self.cursor);
    }

    /// Tap a visible row
    pub fn tap_row(&mut self, index: usize) {
        if index >= self.row_count() {
            return;
        }
        self.cursor = index;
        self.adjust_scroll();
        if let Some(event) = self.modal.tap(index) {
            self.handle_event(event);
        } else if self.selection_mode().is_multi() {
            self.report_pending();
        }
    }

    /// Toggle select-all over the visible rows
    pub fn toggle_select_all(&mut self) {
        if self.modal.toggle_select_all() {
            self.report_pending();
        }
    }

    /// Apply pending edits
    pub fn apply(&mut self) {
        if let Some(event) = self.modal.apply() {
            self.handle_event(event);
        }
    }

    /// Close control, back key or backdrop
    pub fn dismiss(&mut self) {
        let event = self.modal.request_dismiss();
        self.handle_event(event);
    }

    fn report_pending(&self) {
        self.status
            .info(&format!("{} selected", self.modal.selected_count()));
    }

    /// React to a signal from the modal
    pub fn handle_event(&mut self, event: ModalEvent) {
        match event {
            ModalEvent::QueryChanged(text) => {
                if text != self.query {
                    self.query = text;
                    self.query_cursor = self.query.len();
                }
                self.modal.set_query(self.query.clone());
                self.cursor = 0;
                self.scroll_offset = 0;
            }
            ModalEvent::CommitSingle(label) => self.finish(PickerResult::committed(vec![label])),
            ModalEvent::CommitMulti(labels) => self.finish(PickerResult::committed(labels)),
            ModalEvent::DismissRequested => self.finish(PickerResult::aborted()),
        }
    }

    fn finish(&mut self, result: PickerResult) {
        self.modal.set_visible(false);
        self.result = Some(result);
        self.should_exit = true;
    }
}
