//! Ratatui picker implementation
//!
//! Draws the selection modal centered over a cleared screen and runs the
//! event loop until the modal is committed or dismissed. The TUI is drawn
//! on stderr so stdout stays free for the committed values.

use super::events::poll_and_handle;
use super::highlight::MatchHighlighter;
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{
    HelpBar, HelpOverlay, ItemList, ModalFrame, SearchBar, SelectAllBar, StatusBar,
};
use crate::filter::DisplayRow;
use crate::ui::error::{Result, UiError};
use crate::ui::traits::{Picker, PickerConfig};
use crate::ui::types::PickerResult;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use std::io::{self, Stderr};
use std::time::Duration;

/// Ratatui-based picker implementation
pub struct RatatuiPicker {
    theme: Theme,
}

impl RatatuiPicker {
    /// Create a new ratatui picker
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stderr);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        config: PickerConfig,
    ) -> Result<PickerResult> {
        let mut state = AppState::new(config);
        let mut highlighter = MatchHighlighter::new();

        while !state.should_exit {
            terminal.draw(|frame| render(frame, &mut state, &self.theme, &mut highlighter))?;
            poll_and_handle(&mut state, Duration::from_millis(50))?;
        }

        Ok(state.result.unwrap_or_else(PickerResult::aborted))
    }
}

impl Default for RatatuiPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for RatatuiPicker {
    fn run(&self, config: PickerConfig) -> Result<PickerResult> {
        if config.max_query_len == 0 {
            return Err(UiError::InvalidConfig(
                "max_query_len must be at least 1".to_string(),
            ));
        }

        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, config);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

/// Match positions for the rows currently on screen
fn visible_highlights(state: &AppState, highlighter: &mut MatchHighlighter) -> Vec<Vec<u32>> {
    let rows = state.modal.rows();
    let start = state.scroll_offset.min(rows.len());
    let end = (start + state.visible_height).min(rows.len());

    rows[start..end]
        .iter()
        .map(|row: &DisplayRow| {
            if row.is_create() {
                Vec::new()
            } else {
                highlighter.indices(&row.label, &state.query)
            }
        })
        .collect()
}

/// Render the modal and any overlay
pub fn render(
    frame: &mut Frame,
    state: &mut AppState,
    theme: &Theme,
    highlighter: &mut MatchHighlighter,
) {
    let screen = frame.area();
    let modal_area = ModalFrame::area(screen);
    state.modal_area = modal_area;
    state.close_area = ModalFrame::close_area(modal_area);
    frame.render_widget(ModalFrame::new(state.modal.header(), theme), modal_area);

    let [search_area, select_all_area, list_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(3), // Search bar
        Constraint::Length(1), // Select-all / current value
        Constraint::Min(1),    // Rows
        Constraint::Length(1), // Status
        Constraint::Length(1), // Help bar
    ])
    .areas(ModalFrame::inner(modal_area));

    state.list_area = list_area;
    state.visible_height = usize::from(list_area.height).max(1);
    state.adjust_scroll();

    frame.render_widget(
        SearchBar::new(&state.query, state.query_cursor, state.max_query_len, theme),
        search_area,
    );
    frame.render_widget(SelectAllBar::new(state, theme), select_all_area);

    let highlights = visible_highlights(state, highlighter);
    frame.render_widget(
        ItemList::new(state, theme).with_highlights(&highlights),
        list_area,
    );

    let mode = state.selection_mode();
    let message = state.status.latest_message();
    frame.render_widget(StatusBar::new(message.as_ref(), theme, mode), status_area);

    let hints = HelpBar::hints_for(mode);
    frame.render_widget(HelpBar::new(&hints, theme), help_area);

    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(theme, mode), screen);
    }
}
