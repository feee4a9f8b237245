//! Event handling for the ratatui TUI
//!
//! Handles keyboard and mouse events, mapping them to modal interactions.

use super::state::{AppState, Mode};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Query changed and the rows were refiltered
    QueryChanged,
    /// The modal was committed or dismissed
    Exit,
    /// No action taken
    Ignored,
}

fn after_interaction(state: &AppState) -> EventResult {
    if state.should_exit {
        EventResult::Exit
    } else {
        EventResult::Continue
    }
}

fn query_result(changed: bool) -> EventResult {
    if changed {
        EventResult::QueryChanged
    } else {
        EventResult::Ignored
    }
}

/// Handle events in normal mode
pub fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Dismiss
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.dismiss();
            EventResult::Exit
        }

        // Tap / apply
        (KeyCode::Enter, _) => {
            state.tap_current();
            after_interaction(state)
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            state.apply();
            after_interaction(state)
        }
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
            state.toggle_select_all();
            EventResult::Continue
        }

        // Multi-select toggling while moving
        (KeyCode::Tab, _) if state.selection_mode().is_multi() => {
            state.tap_current();
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) if state.selection_mode().is_multi() => {
            state.tap_current();
            state.cursor_up();
            EventResult::Continue
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Help overlay
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            query_result(state.query_push(c))
        }
        (KeyCode::Backspace, _) => query_result(state.query_backspace()),
        (KeyCode::Delete, _) => query_result(state.query_delete()),
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => query_result(state.query_clear()),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => query_result(state.query_delete_word()),

        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
pub fn handle_help_mode(state: &mut AppState, _key: KeyEvent) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Dispatch a key event to the handler for the current mode
///
/// Release reports are dropped so a key acts once per press.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Help => handle_help_mode(state, key),
    }
}

/// Handle mouse events
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if state.mode == Mode::Help {
                state.mode = Mode::Normal;
                return EventResult::Continue;
            }
            if let Some(index) = state.row_at(mouse.column, mouse.row) {
                state.tap_row(index);
                after_interaction(state)
            } else if state.is_close_button(mouse.column, mouse.row)
                || state.is_backdrop(mouse.column, mouse.row)
            {
                state.dismiss();
                EventResult::Exit
            } else {
                EventResult::Ignored
            }
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
