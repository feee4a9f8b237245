//! Ratatui-based picker adapter
//!
//! This module provides an implementation of the `Picker` trait using
//! ratatui (TUI framework) and crossterm (terminal events). Filtering and
//! selection rules come from [`crate::modal::SelectionModal`]; this layer
//! owns the query text, draws the modal, and turns keys and clicks into
//! modal interactions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiPicker                     │
//! │  (implements Picker trait)                  │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   Nucleo   │ │  Ratatui  │ │ Crossterm │
//! │(highlight) │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Features
//!
//! - **Centered modal** over a cleared backdrop; clicking the backdrop closes it
//! - **Match highlighting** of the query within each label
//! - **Status bar** for messages
//! - **Help overlay** (F1)

mod events;
mod highlight;
mod picker;
mod state;
mod theme;
pub mod widgets;

pub use events::EventResult;
pub use highlight::MatchHighlighter;
pub use picker::{RatatuiPicker, render};
pub use state::{AppState, Mode};
pub use theme::Theme;
