//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for running a picker
//! session and reporting messages. The selection logic itself lives in
//! [`crate::modal`]; a backend only has to render it and translate input
//! into modal interactions.
//!
//! # Core Traits
//!
//! - **`Picker`** - Runs one modal presentation and returns the commit
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      CLI (pick / filter / config)       │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (Picker, OutputWriter)                 │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Test doubles  │  │ TUI Adapter       │
//! │ - MockPicker  │  │ - RatatuiPicker   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Picker
//!
//! ```no_run
//! use picklist::ui::{Picker, PickerConfig, PickerResult, Result};
//!
//! struct FirstRowPicker;
//!
//! impl Picker for FirstRowPicker {
//!     fn run(&self, config: PickerConfig) -> Result<PickerResult> {
//!         Ok(config
//!             .options
//!             .first()
//!             .map_or_else(PickerResult::aborted, |o| PickerResult::committed(vec![o.clone()])))
//!     }
//! }
//! ```
//!
//! ## Status Line Messages
//!
//! ```
//! use picklist::ui::output::{MessageLevel, OutputWriter, StatusBarWriter};
//!
//! let status = StatusBarWriter::new();
//! status.warning("Query limit reached (50 characters)");
//! status.warning("Query limit reached (50 characters)");
//!
//! let shown = status.latest_message().unwrap();
//! assert_eq!(shown.level, MessageLevel::Warning);
//! assert_eq!(shown.repeats, 2);
//! ```

mod error;
mod traits;
mod types;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StatusMessage, StdoutWriter};
pub use ratatui_adapter::RatatuiPicker;
pub use traits::{Picker, PickerConfig};
pub use types::{PickerLabels, PickerResult};
