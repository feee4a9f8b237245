//! Picklist - a filterable selection modal for the terminal
//!
//! This library provides the state machine behind a list picker with two
//! interaction modes: single-select with free-text "add new" entries, and
//! multi-select with Apply/Cancel semantics. A ratatui front end and a CLI
//! are built on top of it.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod filter;
pub mod modal;
pub mod selection;
pub mod source;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PicklistError {
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Option source error
    #[error("Source error: {0}")]
    SourceError(#[from] source::SourceError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
