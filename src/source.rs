//! Option sources
//!
//! Reads the option universe for a picker from a file or stdin. Input is
//! either one label per line or, when it starts with `[`, a JSON array of
//! strings.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading options
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the input failed
    #[error("Failed to read options: {0}")]
    Io(#[from] io::Error),

    /// Input looked like JSON but was not a string array
    #[error("Invalid JSON option list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse options from text
///
/// Blank lines are skipped; order and duplicates are kept.
///
/// # Errors
///
/// Returns `SourceError::Json` if the text starts with `[` but is not a
/// JSON array of strings.
pub fn parse_options(text: &str) -> Result<Vec<String>, SourceError> {
    if text.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(text)?);
    }

    Ok(text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Read options from any reader
///
/// # Errors
///
/// Returns an error if reading fails or the content cannot be parsed.
pub fn read_options(mut reader: impl Read) -> Result<Vec<String>, SourceError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_options(&text)
}

/// Read options from `path`, or from stdin when `path` is `None` or `-`
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read or parsed.
pub fn load_options(path: Option<&Path>) -> Result<Vec<String>, SourceError> {
    match path {
        Some(path) if path != Path::new("-") => parse_options(&fs::read_to_string(path)?),
        _ => read_options(io::stdin().lock()),
    }
}
