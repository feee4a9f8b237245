//! User-facing messages
//!
//! The CLI reports through [`StdoutWriter`]: results on stdout so they can
//! be piped, notes on stderr. Inside the picker the same calls land in a
//! [`StatusBarWriter`], whose newest entry is drawn on the modal's status
//! line.

use colored::Colorize;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Severity of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Info,
    Success,
    Warning,
    Error,
}

/// Sink for picklist's messages
///
/// # Examples
///
/// ```no_run
/// use picklist::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("Petron");
/// output.success("1 selected");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Emit a result line (a committed value, a filtered row, a setting)
    fn write(&self, message: &str);

    /// Secondary note, such as how many rows a query kept
    fn info(&self, message: &str);

    fn success(&self, message: &str);

    fn warning(&self, message: &str);

    fn error(&self, message: &str);
}

/// Terminal writer for the CLI
///
/// Quiet mode drops every note except errors; results are always printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// The stderr line for a note, or `None` when quiet mode drops it
    ///
    /// ```
    /// use picklist::ui::output::{MessageLevel, StdoutWriter};
    ///
    /// let quiet = StdoutWriter::new(true);
    /// assert!(quiet.notice(MessageLevel::Info, "3 of 8 shown").is_none());
    /// assert!(quiet.notice(MessageLevel::Error, "no options").is_some());
    /// ```
    #[must_use]
    pub fn notice(&self, level: MessageLevel, message: &str) -> Option<String> {
        if self.quiet && level != MessageLevel::Error {
            return None;
        }
        let line = match level {
            MessageLevel::Normal => message.to_string(),
            MessageLevel::Info => message.dimmed().to_string(),
            MessageLevel::Success => format!("{} {message}", "✓".green()),
            MessageLevel::Warning => format!("{} {message}", "⚠".yellow()),
            MessageLevel::Error => format!("{} {message}", "✗".red()),
        };
        Some(line)
    }

    fn note(&self, level: MessageLevel, message: &str) {
        if let Some(line) = self.notice(level, message) {
            eprintln!("{line}");
        }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn info(&self, message: &str) {
        self.note(MessageLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.note(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.note(MessageLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.note(MessageLevel::Error, message);
    }
}

/// One entry on the picker's status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    /// Times the same message was reported back to back
    pub repeats: usize,
}

/// Status line of the picker
///
/// Only the newest message is kept. Reporting the message that is already
/// showing bumps its repeat count, so holding a key against the query limit
/// does not look frozen. Messages disappear once `ttl` has passed since they
/// were last reported.
///
/// ```
/// use picklist::ui::output::{OutputWriter, StatusBarWriter};
///
/// let status = StatusBarWriter::new();
/// status.info("2 selected");
/// status.info("3 selected");
/// assert_eq!(status.latest_message().unwrap().text, "3 selected");
/// ```
#[derive(Debug)]
pub struct StatusBarWriter {
    current: Mutex<Option<(StatusMessage, Instant)>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// How long a message stays on the status line
    pub const DEFAULT_TTL: Duration = Duration::from_secs(4);

    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Self::DEFAULT_TTL)
    }

    #[must_use]
    pub const fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Mutex::new(None),
            ttl,
        }
    }

    /// The message to draw, if one is still live
    #[must_use]
    pub fn latest_message(&self) -> Option<StatusMessage> {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        current
            .as_ref()
            .filter(|(_, reported)| reported.elapsed() < self.ttl)
            .map(|(message, _)| message.clone())
    }

    fn report(&self, level: MessageLevel, text: &str) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        match current.as_mut() {
            Some((message, reported))
                if now.duration_since(*reported) < self.ttl
                    && message.level == level
                    && message.text == text =>
            {
                message.repeats += 1;
                *reported = now;
            }
            _ => {
                let message = StatusMessage {
                    level,
                    text: text.to_string(),
                    repeats: 1,
                };
                *current = Some((message, now));
            }
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.report(MessageLevel::Normal, message);
    }

    fn info(&self, message: &str) {
        self.report(MessageLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.report(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(MessageLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(MessageLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_keeps_only_errors() {
        let quiet = StdoutWriter::new(true);
        assert_eq!(quiet.notice(MessageLevel::Info, "3 of 8 shown"), None);
        assert_eq!(quiet.notice(MessageLevel::Success, "2 selected"), None);
        assert_eq!(quiet.notice(MessageLevel::Warning, "extra value ignored"), None);

        let error = quiet.notice(MessageLevel::Error, "no options to pick from").unwrap();
        assert!(error.contains("no options to pick from"));
    }

    #[test]
    fn test_loud_writer_marks_notes() {
        let output = StdoutWriter::default();
        let success = output.notice(MessageLevel::Success, "2 selected").unwrap();
        assert!(success.contains('✓'));
        assert!(success.ends_with("2 selected"));

        let info = output.notice(MessageLevel::Info, "3 of 8 shown").unwrap();
        assert!(info.contains("3 of 8 shown"));
    }

    #[test]
    fn test_status_shows_newest_message() {
        let status = StatusBarWriter::new();
        assert_eq!(status.latest_message(), None);

        status.info("1 selected");
        status.warning("Query limit reached (5 characters)");

        let latest = status.latest_message().unwrap();
        assert_eq!(latest.level, MessageLevel::Warning);
        assert_eq!(latest.text, "Query limit reached (5 characters)");
        assert_eq!(latest.repeats, 1);
    }

    #[test]
    fn test_status_counts_repeats() {
        let status = StatusBarWriter::new();
        for _ in 0..3 {
            status.warning("Query limit reached (5 characters)");
        }
        assert_eq!(status.latest_message().unwrap().repeats, 3);

        // Same text at another level starts over
        status.info("Query limit reached (5 characters)");
        let latest = status.latest_message().unwrap();
        assert_eq!(latest.level, MessageLevel::Info);
        assert_eq!(latest.repeats, 1);
    }

    #[test]
    fn test_status_message_expires() {
        let status = StatusBarWriter::with_ttl(Duration::from_millis(30));
        status.success("Applied");
        assert!(status.latest_message().is_some());

        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(status.latest_message(), None);

        // An expired message does not keep counting
        status.success("Applied");
        assert_eq!(status.latest_message().unwrap().repeats, 1);
    }
}
