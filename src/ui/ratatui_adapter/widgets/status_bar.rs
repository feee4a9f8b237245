//! Status bar widget for displaying messages

use crate::selection::SelectionMode;
use crate::ui::output::{MessageLevel, StatusMessage};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar widget that displays the latest message and the picker mode
pub struct StatusBar<'a> {
    /// Most recent message, if any is still live
    message: Option<&'a StatusMessage>,
    /// Theme for styling
    theme: &'a Theme,
    /// Selection mode shown on the right
    mode: SelectionMode,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        message: Option<&'a StatusMessage>,
        theme: &'a Theme,
        mode: SelectionMode,
    ) -> Self {
        Self {
            message,
            theme,
            mode,
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [message_area, mode_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(9)]).areas(area);

        if let Some(message) = self.message {
            let style = self.theme.message(message.level);
            let mut spans = vec![
                Span::styled(Self::prefix_for_level(message.level), style),
                Span::styled(message.text.as_str(), style),
            ];
            if message.repeats > 1 {
                spans.push(Span::styled(format!(" ×{}", message.repeats), self.theme.muted()));
            }
            Paragraph::new(Line::from(spans)).render(message_area, buf);
        }

        let indicator = match self.mode {
            SelectionMode::Single => "[Single]",
            SelectionMode::Multi => "[Multi]",
        };
        let indicator_style = self.theme.message(MessageLevel::Info).add_modifier(Modifier::DIM);
        Paragraph::new(Line::styled(indicator, indicator_style))
            .alignment(Alignment::Right)
            .render(mode_area, buf);
    }
}
