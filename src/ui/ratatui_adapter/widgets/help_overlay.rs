//! Help overlay widget for displaying the full keybind reference

use crate::selection::SelectionMode;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
    /// Selection mode, decides which action keys are listed
    mode: SelectionMode,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme, mode: SelectionMode) -> Self {
        Self { theme, mode }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(
            title,
            self.theme.accent().add_modifier(Modifier::UNDERLINED),
        )
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::default(),
            self.section("  Navigation"),
            Line::default(),
            self.help_line("  ↑/↓", "Move cursor"),
            self.help_line("  PgUp/PgDn", "Page up/down"),
            self.help_line("  Home/End", "Jump to start/end"),
            self.help_line("  Wheel", "Scroll"),
            Line::default(),
            self.section("  Search"),
            Line::default(),
            self.help_line("  Type", "Filter options"),
            self.help_line("  Ctrl+U", "Clear query"),
            self.help_line("  Ctrl+W", "Delete word"),
            self.help_line("  ←/→", "Move cursor in query"),
            Line::default(),
            self.section("  Selection"),
            Line::default(),
        ];

        match self.mode {
            SelectionMode::Single => {
                lines.push(self.help_line("  Enter/Click", "Choose option or add new"));
            }
            SelectionMode::Multi => {
                lines.push(self.help_line("  Enter/Click", "Toggle option"));
                lines.push(self.help_line("  TAB", "Toggle and move down"));
                lines.push(self.help_line("  Ctrl+A", "Select all shown"));
                lines.push(self.help_line("  Ctrl+S", "Apply"));
            }
        }
        lines.push(self.help_line("  ESC", "Close without saving"));
        lines.push(self.help_line("  Click ✕", "Close without saving"));

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.muted(),
        ));
        lines.push(Line::default());

        lines
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), self.theme.accent()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_text(overlay: &HelpOverlay<'_>) -> String {
        overlay
            .build_content()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_multi_lists_apply() {
        let theme = Theme::default();
        let text = content_text(&HelpOverlay::new(&theme, SelectionMode::Multi));
        assert!(text.contains("Ctrl+S"));
        assert!(text.contains("Select all shown"));
    }

    #[test]
    fn test_single_omits_multi_keys() {
        let theme = Theme::default();
        let text = content_text(&HelpOverlay::new(&theme, SelectionMode::Single));
        assert!(text.contains("Choose option or add new"));
        assert!(!text.contains("Ctrl+S"));
    }
}
