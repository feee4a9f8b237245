//! Help bar widget for displaying keybind hints

use crate::selection::SelectionMode;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "^S")
    pub key: String,
    /// Action description (e.g., "choose", "apply")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Default hints for a selection mode
    #[must_use]
    pub fn hints_for(mode: SelectionMode) -> Vec<KeyHint> {
        match mode {
            SelectionMode::Single => vec![
                KeyHint::new("↑/↓", "navigate"),
                KeyHint::new("Enter", "choose"),
                KeyHint::new("Esc", "close"),
                KeyHint::new("F1", "help"),
            ],
            SelectionMode::Multi => vec![
                KeyHint::new("Enter", "toggle"),
                KeyHint::new("^A", "all"),
                KeyHint::new("^S", "apply"),
                KeyHint::new("Esc", "cancel"),
                KeyHint::new("F1", "help"),
            ],
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.muted()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.accent()));
            spans.push(Span::styled(":", self.theme.muted()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_hints_mention_apply() {
        let hints = HelpBar::hints_for(SelectionMode::Multi);
        assert!(hints.iter().any(|h| h.action == "apply"));
        assert!(!HelpBar::hints_for(SelectionMode::Single)
            .iter()
            .any(|h| h.action == "apply"));
    }

    #[test]
    fn test_renders_hints() {
        let theme = Theme::default();
        let hints = vec![KeyHint::new("Enter", "choose"), KeyHint::new("Esc", "close")];
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        HelpBar::new(&hints, &theme).render(area, &mut buf);

        let line: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(line.trim_end(), "Enter:choose  Esc:close");
    }
}
