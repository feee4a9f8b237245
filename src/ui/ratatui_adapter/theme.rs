//! Picker palettes
//!
//! A [`Theme`] is a handful of colors; widgets ask it for a style by the
//! role a cell plays (cursor row, marker, matched character) rather than by
//! color.

use crate::config::ThemeName;
use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by the picker widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Cursor marker, search box border, key names
    pub primary: Color,
    /// Row under the cursor
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    /// Characters matching the query
    pub matched: Color,
    /// Ticked markers and the current value
    pub checked: Color,
    /// Suffix of the synthesized "add new" row
    pub create: Color,
    /// Borders, placeholders, unticked markers
    pub muted: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for dark terminal backgrounds
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            cursor_bg: Color::Blue,
            cursor_fg: Color::White,
            matched: Color::Yellow,
            checked: Color::Green,
            create: Color::Magenta,
            muted: Color::DarkGray,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Palette for light terminal backgrounds
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            cursor_bg: Color::LightCyan,
            cursor_fg: Color::Black,
            matched: Color::Red,
            checked: Color::Green,
            create: Color::Magenta,
            muted: Color::Gray,
            warning: Color::LightRed,
            error: Color::Red,
        }
    }

    /// Palette selected in the config file
    #[must_use]
    pub const fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// Plain text
    #[must_use]
    pub fn plain(&self) -> Style {
        Style::default()
    }

    #[must_use]
    pub fn cursor_row(&self) -> Style {
        Style::default()
            .bg(self.cursor_bg)
            .fg(self.cursor_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn accent(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Matched characters, layered over the row style
    #[must_use]
    pub fn matched(&self) -> Style {
        Style::default()
            .fg(self.matched)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn ticked(&self) -> Style {
        Style::default().fg(self.checked).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn create_suffix(&self) -> Style {
        Style::default().fg(self.create).add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn border(&self) -> Style {
        self.muted()
    }

    #[must_use]
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Status line text for a message of `level`
    #[must_use]
    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Normal => self.plain(),
            MessageLevel::Info => Style::default().fg(self.primary),
            MessageLevel::Success => Style::default().fg(self.checked),
            MessageLevel::Warning => self.warning(),
            MessageLevel::Error => Style::default().fg(self.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_palettes() {
        assert_eq!(Theme::named(ThemeName::Dark), Theme::default());
        assert_eq!(Theme::named(ThemeName::Light), Theme::light());
        assert_ne!(Theme::light().cursor_bg, Theme::dark().cursor_bg);
    }

    #[test]
    fn test_message_levels_are_distinct() {
        let theme = Theme::dark();
        assert_eq!(theme.message(MessageLevel::Warning), theme.warning());
        assert_ne!(
            theme.message(MessageLevel::Error),
            theme.message(MessageLevel::Success)
        );
        assert_eq!(theme.message(MessageLevel::Normal), Style::default());
    }

    #[test]
    fn test_matched_layers_over_cursor_row() {
        let theme = Theme::dark();
        let style = theme.cursor_row().patch(theme.matched());
        assert_eq!(style.bg, Some(theme.cursor_bg));
        assert_eq!(style.fg, Some(theme.matched));
    }
}
