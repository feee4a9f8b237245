//! Modal frame widget
//!
//! Clears the backdrop and draws a centered bordered block carrying the
//! modal header and a close hint.

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;
const CLOSE_HINT: &str = " ✕ Esc ";

/// Centered frame that hosts the picker contents
pub struct ModalFrame<'a> {
    /// Header text shown in the title
    header: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> ModalFrame<'a> {
    /// Create a new modal frame
    #[must_use]
    pub const fn new(header: &'a str, theme: &'a Theme) -> Self {
        Self { header, theme }
    }

    /// Area the modal occupies within the screen
    ///
    /// Roughly 60% by 70% of the screen, never smaller than 40x12 unless
    /// the screen itself is smaller.
    #[must_use]
    pub fn area(screen: Rect) -> Rect {
        let width = (screen.width / 10 * 6).max(MIN_WIDTH).min(screen.width);
        let height = (screen.height / 10 * 7).max(MIN_HEIGHT).min(screen.height);
        Self::centered_rect(width, height, screen)
    }

    /// Content area inside the frame borders
    #[must_use]
    pub fn inner(modal_area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(modal_area)
    }

    /// Cells of the close hint on the top border
    ///
    /// The hint is right-aligned inside the border corners. Returns an empty
    /// rect when the frame is too narrow to show it.
    #[must_use]
    pub fn close_area(modal_area: Rect) -> Rect {
        let width = u16::try_from(Line::from(CLOSE_HINT).width()).unwrap_or(u16::MAX);
        if modal_area.width < width + 2 || modal_area.height == 0 {
            return Rect::default();
        }
        let x = modal_area.right() - 1 - width;
        Rect::new(x, modal_area.y, width, 1)
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ModalFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let title = Line::from(Span::styled(
            format!(" {} ", self.header),
            self.theme.plain().add_modifier(Modifier::BOLD),
        ))
        .centered();
        let close = Line::from(Span::styled(CLOSE_HINT, self.theme.muted())).right_aligned();

        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(title)
            .title(close)
            .render(area, buf);
    }
}
