//! Single-line bracketed button

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Span, widgets::Widget};
use unicode_width::UnicodeWidthStr;

/// `[ label ]`, drawn in one style
pub struct Button<'a> {
    label: &'a str,
    style: Style,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, style: Style) -> Self {
        Self { label, style }
    }

    /// Columns needed to draw the whole button
    pub fn width(&self) -> u16 {
        Self::width_of(self.label)
    }

    pub fn width_of(label: &str) -> u16 {
        (label.width() + 4) as u16
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = format!("[ {} ]", self.label);
        buf.set_span(area.x, area.y, &Span::styled(text, self.style), area.width);
    }
}
