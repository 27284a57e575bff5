//! One active filter value with a remove affordance.
//!
//! The badge only draws itself; removal is wired up by the caller through the
//! area returned from [`FilterBadge::remove_area`].

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

const REMOVE: &str = "×";

pub struct FilterBadge<'a> {
    label: &'a str,
    palette: &'a Palette,
}

impl<'a> FilterBadge<'a> {
    pub fn new(label: &'a str, palette: &'a Palette) -> Self {
        Self { label, palette }
    }

    /// ` label × `
    pub fn width(&self) -> u16 {
        (self.label.width() + REMOVE.width() + 3) as u16
    }

    /// The `×` cell plus its padding, for a badge drawn at `area`
    pub fn remove_area(&self, area: Rect) -> Rect {
        let width = (REMOVE.width() as u16 + 2).min(area.width);
        Rect::new(area.right().saturating_sub(width), area.y, width, area.height.min(1))
    }
}

impl Widget for FilterBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.label), styles::badge(p)),
            Span::styled(REMOVE, styles::badge(p).fg(p.danger)),
            Span::styled(" ", styles::badge(p)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
