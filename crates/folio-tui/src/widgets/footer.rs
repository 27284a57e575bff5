//! Page footer with the socials toggle

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::Span,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

use super::Button;

pub const SOCIALS_LABEL: &str = "my socials";

/// Key hints shown at the right edge when there is room
const HINTS: &str = "Tab focus · ←/→ slides · t theme · q quit";

/// Where the socials toggle sits inside the footer
pub fn socials_button_area(area: Rect) -> Rect {
    let inner = area.inner(Margin::new(1, 1));
    let width = Button::width_of(SOCIALS_LABEL).min(inner.width);
    Rect::new(inner.x, inner.y, width, inner.height.min(1))
}

pub struct Footer<'a> {
    palette: &'a Palette,
    focused: bool,
}

impl<'a> Footer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        styles::card_block(p, false).render(area, buf);

        let button = socials_button_area(area);
        if button.height == 0 {
            return;
        }
        Button::new(SOCIALS_LABEL, styles::button(p, self.focused)).render(button, buf);

        let inner = area.inner(Margin::new(1, 1));
        let width = HINTS.width() as u16;
        if inner.width > button.width + width + 1 {
            buf.set_span(
                inner.right() - width,
                inner.y,
                &Span::styled(HINTS, styles::text_muted(p)),
                width,
            );
        }
    }
}
