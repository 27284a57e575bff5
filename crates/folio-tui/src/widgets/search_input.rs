//! Free-text filter input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{styles, Palette};

pub const PLACEHOLDER: &str = "Filter...";
const PROMPT: &str = "⌕ ";

pub struct SearchInput<'a> {
    text: &'a str,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    pub fn new(text: &'a str, palette: &'a Palette) -> Self {
        Self {
            text,
            focused: false,
            palette,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// The longest suffix of `text` that fits in `width` columns
fn tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = i;
    }
    &text[start..]
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let p = self.palette;
        let row = Rect::new(area.x, area.y, area.width, 1);
        let field = styles::badge(p);
        buf.set_style(row, field);

        let mut spans = vec![Span::styled(PROMPT, field.fg(p.accent))];
        if self.text.is_empty() && !self.focused {
            spans.push(Span::styled(PLACEHOLDER, field.fg(p.text_muted)));
        } else {
            // Leave room for the prompt and the cursor
            let room = (area.width as usize).saturating_sub(3);
            spans.push(Span::styled(tail(self.text, room), field.fg(p.text_primary)));
        }
        if self.focused {
            spans.push(Span::styled(
                "_",
                field.fg(p.accent).add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        buf.set_line(row.x, row.y, &Line::from(spans), row.width);
    }
}
