//! "CURRENTLY" card

use folio_core::CURRENT_ROLE;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

pub struct Profile<'a> {
    palette: &'a Palette,
}

impl<'a> Profile<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for Profile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block =
            styles::card_block(p, false).title(Span::styled(" CURRENTLY ", styles::accent_bold(p)));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled(CURRENT_ROLE.title, styles::heading(p)),
                Span::styled("  ·  ", styles::text_muted(p)),
                Span::styled(CURRENT_ROLE.period, styles::text_secondary(p)),
                Span::styled("  ·  ", styles::text_muted(p)),
                Span::styled(CURRENT_ROLE.location, styles::text_secondary(p)),
            ]),
            Line::from(Span::styled(CURRENT_ROLE.summary, styles::text_primary(p))),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
