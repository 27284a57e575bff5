//! Technology grid

use folio_core::TECH_STACK;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::layout::stack_columns;
use crate::theme::{styles, Palette};

pub struct Stacks<'a> {
    palette: &'a Palette,
}

impl<'a> Stacks<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for Stacks<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block =
            styles::card_block(p, false).title(Span::styled(" STACKS ", styles::accent_bold(p)));
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = stack_columns(area.width) as usize;
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]);

        for (row_index, row) in TECH_STACK.chunks(columns).enumerate() {
            let y = inner.y + row_index as u16;
            if y >= inner.bottom() {
                break;
            }
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            for (name, cell) in row.iter().zip(cells.split(row_area).iter()) {
                Paragraph::new(Span::styled(format!("▪ {}", name), styles::text_primary(p)))
                    .render(*cell, buf);
            }
        }
    }
}
