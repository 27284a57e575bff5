//! Checklist popover for one filter facet.
//!
//! A controlled view: checked state comes from the owner's selection, and
//! toggling or closing is routed back to the owner through hit targets.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

/// Longest list shown before the panel scrolls
const MAX_VISIBLE_ROWS: u16 = 8;
const MIN_WIDTH: u16 = 16;

/// One row of the checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    pub selected: bool,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, selected: bool) -> Self {
        Self {
            label: label.into(),
            selected,
        }
    }
}

/// Text shown when a facet has nothing to choose from
pub fn empty_text(label: &str) -> String {
    format!("No {} available", label.to_lowercase())
}

pub struct FilterDropdown<'a> {
    label: &'a str,
    options: &'a [DropdownOption],
    cursor: usize,
    palette: &'a Palette,
}

impl<'a> FilterDropdown<'a> {
    pub fn new(label: &'a str, options: &'a [DropdownOption], palette: &'a Palette) -> Self {
        Self {
            label,
            options,
            cursor: 0,
            palette,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Panel size including borders
    pub fn size(&self) -> (u16, u16) {
        let widest = self
            .options
            .iter()
            .map(|o| o.label.width() + 4)
            .max()
            .unwrap_or_else(|| empty_text(self.label).width());
        let width = (widest as u16 + 4).max(MIN_WIDTH);
        let rows = (self.options.len() as u16).clamp(1, MAX_VISIBLE_ROWS);
        (width, rows + 2)
    }

    /// Option indices visible in a panel with `rows` inner rows, keeping the
    /// cursor in view
    pub fn visible_range(&self, rows: u16) -> Range<usize> {
        let rows = rows as usize;
        let start = (self.cursor + 1).saturating_sub(rows);
        start..(start + rows).min(self.options.len())
    }

    /// Row area of each visible option, for a panel drawn at `panel`
    pub fn option_areas(&self, panel: Rect) -> Vec<(usize, Rect)> {
        let inner = panel.inner(Margin::new(1, 1));
        self.visible_range(inner.height)
            .enumerate()
            .map(|(row, index)| (index, Rect::new(inner.x, inner.y + row as u16, inner.width, 1)))
            .collect()
    }
}

impl Widget for FilterDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Clear.render(area, buf);
        let block = styles::popup_block(p).title(Span::styled(
            format!(" {} ", self.label),
            styles::accent_bold(p),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.options.is_empty() {
            buf.set_span(
                inner.x,
                inner.y,
                &Span::styled(empty_text(self.label), styles::text_muted(p)),
                inner.width,
            );
            return;
        }

        for (index, row) in self.option_areas(area) {
            let Some(option) = self.options.get(index) else {
                continue;
            };
            let mark = if option.selected { "[✓] " } else { "[ ] " };
            let style = if index == self.cursor {
                styles::menu_cursor(p)
            } else if option.selected {
                styles::accent(p)
            } else {
                styles::text_primary(p)
            };
            buf.set_style(row, style);
            buf.set_line(
                row.x,
                row.y,
                &Line::from(vec![Span::styled(mark, style), Span::styled(&option.label, style)]),
                row.width,
            );
        }
    }
}
