//! Shown in place of the carousel when no project is visible.
//!
//! Separates "still loading" and "load failed" from "nothing matches".

use folio_core::LoadStatus;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

use super::Button;

pub const CLEAR_FILTERS_LABEL: &str = "Clear All Filters";

pub struct EmptyState<'a> {
    status: &'a LoadStatus,
    has_filters: bool,
    palette: &'a Palette,
}

impl<'a> EmptyState<'a> {
    pub fn new(status: &'a LoadStatus, has_filters: bool, palette: &'a Palette) -> Self {
        Self {
            status,
            has_filters,
            palette,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let p = self.palette;
        match self.status {
            LoadStatus::Loading => vec![Line::from(Span::styled(
                "Loading projects…",
                styles::text_secondary(p),
            ))],
            LoadStatus::Failed { reason } => vec![
                Line::from(Span::styled("Could not load projects", styles::danger(p))),
                Line::from(Span::styled(reason.clone(), styles::text_muted(p))),
            ],
            LoadStatus::Loaded => vec![
                Line::from(Span::styled("No projects found", styles::heading(p))),
                Line::from(Span::styled(
                    "No projects match your current filters. Try adjusting your search criteria.",
                    styles::text_secondary(p),
                )),
            ],
        }
    }

    fn shows_clear_button(&self) -> bool {
        self.has_filters && matches!(self.status, LoadStatus::Loaded)
    }

    /// First row of the text block, keeping text and button centred together
    fn top(&self, area: Rect) -> u16 {
        let rows = self.lines().len() as u16 + if self.shows_clear_button() { 2 } else { 0 };
        area.y + area.height.saturating_sub(rows) / 2
    }

    /// Where "Clear All Filters" is drawn, if it is shown at all
    pub fn clear_button_area(&self, area: Rect) -> Option<Rect> {
        if !self.shows_clear_button() {
            return None;
        }
        let y = self.top(area) + self.lines().len() as u16 + 1;
        if y >= area.bottom() {
            return None;
        }
        let width = Button::width_of(CLEAR_FILTERS_LABEL).min(area.width);
        let x = area.x + (area.width - width) / 2;
        Some(Rect::new(x, y, width, 1))
    }
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let top = self.top(area);
        let lines = self.lines();
        let text_area = Rect::new(area.x, top, area.width, area.bottom().saturating_sub(top));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        if let Some(button) = self.clear_button_area(area) {
            Button::new(CLEAR_FILTERS_LABEL, styles::button(self.palette, false))
                .render(button, buf);
        }
    }
}
