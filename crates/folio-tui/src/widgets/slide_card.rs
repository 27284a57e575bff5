//! A single project slide

use folio_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

pub const NO_PREVIEW: &str = "▨ no preview";

pub struct SlideCard<'a> {
    project: &'a Project,
    palette: &'a Palette,
    active: bool,
}

impl<'a> SlideCard<'a> {
    pub fn new(project: &'a Project, palette: &'a Palette) -> Self {
        Self {
            project,
            palette,
            active: false,
        }
    }

    /// Highlight the border (active slide of a focused carousel)
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Widget for SlideCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let project = self.project;
        let block = styles::card_block(p, self.active);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut y = inner.y;
        let bottom = inner.bottom();

        // Image strip
        let image = match &project.image {
            Some(url) => Line::from(vec![
                Span::styled("▨ ", styles::accent(p)),
                Span::styled(url.as_str(), styles::text_muted(p)),
            ]),
            None => Line::from(Span::styled(NO_PREVIEW, styles::text_muted(p)))
                .alignment(Alignment::Center),
        };
        Paragraph::new(image).render(Rect::new(inner.x, y, inner.width, 1), buf);
        y += 1;

        // Title with the year pinned right
        if y < bottom {
            let year = project.year.map(|year| year.to_string()).unwrap_or_default();
            let year_width = year.width() as u16;
            let title_width = inner.width.saturating_sub(year_width + 1);
            buf.set_span(
                inner.x,
                y,
                &Span::styled(project.title.as_str(), styles::heading(p)),
                title_width,
            );
            if year_width > 0 && year_width < inner.width {
                buf.set_span(
                    inner.right() - year_width,
                    y,
                    &Span::styled(year, styles::text_muted(p)),
                    year_width,
                );
            }
            y += 1;
        }

        // Tags on the last row, description fills the middle
        let has_tags = !project.tags().is_empty();
        let tag_row = if has_tags && y < bottom {
            Some(bottom - 1)
        } else {
            None
        };
        let desc_bottom = tag_row.unwrap_or(bottom);
        if y < desc_bottom {
            Paragraph::new(Span::styled(
                project.description.as_str(),
                styles::text_secondary(p),
            ))
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, y, inner.width, desc_bottom - y), buf);
        }

        if let Some(row) = tag_row {
            let mut spans = Vec::new();
            for (i, tag) in project.tags().iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {} ", tag), styles::badge(p)));
            }
            buf.set_line(inner.x, row, &Line::from(spans), inner.width);
        }
    }
}
