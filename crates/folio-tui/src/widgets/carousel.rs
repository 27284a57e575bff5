//! Horizontally scrolling slide track.
//!
//! Slides sit side by side on a virtual strip, `slide_width` columns each.
//! The strip is shifted left by `offset` columns and clipped to the track, so
//! a slide that is half scrolled out is drawn half.

use folio_core::Project;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::theme::Palette;

use super::SlideCard;

pub struct Carousel<'a> {
    projects: &'a [&'a Project],
    slide_width: u16,
    offset: u32,
    active: Option<usize>,
    palette: &'a Palette,
}

impl<'a> Carousel<'a> {
    pub fn new(projects: &'a [&'a Project], slide_width: u16, palette: &'a Palette) -> Self {
        Self {
            projects,
            slide_width: slide_width.max(1),
            offset: 0,
            active: None,
            palette,
        }
    }

    /// Columns the strip is scrolled by
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Slide drawn with a highlighted border
    pub fn active(mut self, active: Option<usize>) -> Self {
        self.active = active;
        self
    }

    /// Visible part of every slide that intersects the track
    pub fn slide_areas(&self, track: Rect) -> Vec<(usize, Rect)> {
        let width = i64::from(self.slide_width);
        let offset = i64::from(self.offset);
        let track_width = i64::from(track.width);

        (0..self.projects.len())
            .filter_map(|index| {
                let start = index as i64 * width - offset;
                let end = start + width;
                let visible_start = start.max(0);
                let visible_end = end.min(track_width);
                (visible_start < visible_end).then(|| {
                    (
                        index,
                        Rect::new(
                            track.x + visible_start as u16,
                            track.y,
                            (visible_end - visible_start) as u16,
                            track.height,
                        ),
                    )
                })
            })
            .collect()
    }
}

impl Widget for Carousel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let card_width = if self.slide_width > 2 {
            self.slide_width - 1
        } else {
            self.slide_width
        };

        for (index, visible) in self.slide_areas(area) {
            let Some(project) = self.projects.get(index) else {
                continue;
            };

            let strip_area = Rect::new(0, 0, self.slide_width, area.height);
            let mut strip = Buffer::empty(strip_area);
            SlideCard::new(project, self.palette)
                .active(self.active == Some(index))
                .render(Rect::new(0, 0, card_width, area.height), &mut strip);

            // Column of the strip that lands on the first visible column
            let slide_start = index as i64 * i64::from(self.slide_width) - i64::from(self.offset);
            let skip = (i64::from(visible.x - area.x) - slide_start).max(0) as u16;

            for dy in 0..visible.height {
                for dx in 0..visible.width {
                    if let (Some(src), Some(dst)) = (
                        strip.cell((skip + dx, dy)),
                        buf.cell_mut((visible.x + dx, visible.y + dy)),
                    ) {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}
