//! Contact and socials popovers

use folio_core::ExternalLink;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

pub struct LinkList<'a> {
    title: &'a str,
    links: &'a [ExternalLink],
    cursor: usize,
    palette: &'a Palette,
}

impl<'a> LinkList<'a> {
    pub fn new(title: &'a str, links: &'a [ExternalLink], palette: &'a Palette) -> Self {
        Self {
            title,
            links,
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
            .links
            .iter()
            .map(|l| l.label.width() + l.value.width() + 3)
            .max()
            .unwrap_or(0)
            .max(self.title.width() + 2);
        (widest as u16 + 2, self.links.len() as u16 + 2)
    }

    /// Row area of each link inside a panel drawn at `panel`
    pub fn link_areas(&self, panel: Rect) -> Vec<(usize, Rect)> {
        let inner = panel.inner(Margin::new(1, 1));
        (0..self.links.len())
            .take(inner.height as usize)
            .map(|i| (i, Rect::new(inner.x, inner.y + i as u16, inner.width, 1)))
            .collect()
    }
}

impl Widget for LinkList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Clear.render(area, buf);
        let block = styles::popup_block(p).title(Span::styled(
            format!(" {} ", self.title),
            styles::accent_bold(p),
        ));
        block.render(area, buf);

        for (index, row) in self.link_areas(area) {
            let link = &self.links[index];
            let (label_style, value_style) = if index == self.cursor {
                (styles::menu_cursor(p), styles::menu_cursor(p))
            } else {
                (styles::text_primary(p), styles::text_muted(p))
            };
            buf.set_style(row, label_style);
            let line = Line::from(vec![
                Span::styled(format!(" {}", link.label), label_style),
                Span::styled(format!("  {}", link.value), value_style),
            ]);
            buf.set_line(row.x, row.y, &line, row.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use folio_core::{CONTACT_LINKS, SOCIAL_LINKS};

    #[test]
    fn test_contact_list_shows_every_entry() {
        let list = LinkList::new("Contact", CONTACT_LINKS, &DARK);
        let (w, h) = list.size();
        assert_eq!(h, 5);

        let mut term = TestTerminal::new();
        term.render_widget(list, Rect::new(0, 0, w, h));
        assert!(term.line_contains(1, "Email"));
        assert!(term.line_contains(1, "dagimw14@gmail.com"));
        assert!(term.line_contains(2, "WhatsApp"));
        assert!(term.line_contains(3, "@cole_j_p"));
    }

    #[test]
    fn test_link_areas_inside_border() {
        let list = LinkList::new("Socials", SOCIAL_LINKS, &DARK);
        let areas = list.link_areas(Rect::new(1, 17, 30, 4));
        assert_eq!(
            areas,
            vec![(0, Rect::new(2, 18, 28, 1)), (1, Rect::new(2, 19, 28, 1))]
        );
    }
}
