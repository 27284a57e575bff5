//! Page header: logo, contact button, theme toggle and the intro text.

use folio_core::{Theme, IDENTITY};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

use super::Button;

pub const CONTACT_LABEL: &str = "Contact Me";

/// Glyph shown on the theme toggle for the current theme
pub fn theme_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☾",
        Theme::Light => "☀",
    }
}

/// Clickable parts of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderAreas {
    pub logo: Rect,
    pub contact: Rect,
    pub theme_toggle: Rect,
    pub body: Rect,
}

impl HeaderAreas {
    pub fn new(area: Rect, theme: Theme) -> Self {
        let inner = area.inner(Margin::new(1, 1));
        let top = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));

        let toggle_width = Button::width_of(theme_glyph(theme)).min(top.width);
        let theme_toggle = Rect::new(
            top.right().saturating_sub(toggle_width),
            top.y,
            toggle_width,
            top.height,
        );
        let contact_width = Button::width_of(CONTACT_LABEL)
            .min(theme_toggle.x.saturating_sub(top.x).saturating_sub(1));
        let contact = Rect::new(
            theme_toggle.x.saturating_sub(contact_width + 1),
            top.y,
            contact_width,
            top.height,
        );
        let logo = Rect::new(
            top.x,
            top.y,
            contact.x.saturating_sub(top.x),
            top.height,
        );
        let body = Rect::new(
            inner.x,
            inner.y.saturating_add(1),
            inner.width,
            inner.height.saturating_sub(1),
        );

        Self {
            logo,
            contact,
            theme_toggle,
            body,
        }
    }
}

pub struct Header<'a> {
    palette: &'a Palette,
    theme: Theme,
    contact_focused: bool,
    toggle_focused: bool,
}

impl<'a> Header<'a> {
    pub fn new(palette: &'a Palette, theme: Theme) -> Self {
        Self {
            palette,
            theme,
            contact_focused: false,
            toggle_focused: false,
        }
    }

    pub fn contact_focused(mut self, focused: bool) -> Self {
        self.contact_focused = focused;
        self
    }

    pub fn toggle_focused(mut self, focused: bool) -> Self {
        self.toggle_focused = focused;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false);
        block.render(area, buf);

        let areas = HeaderAreas::new(area, self.theme);
        if areas.logo.height == 0 {
            return;
        }

        let letters: Vec<Span> = IDENTITY
            .logo_letters
            .iter()
            .map(|c| Span::styled(format!("{} ", c), styles::accent_bold(p)))
            .collect();
        buf.set_line(areas.logo.x, areas.logo.y, &Line::from(letters), areas.logo.width);

        Button::new(CONTACT_LABEL, styles::button(p, self.contact_focused))
            .render(areas.contact, buf);
        Button::new(theme_glyph(self.theme), styles::button(p, self.toggle_focused))
            .render(areas.theme_toggle, buf);

        let body = vec![
            Line::from(Span::styled(IDENTITY.greeting, styles::heading(p))),
            Line::from(Span::styled(IDENTITY.bio, styles::text_secondary(p))),
        ];
        let location = Line::from(vec![
            Span::styled("⌂ ", styles::accent(p)),
            Span::styled(IDENTITY.location, styles::text_muted(p)),
        ]);

        // Location pinned to the last row; bio wraps into whatever is left
        if areas.body.height == 0 {
            return;
        }
        let text_height = areas.body.height.saturating_sub(1);
        let text_area = Rect::new(areas.body.x, areas.body.y, areas.body.width, text_height);
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
        buf.set_line(
            areas.body.x,
            areas.body.bottom().saturating_sub(1),
            &location,
            areas.body.width,
        );
    }
}
