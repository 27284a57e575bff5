//! Colour sets for the light and dark themes.

use folio_core::Theme;
use ratatui::style::Color;

/// Every colour a widget may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub accent_dim: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Badges & selection ---
    pub badge_bg: Color,
    pub badge_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,

    // --- Status ---
    pub danger: Color,

    // --- Effects ---
    pub shadow: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(88, 166, 255),
    accent_dim: Color::Rgb(56, 107, 163),
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    badge_bg: Color::Rgb(33, 38, 45),
    badge_fg: Color::Rgb(201, 209, 217),
    selected_bg: Color::Rgb(88, 166, 255),
    selected_fg: Color::Rgb(10, 12, 16),
    danger: Color::Rgb(244, 63, 94),
    shadow: Color::Rgb(5, 6, 8),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 250),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(244, 244, 245),
    border_dim: Color::Rgb(212, 212, 216),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235),
    accent_dim: Color::Rgb(147, 197, 253),
    text_primary: Color::Rgb(24, 24, 27),
    text_secondary: Color::Rgb(82, 82, 91),
    text_muted: Color::Rgb(161, 161, 170),
    badge_bg: Color::Rgb(228, 228, 231),
    badge_fg: Color::Rgb(39, 39, 42),
    selected_bg: Color::Rgb(37, 99, 235),
    selected_fg: Color::Rgb(255, 255, 255),
    danger: Color::Rgb(220, 38, 38),
    shadow: Color::Rgb(212, 212, 216),
};

pub fn for_theme(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        assert_ne!(for_theme(Theme::Dark), for_theme(Theme::Light));
        assert_eq!(for_theme(Theme::Dark).background, DARK.background);
    }
}
