//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

// --- Controls ---

/// A button label, highlighted while the control has keyboard focus
pub fn button(p: &Palette, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(p.selected_fg)
            .bg(p.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.text_primary).bg(p.badge_bg)
    }
}

pub fn button_disabled(p: &Palette) -> Style {
    Style::default().fg(p.text_muted).bg(p.card_bg)
}

pub fn badge(p: &Palette) -> Style {
    Style::default().fg(p.badge_fg).bg(p.badge_bg)
}

/// Menu row under the keyboard cursor
pub fn menu_cursor(p: &Palette) -> Style {
    Style::default().fg(p.selected_fg).bg(p.selected_bg)
}

pub fn danger(p: &Palette) -> Style {
    Style::default().fg(p.danger)
}

// --- Border styles ---
pub fn border(p: &Palette, focused: bool) -> Style {
    if focused {
        Style::default().fg(p.border_active)
    } else {
        Style::default().fg(p.border_dim)
    }
}

// --- Block builders ---

/// Rounded card used for every page section
pub fn card_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border(p, focused))
        .style(Style::default().bg(p.card_bg))
}

/// Popover panel drawn above the page
pub fn popup_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg))
}
