//! Placement and decoration for menus drawn above the page.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::Palette;

/// Place a `width` x `height` panel directly below `anchor`, left-aligned to
/// it and shifted left if it would run off `screen`. Falls back to above the
/// anchor when there is no room below.
pub fn below(anchor: Rect, width: u16, height: u16, screen: Rect) -> Rect {
    let w = width.min(screen.width);
    let x = clamp_x(anchor.x, w, screen);
    let below_y = anchor.y.saturating_add(anchor.height);
    let room_below = screen.bottom().saturating_sub(below_y);
    if room_below >= height || anchor.y.saturating_sub(screen.y) < height {
        Rect::new(x, below_y, w, height.min(room_below))
    } else {
        Rect::new(x, anchor.y - height, w, height)
    }
}

/// Place a panel directly above `anchor`, clipped to `screen`
pub fn above(anchor: Rect, width: u16, height: u16, screen: Rect) -> Rect {
    let w = width.min(screen.width);
    let x = clamp_x(anchor.x, w, screen);
    let h = height.min(anchor.y.saturating_sub(screen.y));
    Rect::new(x, anchor.y - h, w, h)
}

fn clamp_x(x: u16, width: u16, screen: Rect) -> u16 {
    let max_x = screen.right().saturating_sub(width);
    x.min(max_x).max(screen.x)
}

/// Render a 1-cell shadow offset to the right and bottom of a panel.
pub fn render_shadow(buf: &mut Buffer, panel: Rect, palette: &Palette) {
    let shadow_style = Style::default().fg(palette.shadow).bg(palette.shadow);

    let right_x = panel.right();
    for y in (panel.y + 1)..=panel.bottom() {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = panel.bottom();
    for x in (panel.x + 1)..=panel.right() {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_style(shadow_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;

    #[test]
    fn test_below_left_aligns_to_anchor() {
        let screen = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(30, 8, 10, 1);
        assert_eq!(below(anchor, 20, 5, screen), Rect::new(30, 9, 20, 5));
    }

    #[test]
    fn test_below_shifts_left_at_right_edge() {
        let screen = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(70, 8, 10, 1);
        assert_eq!(below(anchor, 20, 5, screen), Rect::new(60, 9, 20, 5));
    }

    #[test]
    fn test_below_flips_above_when_cramped() {
        let screen = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(10, 21, 10, 1);
        assert_eq!(below(anchor, 20, 6, screen), Rect::new(10, 15, 20, 6));
    }

    #[test]
    fn test_above_clips_to_screen_top() {
        let screen = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(2, 3, 10, 1);
        assert_eq!(above(anchor, 20, 6, screen), Rect::new(2, 0, 20, 3));
    }

    #[test]
    fn test_shadow_right_and_bottom() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, Rect::new(2, 1, 5, 3), &DARK);
        assert_eq!(buf[(7, 2)].bg, DARK.shadow);
        assert_eq!(buf[(3, 4)].bg, DARK.shadow);
        assert_ne!(buf[(2, 4)].bg, DARK.shadow);
    }

    #[test]
    fn test_shadow_off_screen_is_skipped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        render_shadow(&mut buf, Rect::new(5, 1, 5, 4), &DARK);
    }
}
