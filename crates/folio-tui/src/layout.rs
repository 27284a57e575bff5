//! Screen layout definitions for the TUI
//!
//! The page stacks header, profile, projects, stacks and footer. The
//! projects card always gets at least `PROJECTS_MIN_HEIGHT` rows; profile and
//! stacks are only shown when the terminal has room left for them.

use folio_core::TECH_STACK;
use ratatui::layout::{Constraint, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 7;
pub const PROFILE_HEIGHT: u16 = 6;
pub const FOOTER_HEIGHT: u16 = 3;
pub const PROJECTS_MIN_HEIGHT: u16 = 14;

/// Viewport width at which the carousel shows three slides
pub const WIDE_BREAKPOINT: u16 = 100;

/// Arrow column on each side of the slide track
const ARROW_WIDTH: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub profile: Option<Rect>,
    pub projects: Rect,
    pub stacks: Option<Rect>,
    pub footer: Rect,
}

/// Rows inside the projects card
#[derive(Debug, Clone, Copy)]
pub struct ProjectsAreas {
    /// Search input, filter buttons and "Clear All"
    pub controls: Rect,
    /// Active filter badges
    pub badges: Rect,
    pub count: Rect,
    /// Carousel or empty state
    pub content: Rect,
}

#[derive(Debug, Clone, Copy)]
pub struct CarouselAreas {
    pub prev: Rect,
    pub track: Rect,
    pub next: Rect,
}

/// Number of stack grid columns for a given width
pub fn stack_columns(width: u16) -> u16 {
    if width < 60 {
        4
    } else if width < WIDE_BREAKPOINT {
        6
    } else {
        7
    }
}

/// Stacks card height: one row per grid row plus borders and title
pub fn stacks_height(width: u16) -> u16 {
    let columns = stack_columns(width) as usize;
    let rows = TECH_STACK.len().div_ceil(columns) as u16;
    rows + 2
}

pub fn slides_per_view(viewport_width: u16) -> u16 {
    if viewport_width >= WIDE_BREAKPOINT {
        3
    } else {
        1
    }
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let mut spare = area
        .height
        .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT + PROJECTS_MIN_HEIGHT);

    let show_profile = spare >= PROFILE_HEIGHT;
    if show_profile {
        spare -= PROFILE_HEIGHT;
    }
    let stacks = stacks_height(area.width);
    let show_stacks = spare >= stacks;

    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT)];
    if show_profile {
        constraints.push(Constraint::Length(PROFILE_HEIGHT));
    }
    constraints.push(Constraint::Min(PROJECTS_MIN_HEIGHT.min(area.height)));
    if show_stacks {
        constraints.push(Constraint::Length(stacks));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let chunks = Layout::vertical(constraints).split(area);
    let mut next = chunks.iter().copied();
    let mut take = || next.next().unwrap_or_default();

    let header = take();
    let profile = if show_profile { Some(take()) } else { None };
    let projects = take();
    let stacks = if show_stacks { Some(take()) } else { None };
    let footer = take();

    ScreenAreas {
        header,
        profile,
        projects,
        stacks,
        footer,
    }
}

/// Split the inside of the projects card
pub fn create_projects(inner: Rect) -> ProjectsAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    ProjectsAreas {
        controls: chunks[0],
        badges: chunks[1],
        count: chunks[2],
        content: chunks[3],
    }
}

/// Split the carousel row into arrows and the slide track
pub fn create_carousel(area: Rect) -> CarouselAreas {
    let chunks = Layout::horizontal([
        Constraint::Length(ARROW_WIDTH),
        Constraint::Min(0),
        Constraint::Length(ARROW_WIDTH),
    ])
    .split(area);

    CarouselAreas {
        prev: chunks[0],
        track: chunks[1],
        next: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_terminal_hides_optional_sections() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert!(layout.profile.is_none());
        assert!(layout.stacks.is_none());
        assert_eq!(layout.projects.height, 24 - HEADER_HEIGHT - FOOTER_HEIGHT);
        assert_eq!(layout.footer.y, 21);
    }

    #[test]
    fn test_tall_terminal_shows_everything() {
        let layout = create(Rect::new(0, 0, 80, 48));

        let profile = layout.profile.expect("profile shown");
        let stacks = layout.stacks.expect("stacks shown");
        assert_eq!(profile.y, HEADER_HEIGHT);
        assert_eq!(layout.projects.y, HEADER_HEIGHT + PROFILE_HEIGHT);
        assert_eq!(stacks.height, stacks_height(80));
        assert_eq!(layout.footer.y + layout.footer.height, 48);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let layout = create(Rect::new(0, 0, 120, 60));
        let profile = layout.profile.unwrap();
        let stacks = layout.stacks.unwrap();

        assert_eq!(layout.header.y + layout.header.height, profile.y);
        assert_eq!(profile.y + profile.height, layout.projects.y);
        assert_eq!(layout.projects.y + layout.projects.height, stacks.y);
        assert_eq!(stacks.y + stacks.height, layout.footer.y);
    }

    #[test]
    fn test_stack_columns_breakpoints() {
        assert_eq!(stack_columns(40), 4);
        assert_eq!(stack_columns(59), 4);
        assert_eq!(stack_columns(60), 6);
        assert_eq!(stack_columns(99), 6);
        assert_eq!(stack_columns(100), 7);
    }

    #[test]
    fn test_stacks_height_rounds_rows_up() {
        // 12 entries: 3 rows of 4, 2 rows of 6, 2 rows of 7
        assert_eq!(stacks_height(40), 5);
        assert_eq!(stacks_height(80), 4);
        assert_eq!(stacks_height(120), 4);
    }

    #[test]
    fn test_slides_per_view() {
        assert_eq!(slides_per_view(80), 1);
        assert_eq!(slides_per_view(99), 1);
        assert_eq!(slides_per_view(100), 3);
    }

    #[test]
    fn test_projects_rows() {
        let areas = create_projects(Rect::new(1, 8, 78, 12));
        assert_eq!(areas.controls.y, 8);
        assert_eq!(areas.badges.y, 9);
        assert_eq!(areas.count.y, 10);
        assert_eq!(areas.content, Rect::new(1, 11, 78, 9));
    }

    #[test]
    fn test_carousel_arrows_flank_track() {
        let areas = create_carousel(Rect::new(1, 11, 78, 9));
        assert_eq!(areas.prev.width, 3);
        assert_eq!(areas.next.width, 3);
        assert_eq!(areas.track, Rect::new(4, 11, 72, 9));
    }
}
