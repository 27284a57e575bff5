//! Projects card: filter controls, badges, count line and the carousel.

use std::time::Instant;

use folio_app::{AppState, Focus, HitMap, HitTarget};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::Span;
use ratatui::Frame;

use crate::layout::{self, ProjectsAreas};
use crate::theme::{styles, Palette};
use crate::widgets::{Button, Carousel, EmptyState, FilterBadge, SearchInput};

use super::to_area;

pub const TAG_MENU_LABEL: &str = "Tech";
pub const YEAR_MENU_LABEL: &str = "Year";
pub const CLEAR_ALL_LABEL: &str = "Clear All";

/// Label for a facet button: `Tech ▾`, or `Tech (2) ▾` with selections
pub fn menu_button_label(label: &str, selected: usize) -> String {
    if selected == 0 {
        format!("{} ▾", label)
    } else {
        format!("{} ({}) ▾", label, selected)
    }
}

/// Pieces of the controls row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAreas {
    pub search: Rect,
    pub tag_button: Rect,
    pub year_button: Rect,
    /// Only present while a filter is active
    pub clear_all: Option<Rect>,
}

impl ControlAreas {
    pub fn new(row: Rect, tag_label: &str, year_label: &str, show_clear: bool) -> Self {
        let mut constraints = vec![
            Constraint::Min(10),
            Constraint::Length(Button::width_of(tag_label)),
            Constraint::Length(Button::width_of(year_label)),
        ];
        if show_clear {
            constraints.push(Constraint::Length(Button::width_of(CLEAR_ALL_LABEL)));
        }
        let chunks = Layout::horizontal(constraints).spacing(1).split(row);

        Self {
            search: chunks[0],
            tag_button: chunks[1],
            year_button: chunks[2],
            clear_all: chunks.get(3).copied(),
        }
    }
}

/// Inner areas of the projects card
pub fn inner_areas(card: Rect) -> ProjectsAreas {
    layout::create_projects(card.inner(Margin::new(1, 1)))
}

/// Width of one slide for a projects card at `card` in a terminal
/// `viewport_width` columns wide
pub fn slide_width(card: Rect, viewport_width: u16) -> u16 {
    let track = layout::create_carousel(inner_areas(card).content).track;
    (track.width / layout::slides_per_view(viewport_width)).max(1)
}

pub fn render(
    frame: &mut Frame,
    card: Rect,
    state: &AppState,
    palette: &Palette,
    now: Instant,
    hits: &mut HitMap,
) {
    let showcase = &state.showcase;
    let filter = showcase.filter();
    let in_section = matches!(
        state.focus,
        Focus::Search | Focus::TagMenu | Focus::YearMenu | Focus::Carousel
    );

    let block = styles::card_block(palette, in_section)
        .title(Span::styled(" PROJECTS ", styles::accent_bold(palette)));
    frame.render_widget(block, card);

    let areas = inner_areas(card);

    // Controls
    let tag_label = menu_button_label(TAG_MENU_LABEL, filter.selected_tags.len());
    let year_label = menu_button_label(YEAR_MENU_LABEL, filter.selected_years.len());
    let controls = ControlAreas::new(
        areas.controls,
        &tag_label,
        &year_label,
        filter.has_active_filters(),
    );

    frame.render_widget(
        SearchInput::new(&filter.search_text, palette).focused(state.focus == Focus::Search),
        controls.search,
    );
    hits.register(to_area(controls.search), HitTarget::SearchInput);

    let tag_focused = state.focus == Focus::TagMenu || showcase.tag_menu.is_open();
    frame.render_widget(
        Button::new(&tag_label, styles::button(palette, tag_focused)),
        controls.tag_button,
    );
    hits.register(to_area(controls.tag_button), HitTarget::TagMenuButton);

    let year_focused = state.focus == Focus::YearMenu || showcase.year_menu.is_open();
    frame.render_widget(
        Button::new(&year_label, styles::button(palette, year_focused)),
        controls.year_button,
    );
    hits.register(to_area(controls.year_button), HitTarget::YearMenuButton);

    if let Some(clear) = controls.clear_all {
        frame.render_widget(
            Button::new(CLEAR_ALL_LABEL, styles::button(palette, false)),
            clear,
        );
        hits.register(to_area(clear), HitTarget::ClearAll);
    }

    render_badges(frame, areas.badges, state, palette, hits);

    frame.render_widget(
        Span::styled(showcase.count_line(), styles::text_muted(palette)),
        areas.count,
    );

    // Carousel or empty state
    let visible = showcase.visible_projects();
    if visible.is_empty() {
        let empty = EmptyState::new(showcase.load_status(), filter.has_active_filters(), palette);
        if let Some(button) = empty.clear_button_area(areas.content) {
            hits.register(to_area(button), HitTarget::EmptyStateClearAll);
        }
        frame.render_widget(empty, areas.content);
        return;
    }

    let carousel_areas = layout::create_carousel(areas.content);
    let carousel_state = &showcase.carousel;
    let active = (state.focus == Focus::Carousel).then(|| carousel_state.active_index());
    let carousel = Carousel::new(&visible, carousel_state.slide_width(), palette)
        .offset(carousel_state.offset_columns(now))
        .active(active);

    hits.register(to_area(areas.content), HitTarget::Carousel);
    for (index, slide) in carousel.slide_areas(carousel_areas.track) {
        hits.register(to_area(slide), HitTarget::Slide(index));
    }
    frame.render_widget(carousel, carousel_areas.track);

    render_arrow(
        frame,
        carousel_areas.prev,
        "‹",
        carousel_state.can_go_previous(),
        palette,
    );
    hits.register(to_area(carousel_areas.prev), HitTarget::PrevSlide);
    render_arrow(
        frame,
        carousel_areas.next,
        "›",
        carousel_state.can_go_next(),
        palette,
    );
    hits.register(to_area(carousel_areas.next), HitTarget::NextSlide);
}

/// Badges for selected tags, then selected years, until the row is full
fn render_badges(
    frame: &mut Frame,
    row: Rect,
    state: &AppState,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let filter = state.showcase.filter();
    let years: Vec<String> = filter.selected_years.iter().map(|y| y.to_string()).collect();

    let entries = filter
        .selected_tags
        .iter()
        .map(|tag| (tag.as_str(), HitTarget::RemoveTag(tag.clone())))
        .chain(
            filter
                .selected_years
                .iter()
                .zip(years.iter())
                .map(|(year, label)| (label.as_str(), HitTarget::RemoveYear(*year))),
        );

    let mut x = row.x;
    for (label, target) in entries {
        let badge = FilterBadge::new(label, palette);
        let width = badge.width();
        if x + width > row.right() {
            break;
        }
        let area = Rect::new(x, row.y, width, row.height.min(1));
        hits.register(to_area(badge.remove_area(area)), target);
        frame.render_widget(badge, area);
        x += width + 1;
    }
}

fn render_arrow(frame: &mut Frame, area: Rect, glyph: &str, enabled: bool, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    let style = if enabled {
        styles::accent_bold(palette)
    } else {
        styles::text_muted(palette)
    };
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(Span::styled(format!(" {} ", glyph), style), middle);
}
