//! Main render/view function (View in TEA pattern)
//!
//! Besides drawing, `view` measures the slide width for the carousel and
//! rebuilds the hit map that mouse handling resolves presses against.
//! Popovers are drawn and registered last so they cover the page.


pub mod projects;

use folio_app::{AppState, Area, Focus, HitMap, HitTarget};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout::{self, ScreenAreas};
use crate::theme::{palette, Palette};
use crate::widgets::{
    footer, popover, DropdownOption, FilterDropdown, Footer, Header, HeaderAreas, LinkList,
    Profile, Stacks,
};

pub(crate) fn to_area(rect: Rect) -> Area {
    Area::new(rect.x, rect.y, rect.width, rect.height)
}

fn to_rect(area: Area) -> Rect {
    Rect::new(area.x, area.y, area.width, area.height)
}

/// Render the complete UI (View function in TEA)
///
/// Only layout-derived state is written back: the carousel's slide width and
/// the hit map.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let now = state.now();
    let palette = palette::for_theme(state.theme);

    // Fill entire terminal with the theme background
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area);
    state
        .showcase
        .carousel
        .set_slide_width(projects::slide_width(areas.projects, area.width));

    let mut hits = HitMap::new();
    let state_ref: &AppState = state;

    render_header(frame, areas.header, state_ref, palette, &mut hits);
    if let Some(profile) = areas.profile {
        frame.render_widget(Profile::new(palette), profile);
    }
    projects::render(frame, areas.projects, state_ref, palette, now, &mut hits);
    if let Some(stacks) = areas.stacks {
        frame.render_widget(Stacks::new(palette), stacks);
    }
    render_footer(frame, areas.footer, state_ref, palette, &mut hits);

    render_popovers(frame, &areas, state_ref, palette, &mut hits);

    state.hit_map = hits;
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let header_areas = HeaderAreas::new(area, state.theme);
    frame.render_widget(
        Header::new(palette, state.theme)
            .contact_focused(state.focus == Focus::Contact || state.contact_menu.is_open())
            .toggle_focused(state.focus == Focus::ThemeToggle),
        area,
    );
    hits.register(to_area(header_areas.contact), HitTarget::ContactButton);
    hits.register(to_area(header_areas.theme_toggle), HitTarget::ThemeToggle);
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let focused = state.focus == Focus::Socials || state.socials_menu.is_open();
    frame.render_widget(Footer::new(palette).focused(focused), area);
    hits.register(
        to_area(footer::socials_button_area(area)),
        HitTarget::SocialsButton,
    );
}

fn render_popovers(
    frame: &mut Frame,
    areas: &ScreenAreas,
    state: &AppState,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let screen = frame.area();
    let showcase = &state.showcase;
    let filter = showcase.filter();

    if showcase.tag_menu.is_open() {
        let options: Vec<DropdownOption> = showcase
            .available_tags()
            .into_iter()
            .map(|tag| {
                let selected = filter.is_tag_selected(&tag);
                DropdownOption::new(tag, selected)
            })
            .collect();
        if let Some(anchor) = hits.area_of(&HitTarget::TagMenuButton) {
            let dropdown = FilterDropdown::new(projects::TAG_MENU_LABEL, &options, palette)
                .cursor(showcase.tag_menu.cursor());
            let (w, h) = dropdown.size();
            let panel = popover::below(to_rect(anchor), w, h, screen);

            hits.register(to_area(panel), HitTarget::TagMenuPanel);
            for (index, row) in dropdown.option_areas(panel) {
                if let Some(option) = options.get(index) {
                    hits.register(to_area(row), HitTarget::TagOption(option.label.clone()));
                }
            }
            frame.render_widget(dropdown, panel);
            popover::render_shadow(frame.buffer_mut(), panel, palette);
        }
    }

    if showcase.year_menu.is_open() {
        let years = showcase.available_years();
        let options: Vec<DropdownOption> = years
            .iter()
            .map(|year| DropdownOption::new(year.to_string(), filter.is_year_selected(*year)))
            .collect();
        if let Some(anchor) = hits.area_of(&HitTarget::YearMenuButton) {
            let dropdown = FilterDropdown::new(projects::YEAR_MENU_LABEL, &options, palette)
                .cursor(showcase.year_menu.cursor());
            let (w, h) = dropdown.size();
            let panel = popover::below(to_rect(anchor), w, h, screen);

            hits.register(to_area(panel), HitTarget::YearMenuPanel);
            for (index, row) in dropdown.option_areas(panel) {
                if let Some(year) = years.get(index) {
                    hits.register(to_area(row), HitTarget::YearOption(*year));
                }
            }
            frame.render_widget(dropdown, panel);
            popover::render_shadow(frame.buffer_mut(), panel, palette);
        }
    }

    if state.contact_menu.is_open() {
        let anchor = HeaderAreas::new(areas.header, state.theme).contact;
        let list = LinkList::new("Contact", state.contact_menu.links(), palette)
            .cursor(state.contact_menu.cursor());
        let (w, h) = list.size();
        let panel = popover::below(anchor, w, h, screen);

        hits.register(to_area(panel), HitTarget::ContactMenuPanel);
        for (index, row) in list.link_areas(panel) {
            hits.register(to_area(row), HitTarget::ContactLink(index));
        }
        frame.render_widget(list, panel);
        popover::render_shadow(frame.buffer_mut(), panel, palette);
    }

    if state.socials_menu.is_open() {
        let anchor = footer::socials_button_area(areas.footer);
        let list = LinkList::new("Socials", state.socials_menu.links(), palette)
            .cursor(state.socials_menu.cursor());
        let (w, h) = list.size();
        let panel = popover::above(anchor, w, h, screen);

        hits.register(to_area(panel), HitTarget::SocialsMenuPanel);
        for (index, row) in list.link_areas(panel) {
            hits.register(to_area(row), HitTarget::SocialLink(index));
        }
        frame.render_widget(list, panel);
        popover::render_shadow(frame.buffer_mut(), panel, palette);
    }
}
