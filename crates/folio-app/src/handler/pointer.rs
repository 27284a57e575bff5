//! Mouse handling
//!
//! Presses resolve against the hit map from the last frame. Any open popover
//! closes when a press lands outside it and outside its own button. Presses
//! on the carousel start a drag; the drag is cancelled if the pointer leaves
//! the carousel before release.

use folio_core::{CONTACT_LINKS, SOCIAL_LINKS};

use crate::gesture::GestureOutcome;
use crate::hit_map::HitTarget;
use crate::input::{PointerEvent, PointerKind};
use crate::message::Message;
use crate::state::{AppState, Focus};

use super::UpdateResult;

pub fn handle_pointer(state: &mut AppState, event: PointerEvent) -> UpdateResult {
    match event.kind {
        PointerKind::Down => handle_press(state, event),
        PointerKind::Drag => {
            handle_drag(state, event);
            UpdateResult::none()
        }
        PointerKind::Up => handle_release(state, event),
        PointerKind::Moved => UpdateResult::none(),
    }
}

fn handle_press(state: &mut AppState, event: PointerEvent) -> UpdateResult {
    let target = state.hit_map.target_at(event.column, event.row).cloned();
    close_menus_outside(state, target.as_ref());

    let Some(target) = target else {
        return UpdateResult::none();
    };

    let msg = match target {
        HitTarget::SearchInput => Message::SetFocus(Focus::Search),
        HitTarget::TagMenuButton => Message::ClickTagMenu,
        HitTarget::YearMenuButton => Message::ClickYearMenu,
        HitTarget::ClearAll | HitTarget::EmptyStateClearAll => Message::ClearAllFilters,
        HitTarget::TagOption(tag) => Message::ToggleTag(tag),
        HitTarget::YearOption(year) => Message::ToggleYear(year),
        HitTarget::RemoveTag(tag) => Message::RemoveTag(tag),
        HitTarget::RemoveYear(year) => Message::RemoveYear(year),
        HitTarget::Carousel | HitTarget::Slide(_) => {
            state.focus = Focus::Carousel;
            let x = event.x_px(state.cell_width_px());
            state.showcase.drag.start(x);
            return UpdateResult::none();
        }
        HitTarget::PrevSlide => Message::PreviousSlide,
        HitTarget::NextSlide => Message::NextSlide,
        HitTarget::ThemeToggle => {
            state.focus = Focus::ThemeToggle;
            Message::ToggleTheme
        }
        HitTarget::ContactButton => Message::ToggleContactMenu,
        HitTarget::SocialsButton => Message::ToggleSocialsMenu,
        HitTarget::ContactLink(index) => match CONTACT_LINKS.get(index) {
            Some(link) => Message::OpenLink {
                href: link.href.to_string(),
                target: link.target,
            },
            None => return UpdateResult::none(),
        },
        HitTarget::SocialLink(index) => match SOCIAL_LINKS.get(index) {
            Some(link) => Message::OpenLink {
                href: link.href.to_string(),
                target: link.target,
            },
            None => return UpdateResult::none(),
        },
        HitTarget::TagMenuPanel
        | HitTarget::YearMenuPanel
        | HitTarget::ContactMenuPanel
        | HitTarget::SocialsMenuPanel => return UpdateResult::none(),
    };
    UpdateResult::message(msg)
}

fn close_menus_outside(state: &mut AppState, target: Option<&HitTarget>) {
    let inside = |check: fn(&HitTarget) -> bool| target.map(check).unwrap_or(false);

    if state.showcase.tag_menu.is_open() && !inside(HitTarget::belongs_to_tag_menu) {
        state.showcase.tag_menu.close();
    }
    if state.showcase.year_menu.is_open() && !inside(HitTarget::belongs_to_year_menu) {
        state.showcase.year_menu.close();
    }
    if state.contact_menu.is_open() && !inside(HitTarget::belongs_to_contact_menu) {
        state.contact_menu.close();
    }
    if state.socials_menu.is_open() && !inside(HitTarget::belongs_to_socials_menu) {
        state.socials_menu.close();
    }
}

fn handle_drag(state: &mut AppState, event: PointerEvent) {
    if !state.showcase.drag.is_dragging() {
        return;
    }
    let over_carousel = state
        .hit_map
        .targets_at(event.column, event.row)
        .any(HitTarget::is_carousel_surface);

    if over_carousel {
        let x = event.x_px(state.cell_width_px());
        state.showcase.drag.move_to(x);
    } else {
        state.showcase.drag.cancel();
    }
}

fn handle_release(state: &mut AppState, event: PointerEvent) -> UpdateResult {
    if !state.showcase.drag.is_dragging() {
        return UpdateResult::none();
    }

    // The release position is the gesture's end point
    handle_drag(state, PointerEvent::drag(event.column, event.row));
    if !state.showcase.drag.is_dragging() {
        return UpdateResult::none();
    }

    let now = state.now();
    match state.showcase.finish_drag(now) {
        GestureOutcome::Tap {
            link_suppressed: false,
        } => {
            let slide = state
                .hit_map
                .targets_at(event.column, event.row)
                .find_map(|target| match target {
                    HitTarget::Slide(index) => Some(*index),
                    _ => None,
                });
            match slide {
                Some(index) => UpdateResult::message(Message::OpenSlide(index)),
                None => UpdateResult::none(),
            }
        }
        _ => UpdateResult::none(),
    }
}
