//! Main update function - handles state transitions (TEA pattern)

use folio_core::prelude::*;
use folio_core::LinkTarget;

use crate::message::Message;
use crate::state::{AppState, Focus, OpenMenu};

use super::{keys::handle_key, pointer::handle_pointer, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let now = state.now();

    // Timers run on every message, not only on idle ticks
    state.showcase.tick(now);

    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Pointer(event) => handle_pointer(state, event),

        Message::Resize(width, height) => {
            state.viewport = (width, height);
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }
        Message::SetFocus(focus) => {
            state.focus = focus;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search & Filters
        // ─────────────────────────────────────────────────────────
        Message::SearchPush(c) => {
            state.showcase.push_search_char(c, now);
            UpdateResult::none()
        }
        Message::SearchBackspace => {
            state.showcase.pop_search_char(now);
            UpdateResult::none()
        }
        Message::SearchClear => {
            state.showcase.set_search_text("", now);
            UpdateResult::none()
        }
        Message::ToggleTag(tag) => {
            state.showcase.toggle_tag(&tag, now);
            UpdateResult::none()
        }
        Message::ToggleYear(year) => {
            state.showcase.toggle_year(year, now);
            UpdateResult::none()
        }
        Message::RemoveTag(tag) => {
            state.showcase.remove_tag(&tag, now);
            UpdateResult::none()
        }
        Message::RemoveYear(year) => {
            state.showcase.remove_year(year, now);
            UpdateResult::none()
        }
        Message::ClearAllFilters => {
            state.showcase.clear_all_filters(now);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Carousel
        // ─────────────────────────────────────────────────────────
        Message::PreviousSlide => {
            state.showcase.previous_slide(now);
            UpdateResult::none()
        }
        Message::NextSlide => {
            state.showcase.next_slide(now);
            UpdateResult::none()
        }
        Message::OpenActiveSlide => {
            let index = state.showcase.carousel.active_index();
            open_slide(state, index)
        }
        Message::OpenSlide(index) => open_slide(state, index),

        // ─────────────────────────────────────────────────────────
        // Dropdowns
        // ─────────────────────────────────────────────────────────
        Message::ClickTagMenu => {
            state.focus = Focus::TagMenu;
            state.showcase.click_tag_menu(now);
            UpdateResult::none()
        }
        Message::ClickYearMenu => {
            state.focus = Focus::YearMenu;
            state.showcase.click_year_menu(now);
            UpdateResult::none()
        }
        Message::ToggleFocusedMenu => {
            match state.focus {
                Focus::TagMenu => state.showcase.tag_menu.toggle_open(),
                Focus::YearMenu => state.showcase.year_menu.toggle_open(),
                Focus::Contact => state.contact_menu.toggle(),
                Focus::Socials => state.socials_menu.toggle(),
                _ => {}
            }
            UpdateResult::none()
        }
        Message::CloseMenus => {
            state.close_all_menus();
            UpdateResult::none()
        }
        Message::MenuCursorUp => {
            match state.open_menu() {
                Some(OpenMenu::Tag) => state.showcase.tag_menu.cursor_up(),
                Some(OpenMenu::Year) => state.showcase.year_menu.cursor_up(),
                Some(OpenMenu::Contact) => state.contact_menu.cursor_up(),
                Some(OpenMenu::Socials) => state.socials_menu.cursor_up(),
                None => {}
            }
            UpdateResult::none()
        }
        Message::MenuCursorDown => {
            match state.open_menu() {
                Some(OpenMenu::Tag) => {
                    let count = state.showcase.available_tags().len();
                    state.showcase.tag_menu.cursor_down(count);
                }
                Some(OpenMenu::Year) => {
                    let count = state.showcase.available_years().len();
                    state.showcase.year_menu.cursor_down(count);
                }
                Some(OpenMenu::Contact) => state.contact_menu.cursor_down(),
                Some(OpenMenu::Socials) => state.socials_menu.cursor_down(),
                None => {}
            }
            UpdateResult::none()
        }
        Message::MenuCursorFirst => {
            match state.open_menu() {
                Some(OpenMenu::Tag) => state.showcase.tag_menu.cursor_first(),
                Some(OpenMenu::Year) => state.showcase.year_menu.cursor_first(),
                Some(OpenMenu::Contact) => state.contact_menu.cursor_first(),
                Some(OpenMenu::Socials) => state.socials_menu.cursor_first(),
                None => {}
            }
            UpdateResult::none()
        }
        Message::MenuCursorLast => {
            match state.open_menu() {
                Some(OpenMenu::Tag) => {
                    let count = state.showcase.available_tags().len();
                    state.showcase.tag_menu.cursor_last(count);
                }
                Some(OpenMenu::Year) => {
                    let count = state.showcase.available_years().len();
                    state.showcase.year_menu.cursor_last(count);
                }
                Some(OpenMenu::Contact) => state.contact_menu.cursor_last(),
                Some(OpenMenu::Socials) => state.socials_menu.cursor_last(),
                None => {}
            }
            UpdateResult::none()
        }
        Message::MenuToggleSelected => match state.open_menu() {
            Some(OpenMenu::Tag) => {
                state.showcase.toggle_tag_at_cursor(now);
                UpdateResult::none()
            }
            Some(OpenMenu::Year) => {
                state.showcase.toggle_year_at_cursor(now);
                UpdateResult::none()
            }
            Some(OpenMenu::Contact) => link_message(state.contact_menu.selected()),
            Some(OpenMenu::Socials) => link_message(state.socials_menu.selected()),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Project Loading
        // ─────────────────────────────────────────────────────────
        Message::LoadProjects => {
            let token = state.showcase.mount();
            let source = state.settings.projects.source.clone();
            info!("Loading projects from {}", source);
            UpdateResult::action(UpdateAction::LoadProjects { token, source })
        }
        Message::ProjectsLoaded { token, result } => {
            state.showcase.apply_loaded(token, result, now);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Header & Footer
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            debug!("Theme switched to {}", state.theme);
            UpdateResult::action(UpdateAction::PersistTheme(state.theme))
        }
        Message::ToggleContactMenu => {
            state.focus = Focus::Contact;
            state.contact_menu.toggle();
            UpdateResult::none()
        }
        Message::ToggleSocialsMenu => {
            state.focus = Focus::Socials;
            state.socials_menu.toggle();
            UpdateResult::none()
        }
        Message::OpenLink { href, target } => {
            UpdateResult::action(UpdateAction::OpenLink { href, target })
        }
    }
}

fn open_slide(state: &AppState, index: usize) -> UpdateResult {
    match state.showcase.visible_projects().get(index) {
        Some(project) if !project.link.is_empty() => UpdateResult::message(Message::OpenLink {
            href: project.link.clone(),
            target: LinkTarget::NewContext,
        }),
        _ => UpdateResult::none(),
    }
}

fn link_message(link: Option<&'static folio_core::ExternalLink>) -> UpdateResult {
    match link {
        Some(link) => UpdateResult::message(Message::OpenLink {
            href: link.href.to_string(),
            target: link.target,
        }),
        None => UpdateResult::none(),
    }
}
