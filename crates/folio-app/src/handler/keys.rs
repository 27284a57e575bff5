//! Key event handlers
//!
//! Open popovers take the navigation keys first; everything else is keyed on
//! the focused control.

use crate::input::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if let Some(msg) = handle_key_open_menu(state, key) {
        return Some(msg);
    }

    match key {
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        _ => {}
    }

    match state.focus {
        Focus::Search => handle_key_search(state, key),
        Focus::Carousel => handle_key_carousel(key),
        Focus::TagMenu | Focus::YearMenu | Focus::Contact | Focus::Socials => {
            handle_key_menu_button(key)
        }
        Focus::ThemeToggle => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleTheme),
            other => handle_key_global(other),
        },
    }
}

fn handle_key_open_menu(state: &AppState, key: InputKey) -> Option<Message> {
    state.open_menu()?;
    match key {
        InputKey::Esc => Some(Message::CloseMenus),
        InputKey::Up => Some(Message::MenuCursorUp),
        InputKey::Down => Some(Message::MenuCursorDown),
        InputKey::Enter | InputKey::Char(' ') if state.focus != Focus::Search => {
            Some(Message::MenuToggleSelected)
        }
        InputKey::Home => Some(Message::MenuCursorFirst),
        InputKey::End => Some(Message::MenuCursorLast),
        _ => None,
    }
}

fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::SearchPush(c)),
        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::Esc if !state.showcase.filter().search_text.is_empty() => {
            Some(Message::SearchClear)
        }
        InputKey::Down | InputKey::Enter => Some(Message::SetFocus(Focus::Carousel)),
        _ => None,
    }
}

fn handle_key_carousel(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::PreviousSlide),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextSlide),
        InputKey::Enter => Some(Message::OpenActiveSlide),
        other => handle_key_global(other),
    }
}

fn handle_key_menu_button(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') | InputKey::Down => {
            Some(Message::ToggleFocusedMenu)
        }
        other => handle_key_global(other),
    }
}

/// Shortcuts available whenever the search box does not own the keyboard
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('/') => Some(Message::SetFocus(Focus::Search)),
        InputKey::Char('c') => Some(Message::ClearAllFilters),
        _ => None,
    }
}
