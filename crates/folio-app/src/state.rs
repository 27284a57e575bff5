//! Application state (Model in TEA pattern)

use std::sync::Arc;
use std::time::Instant;

use folio_core::{ExternalLink, Theme, CONTACT_LINKS, SOCIAL_LINKS};

use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::hit_map::HitMap;
use crate::showcase::ProjectShowcase;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    TagMenu,
    YearMenu,
    Carousel,
    Contact,
    ThemeToggle,
    Socials,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Search,
        Focus::TagMenu,
        Focus::YearMenu,
        Focus::Carousel,
        Focus::Contact,
        Focus::ThemeToggle,
        Focus::Socials,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Which popover keyboard navigation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMenu {
    Tag,
    Year,
    Contact,
    Socials,
}

/// Contact or socials popover. Keyboard navigation wraps.
#[derive(Debug, Clone, Default)]
pub struct LinkMenu {
    open: bool,
    cursor: usize,
    links: &'static [ExternalLink],
}

impl LinkMenu {
    pub fn new(links: &'static [ExternalLink]) -> Self {
        Self {
            open: false,
            cursor: 0,
            links,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn links(&self) -> &'static [ExternalLink] {
        self.links
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.cursor = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn cursor_up(&mut self) {
        let len = self.links.len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn cursor_down(&mut self) {
        let len = self.links.len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.links.len().saturating_sub(1);
    }

    pub fn selected(&self) -> Option<&'static ExternalLink> {
        self.links.get(self.cursor)
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Active colour scheme; only `Message::ToggleTheme` changes it
    pub theme: Theme,

    pub focus: Focus,

    /// Filterable project carousel
    pub showcase: ProjectShowcase,

    pub contact_menu: LinkMenu,

    pub socials_menu: LinkMenu,

    /// Clickable regions from the last frame
    pub hit_map: HitMap,

    /// Application settings from config file and CLI
    pub settings: Settings,

    /// Terminal size in (columns, rows)
    pub viewport: (u16, u16),

    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(settings: Settings, theme: Theme, clock: Arc<dyn Clock>) -> Self {
        Self {
            phase: AppPhase::Running,
            theme,
            focus: Focus::default(),
            showcase: ProjectShowcase::new(settings.showcase_config()),
            contact_menu: LinkMenu::new(CONTACT_LINKS),
            socials_menu: LinkMenu::new(SOCIAL_LINKS),
            hit_map: HitMap::new(),
            settings,
            viewport: (0, 0),
            clock,
        }
    }

    /// Default settings, dark theme and the system clock
    pub fn with_defaults() -> Self {
        Self::new(Settings::default(), Theme::default(), Arc::new(SystemClock))
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn cell_width_px(&self) -> f32 {
        self.settings.carousel.cell_width_px
    }

    /// The popover keyboard navigation targets: the focused control's menu
    /// if it is open, otherwise the first open one
    pub fn open_menu(&self) -> Option<OpenMenu> {
        let focused = match self.focus {
            Focus::TagMenu if self.showcase.tag_menu.is_open() => Some(OpenMenu::Tag),
            Focus::YearMenu if self.showcase.year_menu.is_open() => Some(OpenMenu::Year),
            Focus::Contact if self.contact_menu.is_open() => Some(OpenMenu::Contact),
            Focus::Socials if self.socials_menu.is_open() => Some(OpenMenu::Socials),
            _ => None,
        };
        focused.or_else(|| {
            if self.showcase.tag_menu.is_open() {
                Some(OpenMenu::Tag)
            } else if self.showcase.year_menu.is_open() {
                Some(OpenMenu::Year)
            } else if self.contact_menu.is_open() {
                Some(OpenMenu::Contact)
            } else if self.socials_menu.is_open() {
                Some(OpenMenu::Socials)
            } else {
                None
            }
        })
    }

    pub fn close_all_menus(&mut self) {
        self.showcase.close_menus();
        self.contact_menu.close();
        self.socials_menu.close();
    }

    /// Tear down per-mount state before exit
    pub fn quit(&mut self) {
        self.showcase.unmount();
        self.phase = AppPhase::Quitting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_wraps() {
        assert_eq!(Focus::Search.next(), Focus::TagMenu);
        assert_eq!(Focus::Carousel.next(), Focus::Contact);
        assert_eq!(Focus::Socials.next(), Focus::Search);
        assert_eq!(Focus::Search.previous(), Focus::Socials);
    }

    #[test]
    fn test_link_menu_cursor_wraps() {
        let mut menu = LinkMenu::new(CONTACT_LINKS);
        menu.toggle();
        menu.cursor_up();
        assert_eq!(menu.selected().map(|l| l.id), Some("telegram"));
        menu.cursor_down();
        assert_eq!(menu.selected().map(|l| l.id), Some("email"));
        menu.cursor_last();
        assert_eq!(menu.cursor(), 2);
    }

    #[test]
    fn test_open_menu_prefers_focused() {
        let mut state = AppState::with_defaults();
        assert_eq!(state.open_menu(), None);

        state.contact_menu.toggle();
        state.socials_menu.toggle();
        assert_eq!(state.open_menu(), Some(OpenMenu::Contact));

        state.focus = Focus::Socials;
        assert_eq!(state.open_menu(), Some(OpenMenu::Socials));

        state.close_all_menus();
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn test_quit_unmounts_showcase() {
        let mut state = AppState::with_defaults();
        state.showcase.mount();
        state.quit();
        assert!(state.should_quit());
        assert!(!state.showcase.is_mounted());
    }
}
