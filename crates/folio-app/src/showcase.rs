//! Project showcase state: dataset, filters, dropdowns and the carousel
//!
//! Everything shown (visible projects, facet options, the count line) is
//! derived from the raw list and the filter state on every read. Every filter
//! mutation goes through [`ProjectShowcase::refilter`], which resets the
//! carousel to the first slide and resyncs the auto-advance timer.

use std::time::{Duration, Instant};

use folio_core::prelude::*;
use folio_core::{available_tags, available_years, FilterState, LoadStatus, Project};

use crate::carousel::{CarouselConfig, CarouselState};
use crate::click::DOUBLE_CLICK_WINDOW;
use crate::filter_menu::FilterMenu;
use crate::gesture::{DragTracker, GestureConfig, GestureOutcome, SwipeDirection};

/// Identifies one mount of the showcase. Load responses carrying any other
/// token are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountToken(u64);

impl MountToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Timings and thresholds for the showcase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseConfig {
    pub carousel: CarouselConfig,
    pub gesture: GestureConfig,
    pub double_click: Duration,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            gesture: GestureConfig::default(),
            double_click: DOUBLE_CLICK_WINDOW,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectShowcase {
    projects: Vec<Project>,
    load_status: LoadStatus,
    filter: FilterState,
    pub tag_menu: FilterMenu,
    pub year_menu: FilterMenu,
    pub carousel: CarouselState,
    pub drag: DragTracker,
    mount: Option<MountToken>,
    next_token: u64,
    config: ShowcaseConfig,
}

impl ProjectShowcase {
    pub fn new(config: ShowcaseConfig) -> Self {
        Self {
            tag_menu: FilterMenu::new(config.double_click),
            year_menu: FilterMenu::new(config.double_click),
            carousel: CarouselState::new(config.carousel),
            drag: DragTracker::new(config.gesture),
            config,
            ..Default::default()
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Start a fresh mount with default filter and carousel state.
    /// Returns the token the load response must carry.
    pub fn mount(&mut self) -> MountToken {
        self.next_token += 1;
        let token = MountToken(self.next_token);
        let next_token = self.next_token;
        *self = Self::new(self.config);
        self.next_token = next_token;
        self.mount = Some(token);
        debug!("Showcase mounted with token {}", token.id());
        token
    }

    /// Discard per-mount state and stop all timers
    pub fn unmount(&mut self) {
        if let Some(token) = self.mount.take() {
            debug!("Showcase unmounted (token {})", token.id());
        }
        self.carousel.disarm();
        self.tag_menu.close();
        self.year_menu.close();
        self.drag.cancel();
        self.filter.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    pub fn mount_token(&self) -> Option<MountToken> {
        self.mount
    }

    /// Apply a load response. Returns false if the response is stale.
    pub fn apply_loaded(
        &mut self,
        token: MountToken,
        result: std::result::Result<Vec<Project>, String>,
        now: Instant,
    ) -> bool {
        if self.mount != Some(token) {
            debug!(
                "Discarding project load for stale token {} (current: {:?})",
                token.id(),
                self.mount.map(|t| t.id())
            );
            return false;
        }

        match result {
            Ok(projects) => {
                info!("Loaded {} projects", projects.len());
                self.projects = projects;
                self.load_status = LoadStatus::Loaded;
            }
            Err(reason) => {
                warn!("Project load failed: {}", reason);
                self.projects.clear();
                self.load_status = LoadStatus::Failed { reason };
            }
        }
        self.refilter(now);
        true
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    // ─────────────────────────────────────────────────────────
    // Derived reads
    // ─────────────────────────────────────────────────────────

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        self.filter.apply(&self.projects)
    }

    pub fn visible_len(&self) -> usize {
        self.projects.iter().filter(|p| self.filter.matches(p)).count()
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.visible_projects()
            .into_iter()
            .nth(self.carousel.active_index())
    }

    pub fn available_tags(&self) -> Vec<String> {
        available_tags(&self.projects)
    }

    pub fn available_years(&self) -> Vec<i32> {
        available_years(&self.projects)
    }

    /// "N projects", or "Showing M of N projects" while any filter is active
    pub fn count_line(&self) -> String {
        let total = self.projects.len();
        if self.filter.has_active_filters() {
            format!("Showing {} of {} projects", self.visible_len(), total)
        } else {
            format!("{} projects", total)
        }
    }

    // ─────────────────────────────────────────────────────────
    // Filter mutations
    // ─────────────────────────────────────────────────────────

    pub fn set_search_text(&mut self, text: impl Into<String>, now: Instant) {
        self.filter.set_search_text(text);
        self.refilter(now);
    }

    pub fn push_search_char(&mut self, c: char, now: Instant) {
        let mut text = self.filter.search_text.clone();
        text.push(c);
        self.set_search_text(text, now);
    }

    pub fn pop_search_char(&mut self, now: Instant) {
        let mut text = self.filter.search_text.clone();
        if text.pop().is_some() {
            self.set_search_text(text, now);
        }
    }

    pub fn toggle_tag(&mut self, tag: &str, now: Instant) -> bool {
        let selected = self.filter.toggle_tag(tag);
        self.refilter(now);
        selected
    }

    pub fn toggle_year(&mut self, year: i32, now: Instant) -> bool {
        let selected = self.filter.toggle_year(year);
        self.refilter(now);
        selected
    }

    pub fn remove_tag(&mut self, tag: &str, now: Instant) {
        self.filter.remove_tag(tag);
        self.refilter(now);
    }

    pub fn remove_year(&mut self, year: i32, now: Instant) {
        self.filter.remove_year(year);
        self.refilter(now);
    }

    pub fn clear_all_filters(&mut self, now: Instant) {
        self.filter.clear();
        self.refilter(now);
    }

    /// Toggle the tag under the open tag menu's cursor
    pub fn toggle_tag_at_cursor(&mut self, now: Instant) -> Option<String> {
        let tag = self.available_tags().into_iter().nth(self.tag_menu.cursor())?;
        self.toggle_tag(&tag, now);
        Some(tag)
    }

    /// Toggle the year under the open year menu's cursor
    pub fn toggle_year_at_cursor(&mut self, now: Instant) -> Option<i32> {
        let year = self
            .available_years()
            .into_iter()
            .nth(self.year_menu.cursor())?;
        self.toggle_year(year, now);
        Some(year)
    }

    fn refilter(&mut self, now: Instant) {
        self.carousel.reset_to_start(now);
        self.carousel.sync_len(self.visible_len(), now);
        self.tag_menu.clamp_cursor(self.available_tags().len());
        self.year_menu.clamp_cursor(self.available_years().len());
    }

    // ─────────────────────────────────────────────────────────
    // Navigation and timers
    // ─────────────────────────────────────────────────────────

    pub fn previous_slide(&mut self, now: Instant) -> bool {
        self.carousel.previous(now)
    }

    pub fn next_slide(&mut self, now: Instant) -> bool {
        self.carousel.next(now)
    }

    pub fn click_tag_menu(&mut self, now: Instant) -> bool {
        self.tag_menu.click(now)
    }

    pub fn click_year_menu(&mut self, now: Instant) -> bool {
        self.year_menu.click(now)
    }

    pub fn close_menus(&mut self) {
        self.tag_menu.close();
        self.year_menu.close();
    }

    /// Fire expired click windows and the auto-advance timer
    pub fn tick(&mut self, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        self.tag_menu.poll(now);
        self.year_menu.poll(now);
        if self.drag.is_dragging() {
            return;
        }
        self.carousel.auto_tick(now);
    }

    /// Finish a drag gesture, navigating one slide on a swipe
    pub fn finish_drag(&mut self, now: Instant) -> GestureOutcome {
        let outcome = self.drag.end();
        match outcome {
            GestureOutcome::Swipe(SwipeDirection::Next) => {
                self.carousel.next(now);
            }
            GestureOutcome::Swipe(SwipeDirection::Previous) => {
                self.carousel.previous(now);
            }
            GestureOutcome::Tap { .. } | GestureOutcome::Ignored => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn loaded(projects: Vec<Project>, now: Instant) -> ProjectShowcase {
        let mut showcase = ProjectShowcase::default();
        let token = showcase.mount();
        assert!(showcase.apply_loaded(token, Ok(projects), now));
        showcase
    }

    fn react_and_go() -> Vec<Project> {
        vec![
            Project::new("Dashboard", "https://a.example")
                .with_tags(["React"])
                .with_year(2024),
            Project::new("Daemon", "https://b.example")
                .with_tags(["Go"])
                .with_year(2023),
        ]
    }

    fn three_projects() -> Vec<Project> {
        vec![
            Project::new("Alpha", "https://a.example")
                .with_tags(["React", "Node.js"])
                .with_year(2024),
            Project::new("Beta", "https://b.example")
                .with_tags(["Go"])
                .with_year(2023),
            Project::new("Gamma", "https://c.example")
                .with_description("A static site")
                .with_year(2022),
        ]
    }

    #[test]
    fn test_select_tag_then_clear_restores_list() {
        let t0 = Instant::now();
        let mut showcase = loaded(react_and_go(), t0);

        showcase.toggle_tag("React", t0);
        let visible = showcase.visible_projects();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].year, Some(2024));

        showcase.clear_all_filters(t0);
        assert_eq!(showcase.visible_projects().len(), 2);
    }

    #[test]
    fn test_clear_all_resets_text_and_selections() {
        let t0 = Instant::now();
        let mut showcase = loaded(three_projects(), t0);

        showcase.set_search_text("a", t0);
        showcase.toggle_tag("Go", t0);
        showcase.clear_all_filters(t0);

        assert!(showcase.filter().selected_tags.is_empty());
        assert!(showcase.filter().selected_years.is_empty());
        assert_eq!(showcase.filter().search_text, "");
        assert_eq!(showcase.visible_projects().len(), 3);
    }

    #[test]
    fn test_unresolved_load_shows_nothing() {
        let mut showcase = ProjectShowcase::default();
        showcase.mount();
        assert!(showcase.load_status().is_loading());
        assert_eq!(showcase.visible_len(), 0);
        assert!(showcase.active_project().is_none());
        assert!(!showcase.carousel.is_auto_advancing());
    }

    #[test]
    fn test_single_project_never_auto_advances() {
        let t0 = Instant::now();
        let mut showcase = loaded(three_projects(), t0);
        showcase.toggle_tag("Go", t0);
        assert_eq!(showcase.visible_len(), 1);
        assert!(!showcase.carousel.is_auto_advancing());

        showcase.tick(t0 + ms(30_000));
        assert_eq!(showcase.carousel.active_index(), 0);
    }

    #[test]
    fn test_every_filter_mutation_resets_slide() {
        let t0 = Instant::now();
        let mutations: Vec<Box<dyn Fn(&mut ProjectShowcase)>> = vec![
            Box::new(move |s| s.set_search_text("e", t0)),
            Box::new(move |s| {
                s.toggle_year(2024, t0);
            }),
            Box::new(move |s| s.remove_tag("Go", t0)),
            Box::new(move |s| s.remove_year(1999, t0)),
            Box::new(move |s| s.clear_all_filters(t0)),
            Box::new(move |s| s.push_search_char('x', t0)),
        ];

        for mutate in mutations {
            let mut showcase = loaded(three_projects(), t0);
            showcase.next_slide(t0);
            showcase.next_slide(t0);
            assert_eq!(showcase.carousel.active_index(), 2);
            mutate(&mut showcase);
            assert_eq!(showcase.carousel.active_index(), 0);
        }
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let t0 = Instant::now();
        let mut showcase = ProjectShowcase::default();
        let first = showcase.mount();
        let second = showcase.mount();

        assert!(!showcase.apply_loaded(first, Ok(three_projects()), t0));
        assert!(showcase.projects().is_empty());
        assert!(showcase.apply_loaded(second, Ok(react_and_go()), t0));
        assert_eq!(showcase.projects().len(), 2);
    }

    #[test]
    fn test_load_after_unmount_is_discarded() {
        let t0 = Instant::now();
        let mut showcase = ProjectShowcase::default();
        let token = showcase.mount();
        showcase.unmount();
        assert!(!showcase.apply_loaded(token, Ok(three_projects()), t0));
        assert!(showcase.projects().is_empty());
    }

    #[test]
    fn test_failed_load_degrades_to_empty() {
        let t0 = Instant::now();
        let mut showcase = ProjectShowcase::default();
        let token = showcase.mount();
        showcase.apply_loaded(token, Err("not found".into()), t0);

        assert_eq!(
            showcase.load_status(),
            &LoadStatus::Failed {
                reason: "not found".into()
            }
        );
        assert_eq!(showcase.visible_len(), 0);
        assert_eq!(showcase.count_line(), "0 projects");
    }

    #[test]
    fn test_count_line() {
        let t0 = Instant::now();
        let mut showcase = loaded(three_projects(), t0);
        assert_eq!(showcase.count_line(), "3 projects");
        showcase.toggle_year(2024, t0);
        assert_eq!(showcase.count_line(), "Showing 1 of 3 projects");
        showcase.clear_all_filters(t0);
        showcase.set_search_text("static", t0);
        assert_eq!(showcase.count_line(), "Showing 1 of 3 projects");
    }

    #[test]
    fn test_auto_advance_through_tick() {
        let t0 = Instant::now();
        let mut showcase = loaded(three_projects(), t0);
        showcase.tick(t0 + ms(5000));
        assert_eq!(showcase.carousel.active_index(), 1);
    }

    #[test]
    fn test_auto_advance_paused_while_dragging() {
        let t0 = Instant::now();
        let mut showcase = loaded(three_projects(), t0);
        showcase.drag.start(100.0);
        showcase.tick(t0 + ms(5000));
        assert_eq!(showcase.carousel.active_index(), 0);
    }

    #[test]
    fn test_menus_are_independent() {
        let t0 = Instant::now();
        let mut showcase = loaded(three_projects(), t0);

        showcase.click_tag_menu(t0);
        showcase.click_year_menu(t0 + ms(100));
        showcase.tick(t0 + ms(250));
        assert!(showcase.tag_menu.is_open());
        assert!(!showcase.year_menu.is_open());
        showcase.tick(t0 + ms(350));
        assert!(showcase.tag_menu.is_open());
        assert!(showcase.year_menu.is_open());
    }

    #[test]
    fn test_drag_swipes_one_slide_without_wrapping() {
        let t0 = Instant::now();
        let mut showcase = loaded(three_projects(), t0);

        showcase.drag.start(100.0);
        showcase.drag.move_to(300.0);
        assert_eq!(
            showcase.finish_drag(t0),
            GestureOutcome::Swipe(SwipeDirection::Previous)
        );
        assert_eq!(showcase.carousel.active_index(), 0);

        showcase.drag.start(300.0);
        showcase.drag.move_to(100.0);
        showcase.finish_drag(t0);
        assert_eq!(showcase.carousel.active_index(), 1);

        showcase.drag.start(300.0);
        showcase.drag.move_to(290.0);
        showcase.finish_drag(t0);
        assert_eq!(showcase.carousel.active_index(), 1);
    }

    #[test]
    fn test_toggle_at_cursor() {
        let t0 = Instant::now();
        let mut showcase = loaded(three_projects(), t0);
        showcase.tag_menu.toggle_open();
        showcase.tag_menu.cursor_down(3);
        assert_eq!(showcase.toggle_tag_at_cursor(t0), Some("Node.js".to_string()));
        assert!(showcase.filter().is_tag_selected("Node.js"));

        assert_eq!(showcase.toggle_year_at_cursor(t0), Some(2024));
    }
}
