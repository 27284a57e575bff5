//! Open/closed state of one filter dropdown

use std::time::{Duration, Instant};

use crate::click::{ClickDisambiguator, ClickOutcome};

#[derive(Debug, Clone, Default)]
pub struct FilterMenu {
    open: bool,
    /// Highlighted option for keyboard selection
    cursor: usize,
    click: ClickDisambiguator,
}

impl FilterMenu {
    pub fn new(double_click_window: Duration) -> Self {
        Self {
            open: false,
            cursor: 0,
            click: ClickDisambiguator::new(double_click_window),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_click_pending(&self) -> bool {
        self.click.is_pending()
    }

    /// Feed a click on the menu button. Returns true if the menu toggled now.
    pub fn click(&mut self, now: Instant) -> bool {
        self.poll(now);
        match self.click.on_click(now) {
            ClickOutcome::Toggle => {
                self.toggle_open();
                true
            }
            ClickOutcome::Armed => false,
        }
    }

    /// Fire an expired single-click. Returns true if the menu toggled.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.click.poll(now) {
            self.toggle_open();
            true
        } else {
            false
        }
    }

    /// Keyboard toggle, bypassing the click window. Drops any pending click.
    pub fn toggle_open(&mut self) {
        self.click.cancel();
        self.open = !self.open;
        if self.open {
            self.cursor = 0;
        }
    }

    /// Close and drop any pending click
    pub fn close(&mut self) {
        self.open = false;
        self.click.cancel();
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, option_count: usize) {
        if option_count == 0 {
            self.cursor = 0;
        } else if self.cursor + 1 < option_count {
            self.cursor += 1;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self, option_count: usize) {
        self.cursor = option_count.saturating_sub(1);
    }

    /// Keep the cursor inside a list that may have shrunk
    pub fn clamp_cursor(&mut self, option_count: usize) {
        if self.cursor >= option_count {
            self.cursor = option_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_single_click_opens_after_window() {
        let t0 = Instant::now();
        let mut menu = FilterMenu::default();

        assert!(!menu.click(t0));
        assert!(!menu.is_open());
        assert!(!menu.poll(t0 + ms(200)));
        assert!(menu.poll(t0 + ms(250)));
        assert!(menu.is_open());
    }

    #[test]
    fn test_double_click_toggles_immediately() {
        let t0 = Instant::now();
        let mut menu = FilterMenu::default();

        menu.click(t0);
        assert!(menu.click(t0 + ms(120)));
        assert!(menu.is_open());
        // Pending single click was cancelled
        assert!(!menu.poll(t0 + ms(500)));
        assert!(menu.is_open());
    }

    #[test]
    fn test_click_after_window_fires_pending_first() {
        let t0 = Instant::now();
        let mut menu = FilterMenu::default();

        menu.click(t0);
        // No tick in between: the expired click still opens the menu
        assert!(!menu.click(t0 + ms(400)));
        assert!(menu.is_open());
        assert!(menu.poll(t0 + ms(650)));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_cancels_pending_click() {
        let t0 = Instant::now();
        let mut menu = FilterMenu::default();
        menu.click(t0);
        menu.close();
        assert!(!menu.poll(t0 + ms(300)));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_keyboard_toggle_drops_pending_click() {
        let t0 = Instant::now();
        let mut menu = FilterMenu::default();
        menu.click(t0);
        menu.toggle_open();
        assert!(menu.is_open());
        assert!(!menu.is_click_pending());
        assert!(!menu.poll(t0 + ms(300)));
        assert!(menu.is_open());
    }

    #[test]
    fn test_cursor_bounds() {
        let mut menu = FilterMenu::default();
        menu.cursor_up();
        assert_eq!(menu.cursor(), 0);
        menu.cursor_down(3);
        menu.cursor_down(3);
        menu.cursor_down(3);
        assert_eq!(menu.cursor(), 2);
        menu.clamp_cursor(1);
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn test_opening_resets_cursor() {
        let mut menu = FilterMenu::default();
        menu.toggle_open();
        menu.cursor_down(5);
        menu.toggle_open();
        menu.toggle_open();
        assert_eq!(menu.cursor(), 0);
    }
}
