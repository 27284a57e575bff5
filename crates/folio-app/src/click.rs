//! Single-click vs double-click disambiguation for the filter menu buttons
//!
//! A first click arms a short grace window. A second click inside the window
//! toggles the menu immediately and cancels the pending single-click action;
//! otherwise the single-click action fires when the window expires.

use std::time::{Duration, Instant};

/// Default grace window for detecting a second click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(250);

/// Explicit two-state machine, one per menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickState {
    #[default]
    Idle,
    AwaitingSecondClick {
        deadline: Instant,
    },
}

/// What a click did right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click; the toggle fires when the window expires
    Armed,
    /// Second click inside the window; toggle now
    Toggle,
}

#[derive(Debug, Clone)]
pub struct ClickDisambiguator {
    state: ClickState,
    window: Duration,
}

impl ClickDisambiguator {
    pub fn new(window: Duration) -> Self {
        Self {
            state: ClickState::Idle,
            window,
        }
    }

    pub fn state(&self) -> ClickState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ClickState::AwaitingSecondClick { .. })
    }

    /// Register a click at `now`.
    ///
    /// Callers run [`poll`](Self::poll) first so an expired window has
    /// already fired; a stale deadline here is treated as a fresh first click.
    pub fn on_click(&mut self, now: Instant) -> ClickOutcome {
        match self.state {
            ClickState::AwaitingSecondClick { deadline } if now < deadline => {
                self.state = ClickState::Idle;
                ClickOutcome::Toggle
            }
            _ => {
                self.state = ClickState::AwaitingSecondClick {
                    deadline: now + self.window,
                };
                ClickOutcome::Armed
            }
        }
    }

    /// Fire the pending single-click action if its window has expired.
    /// Returns true when the caller should toggle.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            ClickState::AwaitingSecondClick { deadline } if now >= deadline => {
                self.state = ClickState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending action without firing it
    pub fn cancel(&mut self) {
        self.state = ClickState::Idle;
    }
}

impl Default for ClickDisambiguator {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_click_fires_after_window() {
        let t0 = Instant::now();
        let mut click = ClickDisambiguator::default();

        assert_eq!(click.on_click(t0), ClickOutcome::Armed);
        assert!(click.is_pending());

        assert!(!click.poll(t0 + Duration::from_millis(249)));
        assert!(click.poll(t0 + Duration::from_millis(250)));
        assert_eq!(click.state(), ClickState::Idle);
    }

    #[test]
    fn test_poll_fires_only_once() {
        let t0 = Instant::now();
        let mut click = ClickDisambiguator::default();
        click.on_click(t0);

        assert!(click.poll(t0 + Duration::from_millis(300)));
        assert!(!click.poll(t0 + Duration::from_millis(600)));
    }

    #[test]
    fn test_double_click_toggles_immediately_and_cancels_pending() {
        let t0 = Instant::now();
        let mut click = ClickDisambiguator::default();

        click.on_click(t0);
        let outcome = click.on_click(t0 + Duration::from_millis(100));
        assert_eq!(outcome, ClickOutcome::Toggle);

        // The single-click action never fires afterwards
        assert!(!click.poll(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn test_click_after_expired_window_rearms() {
        let t0 = Instant::now();
        let mut click = ClickDisambiguator::default();

        click.on_click(t0);
        let outcome = click.on_click(t0 + Duration::from_millis(400));
        assert_eq!(outcome, ClickOutcome::Armed);
        assert!(click.is_pending());
    }

    #[test]
    fn test_cancel_discards_pending() {
        let t0 = Instant::now();
        let mut click = ClickDisambiguator::default();
        click.on_click(t0);
        click.cancel();
        assert!(!click.poll(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_custom_window() {
        let t0 = Instant::now();
        let mut click = ClickDisambiguator::new(Duration::from_millis(50));
        click.on_click(t0);
        assert!(click.poll(t0 + Duration::from_millis(50)));
    }
}
