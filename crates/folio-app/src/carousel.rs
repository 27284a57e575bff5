//! Carousel position, slide transition and auto-advance timer
//!
//! The carousel only knows how many slides the filtered list has. Manual
//! navigation clamps to the bounds; the auto-advance timer wraps from the last
//! slide back to the first.

use std::time::{Duration, Instant};

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub auto_advance: Duration,
    pub transition: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance: AUTO_ADVANCE_INTERVAL,
            transition: TRANSITION_DURATION,
        }
    }
}

/// In-flight slide animation, in slide units
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f32,
    to: f32,
    started: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    active_index: usize,
    len: usize,
    /// Width of one slide in columns, measured on every render
    slide_width: u16,
    config: CarouselConfig,
    transition: Option<Transition>,
    /// Next auto-advance deadline; only `Some` while `len > 1`
    next_due: Option<Instant>,
}

impl CarouselState {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn slide_width(&self) -> u16 {
        self.slide_width
    }

    pub fn set_slide_width(&mut self, width: u16) {
        self.slide_width = width;
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    pub fn can_go_previous(&self) -> bool {
        self.active_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.len > 0 && self.active_index < self.len - 1
    }

    /// Track the length of the filtered list.
    ///
    /// The auto-advance timer is re-armed whenever the length changes, and
    /// disarmed when one slide or fewer remain.
    pub fn sync_len(&mut self, len: usize, now: Instant) {
        if len == self.len {
            return;
        }
        self.len = len;
        if self.active_index >= len {
            self.jump_to(len.saturating_sub(1));
        }
        self.next_due = (len > 1).then(|| now + self.config.auto_advance);
    }

    /// Return to the first slide, animating from wherever the track is
    pub fn reset_to_start(&mut self, now: Instant) {
        self.go_to(0, now);
    }

    /// Step back one slide. Returns false at the first slide.
    pub fn previous(&mut self, now: Instant) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.go_to(self.active_index - 1, now);
        true
    }

    /// Step forward one slide. Returns false at the last slide.
    pub fn next(&mut self, now: Instant) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.go_to(self.active_index + 1, now);
        true
    }

    /// Advance if the timer is due. Returns true when the slide changed.
    pub fn auto_tick(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due || self.len <= 1 {
            return false;
        }

        let target = (self.active_index + 1) % self.len;
        self.go_to(target, now);

        // Keep the cadence, but do not fire a burst after a long stall
        let mut next = due + self.config.auto_advance;
        if next <= now {
            next = now + self.config.auto_advance;
        }
        self.next_due = Some(next);
        true
    }

    /// Stop the timer and any animation
    pub fn disarm(&mut self) {
        self.next_due = None;
        self.transition = None;
    }

    /// Current track position in slide units, eased toward `active_index`
    pub fn position(&self, now: Instant) -> f32 {
        let target = self.active_index as f32;
        let Some(transition) = self.transition else {
            return target;
        };
        let total = self.config.transition.as_secs_f32();
        if total <= 0.0 {
            return target;
        }
        let elapsed = now.saturating_duration_since(transition.started).as_secs_f32();
        let t = (elapsed / total).clamp(0.0, 1.0);
        transition.from + (transition.to - transition.from) * ease_out_cubic(t)
    }

    /// Horizontal offset of the slide track in columns
    pub fn offset_columns(&self, now: Instant) -> u32 {
        let offset = f64::from(self.position(now)) * f64::from(self.slide_width);
        offset.round().max(0.0) as u32
    }

    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.transition
            .map(|t| now.saturating_duration_since(t.started) < self.config.transition)
            .unwrap_or(false)
    }

    fn go_to(&mut self, index: usize, now: Instant) {
        if index == self.active_index {
            return;
        }
        let from = self.position(now);
        self.active_index = index;
        self.transition = Some(Transition {
            from,
            to: index as f32,
            started: now,
        });
    }

    fn jump_to(&mut self, index: usize) {
        self.active_index = index;
        self.transition = None;
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
