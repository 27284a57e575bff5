//! Horizontal drag/swipe tracking for the carousel
//!
//! Pointer and touch input are unified: callers feed horizontal positions in
//! pixels (terminal columns are converted with `cell_width_px` upstream).

/// Displacement above which a gesture navigates one slide
pub const DRAG_THRESHOLD_PX: f32 = 20.0;

/// Displacement above which the slide's link is no longer followed
pub const LINK_SUPPRESS_PX: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub drag_threshold_px: f32,
    pub link_suppress_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: DRAG_THRESHOLD_PX,
            link_suppress_px: LINK_SUPPRESS_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Result of finishing a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Moved past the drag threshold
    Swipe(SwipeDirection),
    /// Treated as a tap; the link is followed unless suppressed
    Tap { link_suppressed: bool },
    /// No gesture was in progress
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    config: GestureConfig,
    /// `None` is the neutral sentinel: no gesture in progress
    start_x: Option<f32>,
    end_x: Option<f32>,
    link_suppressed: bool,
}

impl DragTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// True once the gesture has moved far enough to block link activation
    pub fn link_suppressed(&self) -> bool {
        self.link_suppressed
    }

    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = Some(x);
        self.link_suppressed = false;
    }

    /// Record the current position. Returns true if link activation is now
    /// suppressed for this gesture.
    pub fn move_to(&mut self, x: f32) -> bool {
        let Some(start) = self.start_x else {
            return false;
        };
        self.end_x = Some(x);
        if (start - x).abs() > self.config.link_suppress_px {
            self.link_suppressed = true;
        }
        self.link_suppressed
    }

    /// Finish the gesture and reset to the neutral sentinel.
    ///
    /// `start - end > threshold` swipes to the next slide, `< -threshold` to
    /// the previous one.
    pub fn end(&mut self) -> GestureOutcome {
        let (Some(start), Some(end)) = (self.start_x, self.end_x) else {
            self.reset();
            return GestureOutcome::Ignored;
        };
        let displacement = start - end;
        let link_suppressed = self.link_suppressed;
        self.reset();

        if displacement.abs() > self.config.drag_threshold_px {
            if displacement > 0.0 {
                GestureOutcome::Swipe(SwipeDirection::Next)
            } else {
                GestureOutcome::Swipe(SwipeDirection::Previous)
            }
        } else {
            GestureOutcome::Tap { link_suppressed }
        }
    }

    /// Abandon the gesture without navigating (pointer left the carousel)
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.start_x = None;
        self.end_x = None;
        self.link_suppressed = false;
    }
}
