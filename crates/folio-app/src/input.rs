//! Terminal-independent input events.
//!
//! The TUI converts crossterm key and mouse events into these types at the
//! boundary so the state machine never depends on the terminal library.

/// Keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+c quits)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
}

/// Mouse button / motion phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Moved with the primary button held
    Drag,
    /// Primary button released
    Up,
    /// Moved with no button held
    Moved,
}

/// A pointer event in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, column: u16, row: u16) -> Self {
        Self { kind, column, row }
    }

    pub fn down(column: u16, row: u16) -> Self {
        Self::new(PointerKind::Down, column, row)
    }

    pub fn drag(column: u16, row: u16) -> Self {
        Self::new(PointerKind::Drag, column, row)
    }

    pub fn up(column: u16, row: u16) -> Self {
        Self::new(PointerKind::Up, column, row)
    }

    /// Horizontal position in pixels for gesture thresholds
    pub fn x_px(&self, cell_width_px: f32) -> f32 {
        f32::from(self.column) * cell_width_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_char_differs_from_plain_char() {
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_pointer_x_in_pixels() {
        let event = PointerEvent::down(10, 3);
        assert_eq!(event.x_px(8.0), 80.0);
        assert_eq!(event.kind, PointerKind::Down);
    }
}
