//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widget and full-screen tests can assert on
//! buffer contents without a real terminal.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(Stacks::new(&DARK), term.area());
//! assert!(term.buffer_contains("PostgreSQL"));
//! ```

use std::sync::Arc;

use folio_app::{AppState, ManualClock, Settings};
use folio_core::{Project, Theme};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Wide terminal: three slides per view
pub const WIDE_WIDTH: u16 = 120;
pub const TALL_HEIGHT: u16 = 48;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    /// The underlying ratatui terminal with TestBackend.
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a frame with a custom rendering function (e.g. `render::view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| get_line_content(buffer, y).contains(text))
    }

    /// Get the content of a specific cell
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        self.buffer().cell((x, y)).map(|cell| cell.symbol())
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

/// Get content of a specific line
fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState on a manual clock, dark theme, default settings
pub fn create_test_state() -> (AppState, ManualClock) {
    let clock = ManualClock::new();
    let state = AppState::new(Settings::default(), Theme::Dark, Arc::new(clock.clone()));
    (state, clock)
}

/// AppState with `projects` already loaded
pub fn create_loaded_state(projects: Vec<Project>) -> (AppState, ManualClock) {
    let (mut state, clock) = create_test_state();
    let token = state.showcase.mount();
    let now = state.now();
    state.showcase.apply_loaded(token, Ok(projects), now);
    (state, clock)
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new("Storefront", "https://shop.example")
            .with_description("E-commerce site with a custom checkout")
            .with_tags(["React", "Node.js"])
            .with_year(2024),
        Project::new("Link Shortener", "https://short.example")
            .with_description("Tiny URL service")
            .with_tags(["Go"])
            .with_year(2023),
        Project::new("Blog Engine", "https://blog.example")
            .with_description("Markdown blog with server rendering")
            .with_tags(["Node.js", "EJS"])
            .with_year(2022)
            .with_image("https://blog.example/cover.png"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert_eq!(term.find_line("Hello"), Some(0));
        assert_eq!(term.cell_at(0, 0), Some("H"));
    }

    #[test]
    fn test_loaded_state_has_projects() {
        let (state, _clock) = create_loaded_state(sample_projects());
        assert_eq!(state.showcase.visible_len(), 3);
    }
}
