//! folio-tui - Terminal UI for folio
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal, converts crossterm events into [`folio_app::Message`]s, and
//! draws [`folio_app::AppState`] every frame, recording clickable regions in
//! the state's hit map as it goes.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, RunOptions};
