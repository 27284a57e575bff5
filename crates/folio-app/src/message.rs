//! Message types for the application (TEA pattern)

use folio_core::{LinkTarget, Project};

use crate::input::{InputKey, PointerEvent};
use crate::showcase::MountToken;
use crate::state::Focus;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Terminal Events
    // ─────────────────────────────────────────────────────────
    /// Keyboard event from terminal
    Key(InputKey),
    /// Mouse event from terminal
    Pointer(PointerEvent),
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
    /// Timer tick; drives every deadline in the app
    Tick,

    // ─────────────────────────────────────────────────────────
    // Application Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Quit (signal handler, Ctrl+C, `q`)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    SetFocus(Focus),

    // ─────────────────────────────────────────────────────────
    // Search & Filters
    // ─────────────────────────────────────────────────────────
    SearchPush(char),
    SearchBackspace,
    SearchClear,
    ToggleTag(String),
    ToggleYear(i32),
    RemoveTag(String),
    RemoveYear(i32),
    ClearAllFilters,

    // ─────────────────────────────────────────────────────────
    // Carousel
    // ─────────────────────────────────────────────────────────
    PreviousSlide,
    NextSlide,
    /// Follow the link of the active slide
    OpenActiveSlide,
    /// Follow the link of a slide by index into the filtered list
    OpenSlide(usize),

    // ─────────────────────────────────────────────────────────
    // Dropdowns
    // ─────────────────────────────────────────────────────────
    /// Pointer click on the tag menu button (subject to double-click detection)
    ClickTagMenu,
    ClickYearMenu,
    /// Keyboard toggle of the menu owned by the focused button
    ToggleFocusedMenu,
    /// Escape / outside click
    CloseMenus,
    MenuCursorUp,
    MenuCursorDown,
    MenuCursorFirst,
    MenuCursorLast,
    /// Toggle the option under the cursor of the open menu
    MenuToggleSelected,

    // ─────────────────────────────────────────────────────────
    // Project Loading
    // ─────────────────────────────────────────────────────────
    /// Mount the showcase and start loading the dataset
    LoadProjects,
    /// Result of a load started for `token`
    ProjectsLoaded {
        token: MountToken,
        result: Result<Vec<Project>, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Header & Footer
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
    ToggleContactMenu,
    ToggleSocialsMenu,
    /// Open an external link with the platform opener
    OpenLink {
        href: String,
        target: LinkTarget,
    },
}
