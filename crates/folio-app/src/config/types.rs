//! Configuration types for folio
//!
//! Defines `Settings` (config.toml) and its sections. Every section is
//! `#[serde(default)]` so a partial file only overrides what it names.

use std::time::Duration;

use folio_core::Theme;
use serde::{Deserialize, Serialize};

use crate::carousel::CarouselConfig;
use crate::gesture::GestureConfig;
use crate::showcase::ShowcaseConfig;

/// Location of the bundled dataset, relative to the working directory
pub const DEFAULT_PROJECTS_SOURCE: &str = "public/projects.json";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub projects: ProjectsSettings,

    #[serde(default)]
    pub carousel: CarouselSettings,

    #[serde(default)]
    pub menus: MenuSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Timings and thresholds handed to the showcase
    pub fn showcase_config(&self) -> ShowcaseConfig {
        ShowcaseConfig {
            carousel: CarouselConfig {
                auto_advance: Duration::from_millis(self.carousel.auto_advance_ms),
                transition: Duration::from_millis(self.carousel.transition_ms),
            },
            gesture: GestureConfig {
                drag_threshold_px: self.carousel.drag_threshold_px,
                link_suppress_px: self.carousel.link_suppress_px,
            },
            double_click: Duration::from_millis(self.menus.double_click_ms),
        }
    }
}

/// Where the project dataset comes from
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectsSettings {
    /// File path or `file://` URL of the JSON array
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for ProjectsSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

fn default_source() -> String {
    DEFAULT_PROJECTS_SOURCE.to_string()
}

/// Carousel timing and gesture thresholds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CarouselSettings {
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,

    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Horizontal travel (px) that turns a drag into a swipe
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: f32,

    /// Horizontal travel (px) after which a slide's link is not followed
    #[serde(default = "default_link_suppress_px")]
    pub link_suppress_px: f32,

    /// Pixels per terminal column when converting pointer positions
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            transition_ms: default_transition_ms(),
            drag_threshold_px: default_drag_threshold_px(),
            link_suppress_px: default_link_suppress_px(),
            cell_width_px: default_cell_width_px(),
        }
    }
}

fn default_auto_advance_ms() -> u64 {
    5000
}

fn default_transition_ms() -> u64 {
    500
}

fn default_drag_threshold_px() -> f32 {
    20.0
}

fn default_link_suppress_px() -> f32 {
    5.0
}

fn default_cell_width_px() -> f32 {
    8.0
}

/// Dropdown button behaviour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuSettings {
    /// Window in which a second click counts as a double click
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            double_click_ms: default_double_click_ms(),
        }
    }
}

fn default_double_click_ms() -> u64 {
    250
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme used when no preference has been stored yet
    #[serde(default)]
    pub theme: Theme,
}
