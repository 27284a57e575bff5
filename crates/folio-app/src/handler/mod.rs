//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers, keyed on the focused control
//! - `pointer`: Mouse handling (outside clicks, carousel drags, hit targets)

pub(crate) mod keys;
pub(crate) mod pointer;
pub(crate) mod update;


use folio_core::{LinkTarget, Theme};

use crate::message::Message;
use crate::showcase::MountToken;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Read the project dataset in the background and reply with
    /// `Message::ProjectsLoaded { token, .. }`
    LoadProjects { token: MountToken, source: String },

    /// Write the theme preference
    PersistTheme(Theme),

    /// Hand a URL to the platform opener
    OpenLink { href: String, target: LinkTarget },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
