//! # folio-app - Application State and Orchestration
//!
//! The TEA (The Elm Architecture) layer of folio: `AppState` is the model,
//! [`handler::update`] the pure state transition, and [`actions`] the side
//! effects (project loading, theme persistence, opening links).
//!
//! Nothing here depends on the terminal library. The TUI converts crossterm
//! events into [`Message`]s and reads [`AppState`] to draw.
//!
//! ## Time
//!
//! Auto-advance, double-click windows and slide transitions are all deadlines
//! checked against an injected [`Clock`] on every `Message::Tick`.

pub mod actions;
pub mod carousel;
pub mod click;
pub mod clock;
pub mod config;
pub mod filter_menu;
pub mod gesture;
pub mod handler;
pub mod hit_map;
pub mod input;
pub mod message;
pub mod process;
pub mod showcase;
pub mod signals;
pub mod source;
pub mod state;

pub use actions::{ActionContext, LinkOpener, RecordingLinkOpener, SystemLinkOpener};
pub use carousel::{CarouselConfig, CarouselState};
pub use click::{ClickDisambiguator, ClickOutcome, ClickState};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Settings;
pub use gesture::{DragTracker, GestureConfig, GestureOutcome, SwipeDirection};
pub use handler::{update, UpdateAction, UpdateResult};
pub use hit_map::{Area, HitMap, HitTarget};
pub use input::{InputKey, PointerEvent, PointerKind};
pub use message::Message;
pub use process::process_message;
pub use showcase::{MountToken, ProjectShowcase, ShowcaseConfig};
pub use state::{AppPhase, AppState, Focus, LinkMenu, OpenMenu};
