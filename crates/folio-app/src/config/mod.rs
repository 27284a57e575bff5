//! Configuration and persisted preferences
//!
//! - `config.toml` - settings (`<config_dir>/folio/config.toml` or `--config`)
//! - `preferences.toml` - the stored theme (`<data_local_dir>/folio/`)

pub mod preferences;
pub mod settings;
pub mod types;

pub use preferences::{initial_theme, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use settings::{default_config_path, load_settings, load_settings_or_default};
pub use types::*;
