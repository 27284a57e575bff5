//! Persisted theme preference (preferences.toml)
//!
//! The only state folio keeps between runs. Read once at startup, written on
//! every theme change. Storage failures are logged and never surface to the UI.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use folio_core::prelude::*;
use folio_core::Theme;
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "folio";
const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Key-value storage for the theme preference
pub trait PreferenceStore: std::fmt::Debug + Send + Sync {
    /// The stored theme, `None` if nothing has been stored yet
    fn load_theme(&self) -> Result<Option<Theme>>;

    fn save_theme(&self, theme: Theme) -> Result<()>;
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct StoredPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// TOML file store, written atomically via a temp file and rename
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_local_dir>/folio/preferences.toml`
    pub fn default_location() -> Option<Self> {
        dirs::data_local_dir().map(|dir| Self::new(dir.join(APP_DIR).join(PREFERENCES_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn access_error(&self, reason: impl std::fmt::Display) -> Error {
        Error::preference_access(&self.path, reason.to_string())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> Result<Option<Theme>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.access_error(e))?;
        let stored: StoredPreferences =
            toml::from_str(&content).map_err(|e| self.access_error(e))?;

        stored.theme.map(|value| value.parse::<Theme>()).transpose()
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| self.access_error(e))?;
            }
        }

        let stored = StoredPreferences {
            theme: Some(theme.as_str().to_string()),
        };
        let content = toml::to_string(&stored)
            .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

        let temp_path = self.path.with_extension("toml.tmp");

        // Atomic write: write to temp, then rename
        std::fs::write(&temp_path, content).map_err(|e| self.access_error(e))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| self.access_error(e))?;

        debug!("Saved theme preference '{}' to {:?}", theme, self.path);
        Ok(())
    }
}

/// In-memory store for tests and for platforms with no data directory
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    theme: Mutex<Option<Theme>>,
    failing: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme: Mutex::new(Some(theme)),
            failing: false,
        }
    }

    /// A store whose every access fails, like a blocked storage backend
    pub fn failing() -> Self {
        Self {
            theme: Mutex::new(None),
            failing: true,
        }
    }

    pub fn stored(&self) -> Option<Theme> {
        *self.theme.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            Err(Error::preference_access("<memory>", "storage unavailable"))
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> Result<Option<Theme>> {
        self.check()?;
        Ok(self.stored())
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        self.check()?;
        *self.theme.lock().unwrap_or_else(|e| e.into_inner()) = Some(theme);
        Ok(())
    }
}

/// Theme to start with: the stored preference, else `fallback`
pub fn initial_theme(store: &dyn PreferenceStore, fallback: Theme) -> Theme {
    match store.load_theme() {
        Ok(Some(theme)) => theme,
        Ok(None) => fallback,
        Err(e) => {
            warn!("Failed to read theme preference: {}", e);
            fallback
        }
    }
}
