//! folio - a terminal portfolio with a filterable project carousel
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use folio_app::config::{
    initial_theme, load_settings_or_default, FilePreferenceStore, MemoryPreferenceStore,
    PreferenceStore,
};
use folio_app::SystemLinkOpener;
use folio_core::Theme;
use folio_tui::RunOptions;
use tracing::{error, info, warn};

/// folio - a terminal portfolio with a filterable project carousel
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A terminal portfolio with a filterable project carousel", long_about = None)]
struct Args {
    /// Project collection: a JSON file path or a file:// URL
    #[arg(long, value_name = "PATH|URL")]
    projects: Option<String>,

    /// Start with this theme instead of the stored preference (light or dark)
    #[arg(long, value_name = "THEME")]
    theme: Option<Theme>,

    /// Settings file (default: <config_dir>/folio/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging (to file, since the TUI owns stdout)
    folio_core::logging::init()?;

    let mut settings = load_settings_or_default(args.config.as_deref());
    if let Some(source) = args.projects {
        settings.projects.source = source;
    }
    info!("Project source: {}", settings.projects.source);

    let preferences: Arc<dyn PreferenceStore> = match FilePreferenceStore::default_location() {
        Some(store) => {
            info!("Preferences: {}", store.path().display());
            Arc::new(store)
        }
        None => {
            warn!("No data directory available; theme changes will not be saved");
            Arc::new(MemoryPreferenceStore::new())
        }
    };
    let theme = args
        .theme
        .unwrap_or_else(|| initial_theme(preferences.as_ref(), settings.ui.theme));

    let result = folio_tui::run(RunOptions {
        settings,
        theme,
        preferences,
        opener: Arc::new(SystemLinkOpener),
    })
    .await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("folio exiting");
    Ok(result?)
}
