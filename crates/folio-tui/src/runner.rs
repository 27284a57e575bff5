//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::Instant;

use folio_app::config::PreferenceStore;
use folio_app::signals;
use folio_app::{
    process_message, ActionContext, AppState, LinkOpener, Message, Settings, SystemClock,
};
use folio_core::prelude::*;
use folio_core::Theme;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Everything the runner needs from the binary
#[derive(Debug)]
pub struct RunOptions {
    pub settings: Settings,
    /// Theme resolved from the stored preference (or its fallback)
    pub theme: Theme,
    pub preferences: Arc<dyn PreferenceStore>,
    pub opener: Arc<dyn LinkOpener>,
}

/// Run the TUI until the user quits or a shutdown signal arrives
pub async fn run(options: RunOptions) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_mouse() {
        warn!("{}; continuing with keyboard only", e);
    }

    let mut state = AppState::new(options.settings, options.theme, Arc::new(SystemClock));
    match term.size() {
        Ok(size) => state.viewport = (size.width, size.height),
        Err(e) => warn!("Failed to read terminal size: {}", e),
    }
    info!("folio starting (theme={})", state.theme);

    // Unified message channel (signal handler, project loader)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());
    let mut ctx = ActionContext::new(msg_tx, options.preferences, options.opener);

    process_message(&mut state, Message::LoadProjects, &mut ctx);

    let result = run_loop(&mut term, &mut state, msg_rx, &mut ctx);

    // Cancel in-flight work before tearing down the terminal
    ctx.shutdown();
    signal_task.abort();

    terminal::disable_mouse();
    ratatui::restore();

    if let Err(e) = &result {
        error!("Event loop exited with error: {}", e);
    } else {
        info!("folio exited cleanly");
    }
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    ctx: &mut ActionContext,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while !state.should_quit() {
        // Process background messages (loaded projects, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, ctx);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        match event::poll().context("Failed to read terminal event")? {
            Some(Message::Tick) => {
                last_tick = Instant::now();
                process_message(state, Message::Tick, ctx);
            }
            Some(message) => process_message(state, message, ctx),
            None => {}
        }

        // Busy input must not starve the frame tick
        if last_tick.elapsed() >= event::TICK_INTERVAL {
            last_tick = Instant::now();
            process_message(state, Message::Tick, ctx);
        }
    }
    Ok(())
}
