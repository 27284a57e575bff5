//! Action handlers: side effects requested by `update()`
//!
//! `update()` stays pure; everything touching the filesystem, the platform
//! opener or background tasks happens here.

use std::sync::{Arc, Mutex};

use folio_core::prelude::*;
use folio_core::LinkTarget;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::PreferenceStore;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::showcase::MountToken;
use crate::source::{load_projects, ProjectSourceSpec};

/// Hands URLs to something that can open them
pub trait LinkOpener: std::fmt::Debug + Send + Sync {
    fn open(&self, href: &str) -> std::io::Result<()>;
}

/// Platform-default opener (`open`, `xdg-open`, `cmd /C start`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, href: &str) -> std::io::Result<()> {
        open_url(href)
    }
}

/// Records opened URLs instead of launching anything
#[derive(Debug, Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, href: &str) -> std::io::Result<()> {
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(href.to_string());
        Ok(())
    }
}

/// Everything action handlers need from the event loop
#[derive(Debug)]
pub struct ActionContext {
    pub msg_tx: mpsc::Sender<Message>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub opener: Arc<dyn LinkOpener>,
    load_task: Option<JoinHandle<()>>,
}

impl ActionContext {
    pub fn new(
        msg_tx: mpsc::Sender<Message>,
        preferences: Arc<dyn PreferenceStore>,
        opener: Arc<dyn LinkOpener>,
    ) -> Self {
        Self {
            msg_tx,
            preferences,
            opener,
            load_task: None,
        }
    }

    /// True while a project load is in flight
    pub fn is_loading(&self) -> bool {
        self.load_task
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    /// Abort background work before exit
    pub fn shutdown(&mut self) {
        if let Some(task) = self.load_task.take() {
            if !task.is_finished() {
                debug!("Aborting in-flight project load");
            }
            task.abort();
        }
    }
}

/// Execute an action returned by `update()`
pub fn handle_action(action: UpdateAction, ctx: &mut ActionContext) {
    match action {
        UpdateAction::LoadProjects { token, source } => spawn_load(ctx, token, &source),

        UpdateAction::PersistTheme(theme) => {
            if let Err(e) = ctx.preferences.save_theme(theme) {
                warn!("Failed to persist theme preference: {}", e);
            }
        }

        UpdateAction::OpenLink { href, target } => open_link(ctx, &href, target),
    }
}

fn spawn_load(ctx: &mut ActionContext, token: MountToken, source: &str) {
    // A newer mount supersedes any load still in flight
    if ctx.is_loading() {
        debug!("Superseding in-flight project load");
    }
    if let Some(task) = ctx.load_task.take() {
        task.abort();
    }

    let source = match ProjectSourceSpec::parse(source) {
        Ok(spec) => spec.into_source(),
        Err(e) => {
            warn!("Invalid project source: {}", e);
            let msg = Message::ProjectsLoaded {
                token,
                result: Err(e.to_string()),
            };
            if let Err(e) = ctx.msg_tx.try_send(msg) {
                warn!("Failed to report project load failure: {}", e);
            }
            return;
        }
    };

    let tx = ctx.msg_tx.clone();
    ctx.load_task = Some(tokio::spawn(async move {
        let result = load_projects(&source).await;
        if tx
            .send(Message::ProjectsLoaded { token, result })
            .await
            .is_err()
        {
            debug!("Event loop gone before projects finished loading");
        }
    }));
}

fn open_link(ctx: &ActionContext, href: &str, target: LinkTarget) {
    match target.rel() {
        Some(rel) => debug!("Opening {} in a new context (rel={})", href, rel),
        None => debug!("Opening {}", href),
    }
    if let Err(e) = ctx.opener.open(href) {
        warn!("Failed to open {}: {}", href, e);
    }
}

/// Open a URL with the platform-default handler
fn open_url(url: &str) -> std::io::Result<()> {
    use std::process::{Command, Stdio};

    #[cfg(target_os = "macos")]
    {
        Command::new("open")
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open")
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "start", "", url])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no URL opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryPreferenceStore;
    use folio_core::Theme;
    use tempfile::tempdir;

    fn context(
        preferences: Arc<dyn PreferenceStore>,
    ) -> (ActionContext, mpsc::Receiver<Message>, Arc<RecordingLinkOpener>) {
        let (tx, rx) = mpsc::channel(8);
        let opener = Arc::new(RecordingLinkOpener::new());
        let ctx = ActionContext::new(tx, preferences, opener.clone());
        (ctx, rx, opener)
    }

    #[tokio::test]
    async fn test_load_projects_posts_result_with_token() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("projects.json");
        std::fs::write(&path, r#"[{"title":"A","link":"https://a.example"}]"#).unwrap();

        let (mut ctx, mut rx, _) = context(Arc::new(MemoryPreferenceStore::new()));
        let token = MountToken::new(7);
        handle_action(
            UpdateAction::LoadProjects {
                token,
                source: path.display().to_string(),
            },
            &mut ctx,
        );

        match rx.recv().await {
            Some(Message::ProjectsLoaded {
                token: got,
                result: Ok(projects),
            }) => {
                assert_eq!(got, token);
                assert_eq!(projects.len(), 1);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_new_load_supersedes_in_flight_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("projects.json");
        std::fs::write(&path, r#"[{"title":"A","link":"https://a.example"}]"#).unwrap();
        let source = path.display().to_string();

        let (mut ctx, mut rx, _) = context(Arc::new(MemoryPreferenceStore::new()));
        handle_action(
            UpdateAction::LoadProjects {
                token: MountToken::new(1),
                source: source.clone(),
            },
            &mut ctx,
        );
        assert!(ctx.is_loading());

        handle_action(
            UpdateAction::LoadProjects {
                token: MountToken::new(2),
                source,
            },
            &mut ctx,
        );

        match rx.recv().await {
            Some(Message::ProjectsLoaded { token, .. }) => {
                assert_eq!(token, MountToken::new(2));
            }
            other => panic!("unexpected message: {:?}", other),
        }
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_invalid_source_reports_failure() {
        let (mut ctx, mut rx, _) = context(Arc::new(MemoryPreferenceStore::new()));
        handle_action(
            UpdateAction::LoadProjects {
                token: MountToken::new(1),
                source: "https://example.com/projects.json".into(),
            },
            &mut ctx,
        );

        match rx.recv().await {
            Some(Message::ProjectsLoaded { result: Err(_), .. }) => {}
            other => panic!("unexpected message: {:?}", other),
        }
        assert!(!ctx.is_loading());
    }

    #[tokio::test]
    async fn test_persist_theme_writes_store() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let (mut ctx, _rx, _) = context(store.clone());
        handle_action(UpdateAction::PersistTheme(Theme::Light), &mut ctx);
        assert_eq!(store.stored(), Some(Theme::Light));
    }

    #[tokio::test]
    async fn test_persist_theme_failure_is_swallowed() {
        let (mut ctx, _rx, _) = context(Arc::new(MemoryPreferenceStore::failing()));
        handle_action(UpdateAction::PersistTheme(Theme::Light), &mut ctx);
    }

    #[tokio::test]
    async fn test_open_link_uses_opener() {
        let (mut ctx, _rx, opener) = context(Arc::new(MemoryPreferenceStore::new()));
        handle_action(
            UpdateAction::OpenLink {
                href: "https://github.com/dagdag001".into(),
                target: LinkTarget::NewContext,
            },
            &mut ctx,
        );
        assert_eq!(opener.opened(), vec!["https://github.com/dagdag001"]);
    }

    #[tokio::test]
    async fn test_shutdown_aborts_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("projects.json");
        std::fs::write(&path, "[]").unwrap();

        let (mut ctx, _rx, _) = context(Arc::new(MemoryPreferenceStore::new()));
        handle_action(
            UpdateAction::LoadProjects {
                token: MountToken::new(1),
                source: path.display().to_string(),
            },
            &mut ctx,
        );
        ctx.shutdown();
        assert!(!ctx.is_loading());
    }
}
