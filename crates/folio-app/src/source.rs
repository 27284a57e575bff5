//! Where the project dataset is read from
//!
//! The collection is fetched whole, in a single read, once per mount.

use std::path::{Path, PathBuf};

use folio_core::prelude::*;
use folio_core::{parse_projects, Project};
use url::Url;

/// Async access to a project collection
#[trait_variant::make(ProjectSource: Send)]
pub trait LocalProjectSource {
    /// Read and parse the whole collection
    async fn fetch(&self) -> Result<Vec<Project>>;

    /// Human-readable name for logs and error messages
    fn describe(&self) -> String;
}

/// Parsed form of the `--projects` flag / `[projects] source` setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSourceSpec {
    File(PathBuf),
}

impl ProjectSourceSpec {
    /// Accepts a filesystem path or a `file://` URL
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::config_invalid("project source is empty"));
        }

        if !raw.contains("://") {
            return Ok(Self::File(PathBuf::from(raw)));
        }

        let url = Url::parse(raw)
            .map_err(|e| Error::config_invalid(format!("invalid project source URL '{}': {}", raw, e)))?;
        match url.scheme() {
            "file" => url
                .to_file_path()
                .map(Self::File)
                .map_err(|_| Error::config_invalid(format!("'{}' is not a local file URL", raw))),
            _ => Err(Error::UnsupportedSource(raw.to_string())),
        }
    }

    pub fn into_source(self) -> FileProjectSource {
        match self {
            Self::File(path) => FileProjectSource::new(path),
        }
    }
}

/// JSON file on the local filesystem
#[derive(Debug, Clone)]
pub struct FileProjectSource {
    path: PathBuf,
}

impl FileProjectSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

impl ProjectSource for FileProjectSource {
    async fn fetch(&self) -> Result<Vec<Project>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::project_load(self.name(), e.to_string()))?;
        let projects = parse_projects(&content)
            .map_err(|e| Error::project_load(self.name(), e.to_string()))?;
        debug!("Read {} projects from {}", projects.len(), self.name());
        Ok(projects)
    }

    fn describe(&self) -> String {
        self.name()
    }
}

/// Fetch and flatten the error into the message carried by `ProjectsLoaded`
pub async fn load_projects<S: ProjectSource>(source: &S) -> std::result::Result<Vec<Project>, String> {
    debug!("Fetching projects from {}", source.describe());
    source.fetch().await.map_err(|e| e.to_string())
}
