//! Project records and dataset load status

use serde::{Deserialize, Serialize};

/// A single showcased project, as supplied by the static project collection.
///
/// Every field is lenient on input: a record missing its title or description
/// deserializes with an empty string, and missing `tags`/`year` stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Optional preview image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Destination opened when the slide is activated
    #[serde(default)]
    pub link: String,

    /// Technology tags in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Project {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Tags as a slice; an absent tag list reads as empty.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Parse a JSON project collection (a top-level array of project records).
pub fn parse_projects(json: &str) -> crate::Result<Vec<Project>> {
    Ok(serde_json::from_str(json)?)
}

/// Where the project dataset currently stands.
///
/// Distinguishes "still loading" from "loaded but empty" from "load failed",
/// which would otherwise all render as zero projects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Fetch issued, no response yet
    #[default]
    Loading,
    /// Dataset applied (possibly empty)
    Loaded,
    /// Fetch or parse failed; the project list stays empty
    Failed { reason: String },
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"[{
            "title": "Ledger",
            "description": "Bookkeeping app",
            "image": "https://example.com/ledger.png",
            "link": "https://example.com/ledger",
            "tags": ["React", "Node.js"],
            "year": 2024
        }]"#;

        let projects = parse_projects(json).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Ledger");
        assert_eq!(projects[0].tags(), ["React", "Node.js"]);
        assert_eq!(projects[0].year, Some(2024));
        assert!(projects[0].has_image());
    }

    #[test]
    fn test_parse_record_with_missing_optionals() {
        let json = r#"[{"title": "Bare", "link": "https://example.com"}]"#;

        let projects = parse_projects(json).unwrap();
        assert!(projects[0].tags.is_none());
        assert!(projects[0].tags().is_empty());
        assert!(projects[0].year.is_none());
        assert!(!projects[0].has_image());
        assert_eq!(projects[0].description, "");
    }

    #[test]
    fn test_empty_image_is_not_an_image() {
        let project = Project::new("x", "y").with_image("");
        assert!(!project.has_image());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_projects(r#"{"title": "x"}"#).is_err());
    }

    #[test]
    fn test_load_status_default_is_loading() {
        assert!(LoadStatus::default().is_loading());
        assert!(LoadStatus::Failed {
            reason: "boom".to_string()
        }
        .is_failed());
    }
}
