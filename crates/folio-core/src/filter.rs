//! Project filtering: free-text search plus tag and year facets
//!
//! Within a facet the selected values are OR'd; across the text filter and
//! the two facets the results are AND'd. An empty search text or an empty
//! selection imposes no constraint.

use std::collections::BTreeSet;

use crate::project::Project;

/// Active search text and facet selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free text, matched case-insensitively against title, description and tags
    pub search_text: String,

    /// Selected tags in selection order (no duplicates)
    pub selected_tags: Vec<String>,

    /// Selected years in selection order (no duplicates)
    pub selected_years: Vec<i32>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Add the tag if absent, otherwise remove it. Returns whether the tag is
    /// selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
            false
        } else {
            self.selected_tags.push(tag.to_string());
            true
        }
    }

    /// Add the year if absent, otherwise remove it. Returns whether the year
    /// is selected afterwards.
    pub fn toggle_year(&mut self, year: i32) -> bool {
        if let Some(pos) = self.selected_years.iter().position(|y| *y == year) {
            self.selected_years.remove(pos);
            false
        } else {
            self.selected_years.push(year);
            true
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.selected_tags.retain(|t| t != tag);
    }

    pub fn remove_year(&mut self, year: i32) {
        self.selected_years.retain(|y| *y != year);
    }

    /// Reset search text and both selections together
    pub fn clear(&mut self) {
        self.search_text.clear();
        self.selected_tags.clear();
        self.selected_years.clear();
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    pub fn is_year_selected(&self, year: i32) -> bool {
        self.selected_years.contains(&year)
    }

    /// True if any facet value is selected (drives badge rendering)
    pub fn has_facet_filters(&self) -> bool {
        !self.selected_tags.is_empty() || !self.selected_years.is_empty()
    }

    /// True if search text or any facet value is set
    pub fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty() || self.has_facet_filters()
    }

    pub fn text_matches(&self, project: &Project) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle)
            || project
                .tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Tag facet. A project without tags never matches a non-empty selection.
    pub fn tag_matches(&self, project: &Project) -> bool {
        if self.selected_tags.is_empty() {
            return true;
        }
        project
            .tags()
            .iter()
            .any(|tag| self.selected_tags.contains(tag))
    }

    /// Year facet. A project without a year never matches a non-empty selection.
    pub fn year_matches(&self, project: &Project) -> bool {
        if self.selected_years.is_empty() {
            return true;
        }
        project
            .year
            .is_some_and(|year| self.selected_years.contains(&year))
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.text_matches(project) && self.tag_matches(project) && self.year_matches(project)
    }

    /// The visible subset, in dataset order
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Sorted (ascending) unique union of every project's tags
pub fn available_tags(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted (descending, newest first) unique set of project years
pub fn available_years(projects: &[Project]) -> Vec<i32> {
    projects
        .iter()
        .filter_map(|p| p.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Project> {
        vec![
            Project::new("Shop Front", "https://a.example")
                .with_description("E-commerce storefront")
                .with_tags(["React", "TailwindCSS"])
                .with_year(2024),
            Project::new("Api Gateway", "https://b.example")
                .with_description("Routing layer written in Go")
                .with_tags(["Go", "Docker"])
                .with_year(2023),
            Project::new("Notes", "https://c.example").with_description("Untagged scratchpad"),
        ]
    }

    #[test]
    fn test_empty_filter_admits_everything() {
        let projects = dataset();
        let filter = FilterState::new();
        assert_eq!(filter.apply(&projects).len(), 3);
        assert!(!filter.has_active_filters());
    }

    #[test]
    fn test_text_matches_title_case_insensitively() {
        let projects = dataset();
        let mut filter = FilterState::new();
        filter.set_search_text("SHOP");
        let visible = filter.apply(&projects);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Shop Front");
    }

    #[test]
    fn test_text_matches_description_and_tags() {
        let projects = dataset();
        let mut filter = FilterState::new();

        filter.set_search_text("routing");
        assert_eq!(filter.apply(&projects)[0].title, "Api Gateway");

        filter.set_search_text("tailwind");
        assert_eq!(filter.apply(&projects)[0].title, "Shop Front");
    }

    #[test]
    fn test_tag_facet_is_or_within_facet() {
        let projects = dataset();
        let mut filter = FilterState::new();
        filter.toggle_tag("React");
        filter.toggle_tag("Go");
        assert_eq!(filter.apply(&projects).len(), 2);
    }

    #[test]
    fn test_untagged_project_never_matches_tag_filter() {
        let projects = dataset();
        let mut filter = FilterState::new();
        filter.toggle_tag("React");
        assert!(!filter.tag_matches(&projects[2]));
    }

    #[test]
    fn test_project_without_year_never_matches_year_filter() {
        let projects = dataset();
        let mut filter = FilterState::new();
        filter.toggle_year(2024);
        assert!(!filter.year_matches(&projects[2]));
        assert!(filter.year_matches(&projects[0]));
    }

    #[test]
    fn test_facets_are_and_across_types() {
        let projects = dataset();
        let mut filter = FilterState::new();
        filter.toggle_tag("React");
        filter.toggle_year(2023);
        assert!(filter.apply(&projects).is_empty());

        filter.toggle_year(2024);
        assert_eq!(filter.apply(&projects).len(), 1);
    }

    #[test]
    fn test_visibility_is_conjunction_of_predicates() {
        let projects = dataset();
        let texts = ["", "a", "go", "zzz"];
        let tag_sets: [&[&str]; 3] = [&[], &["React"], &["Go", "Docker"]];
        let year_sets: [&[i32]; 3] = [&[], &[2024], &[2023, 2024]];

        for text in texts {
            for tags in tag_sets {
                for years in year_sets {
                    let mut filter = FilterState::new();
                    filter.set_search_text(text);
                    for tag in tags {
                        filter.toggle_tag(tag);
                    }
                    for year in years {
                        filter.toggle_year(*year);
                    }
                    for project in &projects {
                        assert_eq!(
                            filter.matches(project),
                            filter.text_matches(project)
                                && filter.tag_matches(project)
                                && filter.year_matches(project)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut filter = FilterState::new();
        assert!(filter.toggle_tag("React"));
        assert!(!filter.toggle_tag("React"));
        assert!(filter.selected_tags.is_empty());

        assert!(filter.toggle_year(2024));
        assert!(!filter.toggle_year(2024));
        assert!(filter.selected_years.is_empty());
    }

    #[test]
    fn test_selection_keeps_insertion_order() {
        let mut filter = FilterState::new();
        filter.toggle_tag("Go");
        filter.toggle_tag("React");
        filter.toggle_tag("Docker");
        assert_eq!(filter.selected_tags, ["Go", "React", "Docker"]);
    }

    #[test]
    fn test_remove_is_unconditional() {
        let mut filter = FilterState::new();
        filter.remove_tag("absent");
        filter.remove_year(1999);
        filter.toggle_tag("React");
        filter.remove_tag("React");
        assert!(!filter.is_tag_selected("React"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filter = FilterState::new();
        filter.set_search_text("a");
        filter.toggle_tag("React");
        filter.toggle_year(2024);
        filter.clear();
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn test_whitespace_search_is_an_active_filter() {
        let mut filter = FilterState::new();
        filter.set_search_text(" ");
        assert!(filter.has_active_filters());
        assert!(!filter.has_facet_filters());
    }

    #[test]
    fn test_available_tags_sorted_unique() {
        let mut projects = dataset();
        projects.push(Project::new("Dup", "x").with_tags(["React", "Angular"]));
        assert_eq!(
            available_tags(&projects),
            ["Angular", "Docker", "Go", "React", "TailwindCSS"]
        );
    }

    #[test]
    fn test_available_years_sorted_descending_unique() {
        let mut projects = dataset();
        projects.push(Project::new("Old", "x").with_year(2021));
        projects.push(Project::new("Again", "x").with_year(2024));
        assert_eq!(available_years(&projects), [2024, 2023, 2021]);
    }

    #[test]
    fn test_available_sets_of_empty_dataset() {
        assert!(available_tags(&[]).is_empty());
        assert!(available_years(&[]).is_empty());
    }
}
