use std::collections::HashSet;

use crate::content::application::domain::{
    tag_parsing::split_categories,
    views::{AppliedWorksFilter, ProjectCardView},
};

pub const ALL: &str = "All";

pub const DEFAULT_CATEGORIES: [&str; 8] = [
    ALL,
    "Web",
    "Mobile",
    "Software",
    "System",
    "Data",
    "AI/ML",
    "Cybersecurity",
];

pub const PROJECT_TYPE_OPTIONS: [&str; 4] = [ALL, "Personal", "Client", "School"];

/// Filter state of the Works page. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorksFilter {
    pub category: Option<String>,
    pub project_type: Option<String>,
    pub tech: Vec<String>,
}

fn selection(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != ALL)
        .map(str::to_string)
}

/// Maps a project type option label to the stored value.
fn project_type_value(label: &str) -> &str {
    match label {
        "Personal" => "Personal Project",
        "Client" => "Client Project",
        "School" => "School Project",
        other => other,
    }
}

fn normalize_project_type(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

impl WorksFilter {
    pub fn new(category: Option<&str>, project_type: Option<&str>, tech: &[String]) -> Self {
        Self {
            category: selection(category),
            project_type: selection(project_type),
            tech: tech
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// A tech filter handed over from another page replaces the tech
    /// selection and resets the category.
    pub fn apply_pending_tech(&mut self, skill: &str) {
        let skill = skill.trim();
        if skill.is_empty() {
            return;
        }
        self.category = None;
        self.tech = vec![skill.to_string()];
    }

    /// A category handed over from another page clears the tech selection.
    /// `All` is a real selection here: it resets the category.
    pub fn apply_pending_category(&mut self, category: &str) {
        if category.trim().is_empty() {
            return;
        }
        self.category = selection(Some(category));
        self.tech.clear();
    }

    pub fn matches(&self, project: &ProjectCardView) -> bool {
        self.matches_category(project) && self.matches_type(project) && self.matches_tech(project)
    }

    fn matches_category(&self, project: &ProjectCardView) -> bool {
        let Some(wanted) = &self.category else {
            return true;
        };

        project
            .category
            .as_deref()
            .map(|c| split_categories(c).iter().any(|c| c == wanted))
            .unwrap_or(false)
    }

    fn matches_type(&self, project: &ProjectCardView) -> bool {
        let Some(label) = &self.project_type else {
            return true;
        };

        normalize_project_type(project.project_type.as_deref())
            == normalize_project_type(Some(project_type_value(label)))
    }

    fn matches_tech(&self, project: &ProjectCardView) -> bool {
        if self.tech.is_empty() {
            return true;
        }

        let wanted: HashSet<String> = self.tech.iter().map(|t| t.to_lowercase()).collect();

        project
            .tech_stack
            .iter()
            .any(|skill| wanted.contains(&skill.to_lowercase()))
    }

    pub fn applied(&self) -> AppliedWorksFilter {
        AppliedWorksFilter {
            category: self.category.clone().unwrap_or_else(|| ALL.to_string()),
            project_type: self.project_type.clone().unwrap_or_else(|| ALL.to_string()),
            tech: self.tech.clone(),
        }
    }
}

/// Default categories followed by every category found on projects,
/// in first-seen order.
pub fn category_options(projects: &[ProjectCardView]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut options = Vec::new();

    let found = projects
        .iter()
        .filter_map(|p| p.category.as_deref())
        .flat_map(split_categories);

    for category in DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).chain(found) {
        if seen.insert(category.clone()) {
            options.push(category);
        }
    }

    options
}

/// Distinct tags across all projects, sorted case-insensitively.
pub fn tech_stack_options(projects: &[ProjectCardView]) -> Vec<String> {
    let mut skills: Vec<String> = projects
        .iter()
        .flat_map(|p| p.tech_stack.iter())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    skills.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    skills
}
