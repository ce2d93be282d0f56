use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display bucket for a `tech_stack` row.
///
/// The stored category is free text, so it is bucketed by keyword
/// containment. Rules are checked in order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    Programming,
    FrameworkAndLibraries,
    Design,
    Tools,
}

const RULES: &[(ToolCategory, &[&str])] = &[
    (ToolCategory::Design, &["design", "ui", "ux"]),
    (
        ToolCategory::FrameworkAndLibraries,
        &["framework", "library", "frontend"],
    ),
    (
        ToolCategory::Programming,
        &["program", "backend", "database", "language"],
    ),
];

impl ToolCategory {
    /// Order in which the groups are displayed on the About page.
    pub const DISPLAY_ORDER: [ToolCategory; 4] = [
        ToolCategory::Programming,
        ToolCategory::FrameworkAndLibraries,
        ToolCategory::Design,
        ToolCategory::Tools,
    ];

    pub fn from_raw(value: Option<&str>) -> Self {
        let category = value.unwrap_or_default().to_lowercase();

        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| category.contains(k)))
            .map(|(bucket, _)| *bucket)
            .unwrap_or(ToolCategory::Tools)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Programming => "Programming",
            ToolCategory::FrameworkAndLibraries => "Framework & Libraries",
            ToolCategory::Design => "Design",
            ToolCategory::Tools => "Tools",
        }
    }

    pub fn heading(&self) -> String {
        self.label().to_uppercase()
    }

    /// Dark cards alternate with light ones in display order.
    pub fn is_dark(&self) -> bool {
        matches!(self, ToolCategory::Programming | ToolCategory::Design)
    }
}
