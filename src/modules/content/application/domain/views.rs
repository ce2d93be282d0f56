use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::content::application::{
    domain::{
        links::LinkView,
        tag_parsing::{clean_skill_names, parse_bullets, parse_tech_stack},
        tool_category::ToolCategory,
    },
    ports::outgoing::{ProfileRecord, ProjectRecord, SpecializationRecord},
};

pub const UNTITLED_PROJECT: &str = "Untitled Project";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_ABOUT_SUMMARY: &str = "No about summary yet.";

fn or_default(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

//
// ──────────────────────────────────────────────────────────
// Shared cards
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectCardView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Empty when the project has no thumbnail.
    pub thumbnail_url: String,
    pub project_type: Option<String>,
    pub category: Option<String>,
    pub is_featured: bool,
    pub tech_stack: Vec<String>,
    pub live_demo_url: Option<String>,
    pub github_repo_url: Option<String>,
}

impl From<&ProjectRecord> for ProjectCardView {
    fn from(record: &ProjectRecord) -> Self {
        let related = clean_skill_names(&record.skills);
        let tech_stack = if related.is_empty() {
            parse_tech_stack(record.category.as_deref())
        } else {
            related
        };

        Self {
            id: record.id,
            title: or_default(record.title.as_deref(), UNTITLED_PROJECT),
            description: or_default(record.description.as_deref(), NO_DESCRIPTION),
            thumbnail_url: record.thumbnail_url.clone().unwrap_or_default(),
            project_type: record.project_type.clone(),
            category: record.category.clone(),
            is_featured: record.is_featured,
            tech_stack,
            live_demo_url: record.live_demo_url.clone(),
            github_repo_url: record.github_repo_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpecializationView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
}

impl From<&SpecializationRecord> for SpecializationView {
    fn from(record: &SpecializationRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            bullets: parse_bullets(record.bullets.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MilestoneView {
    pub label: String,
    pub value: String,
}

//
// ──────────────────────────────────────────────────────────
// Home
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeroProfileView {
    pub name: Option<String>,
    pub hero_title: Option<String>,
    pub hero_sub_headline: Option<String>,
    pub profile_image_url: Option<String>,
    pub resume_download_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub email: Option<String>,
    pub viber_number: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
}

impl From<ProfileRecord> for HeroProfileView {
    fn from(p: ProfileRecord) -> Self {
        Self {
            name: p.name,
            hero_title: p.hero_title,
            hero_sub_headline: p.hero_sub_headline,
            profile_image_url: p.profile_image_url,
            resume_download_url: p.resume_download_url,
            github_url: p.github_url,
            linkedin_url: p.linkedin_url,
            email: p.email,
            viber_number: p.viber_number,
            facebook_url: p.facebook_url,
            instagram_url: p.instagram_url,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HomePageView {
    pub profile: Option<HeroProfileView>,
    /// True when `profile` came from the last stored snapshot.
    pub profile_from_cache: bool,
    pub featured_projects: Vec<ProjectCardView>,
    pub milestones: Vec<MilestoneView>,
    pub specializations: Vec<SpecializationView>,
}

//
// ──────────────────────────────────────────────────────────
// Works
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppliedWorksFilter {
    pub category: String,
    pub project_type: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorksPageView {
    pub projects: Vec<ProjectCardView>,
    pub total_projects: usize,
    pub categories: Vec<String>,
    pub project_types: Vec<String>,
    pub tech_stack_options: Vec<String>,
    pub applied: AppliedWorksFilter,
}

//
// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AboutProfileView {
    pub name: String,
    pub summary: String,
    pub resume_download_url: Option<String>,
}

impl AboutProfileView {
    pub fn from_record(record: Option<&ProfileRecord>) -> Self {
        let summary = record
            .and_then(|p| p.about_summary.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_ABOUT_SUMMARY)
            .to_string();

        Self {
            name: trimmed(record.and_then(|p| p.name.as_deref())),
            summary,
            resume_download_url: record.and_then(|p| p.resume_download_url.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EducationView {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub elective: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CertificationView {
    pub name: String,
    pub issuer: String,
    pub date_earned: String,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceView {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub location: String,
    pub date: String,
    pub summary: String,
    pub proof_url: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ToolGroupView {
    pub category: ToolCategory,
    pub title: String,
    pub dark: bool,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AboutStatsView {
    pub experience_value: String,
    pub projects_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectionLink {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AboutPageView {
    pub profile: AboutProfileView,
    pub education: Option<EducationView>,
    pub certifications: Vec<CertificationView>,
    pub experience: Vec<ExperienceView>,
    pub tool_groups: Vec<ToolGroupView>,
    pub specializations: Vec<SpecializationView>,
    pub stats: AboutStatsView,
    pub sections: Vec<SectionLink>,
    /// Section the page should open at, consumed from the visitor's
    /// pending `about-section` selection.
    #[serde(default)]
    pub initial_section: Option<String>,
    /// True when every read failed and the last snapshot was served.
    #[serde(default)]
    pub from_cache: bool,
}

//
// ──────────────────────────────────────────────────────────
// Project details
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetailSections {
    pub has_overview: bool,
    pub has_tools: bool,
    pub has_features: bool,
    pub has_design: bool,
    pub has_result: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetailsView {
    pub id: Uuid,
    pub title: Option<String>,
    pub hook: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub overview: Option<String>,
    pub goal: Option<String>,
    pub my_role: Option<String>,
    pub design_philosophy: Option<String>,
    pub impact_reflection: Option<String>,
    pub live_demo_url: Option<String>,
    pub github_repo_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub owner_name: String,
    pub sections: DetailSections,
}

//
// ──────────────────────────────────────────────────────────
// Site shell / contact page
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavPage {
    pub page: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SiteShellView {
    pub owner_name: Option<String>,
    pub nav_pages: Vec<NavPage>,
    pub contact_links: Vec<LinkView>,
    pub works_links: Vec<LinkView>,
    pub about_links: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactItemView {
    pub id: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactPageView {
    pub title: String,
    pub intro: Option<String>,
    pub location: Option<String>,
    pub items: Vec<ContactItemView>,
}
