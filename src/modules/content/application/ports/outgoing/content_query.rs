use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Read-only DTOs for the content tables.
/// Nullable columns stay `Option`; display defaults are applied by services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: Option<String>,
    pub hero_title: Option<String>,
    pub hero_sub_headline: Option<String>,
    pub profile_image_url: Option<String>,
    pub resume_download_url: Option<String>,
    pub about_summary: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub viber_number: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub contact_title: Option<String>,
    pub contact_subtitle: Option<String>,
    pub contact_intro: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: Option<String>,
    pub hook: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub project_type: Option<String>,
    pub category: Option<String>,
    pub is_featured: bool,
    pub overview: Option<String>,
    pub goal: Option<String>,
    pub my_role: Option<String>,
    pub features: Option<Value>,
    pub design_philosophy: Option<String>,
    pub impact_reflection: Option<String>,
    pub live_demo_url: Option<String>,
    pub github_repo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Skill names linked through `project_skills`, in link order.
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneRecord {
    pub id: Uuid,
    pub label: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpecializationRecord {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub bullets: Option<Value>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationRecord {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub period: Option<String>,
    pub elective: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificationRecord {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date_earned: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub proof_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechStackRecord {
    pub id: Uuid,
    pub category: Option<String>,
    pub skill_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceSkillRecord {
    pub experience_id: Uuid,
    pub skill_name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContentQuery: Send + Sync {
    async fn find_profile(&self) -> Result<Option<ProfileRecord>, ContentQueryError>;

    /// Newest first. `limit = None` returns every project.
    async fn list_projects(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<ProjectRecord>, ContentQueryError>;

    async fn find_project(&self, id: Uuid) -> Result<Option<ProjectRecord>, ContentQueryError>;

    async fn count_projects(&self) -> Result<u64, ContentQueryError>;

    /// Non-null `category` values of every project.
    async fn list_project_categories(&self) -> Result<Vec<String>, ContentQueryError>;

    async fn list_milestones(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<MilestoneRecord>, ContentQueryError>;

    /// Active rows only, ordered by `sort_order` ascending.
    async fn list_active_specializations(
        &self,
        limit: u64,
    ) -> Result<Vec<SpecializationRecord>, ContentQueryError>;

    async fn find_education(&self) -> Result<Option<EducationRecord>, ContentQueryError>;

    async fn list_certifications(
        &self,
        limit: u64,
    ) -> Result<Vec<CertificationRecord>, ContentQueryError>;

    /// Ordered by `sort_order` ascending.
    async fn list_experience(&self) -> Result<Vec<ExperienceRecord>, ContentQueryError>;

    async fn list_tech_stack(&self) -> Result<Vec<TechStackRecord>, ContentQueryError>;

    async fn list_experience_skills(
        &self,
    ) -> Result<Vec<ExperienceSkillRecord>, ContentQueryError>;
}
