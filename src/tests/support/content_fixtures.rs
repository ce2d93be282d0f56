use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::content::adapter::outgoing::SlotStoreSnapshotCache;
use crate::content::application::ports::outgoing::{
    CertificationRecord, ContentQuery, ContentQueryError, EducationRecord, ExperienceRecord,
    ExperienceSkillRecord, MilestoneRecord, ProfileRecord, ProjectRecord, SpecializationRecord,
    TechStackRecord,
};
use crate::signal::adapter::outgoing::InMemorySlotStore;

/// In-memory content tables.
///
/// Every read named in `failing` answers with a database error, which lets
/// service tests exercise the degrade-to-empty paths.
#[derive(Clone, Default)]
pub struct FixtureContentQuery {
    pub profile: Option<ProfileRecord>,
    pub projects: Vec<ProjectRecord>,
    pub milestones: Vec<MilestoneRecord>,
    pub specializations: Vec<SpecializationRecord>,
    pub education: Option<EducationRecord>,
    pub certifications: Vec<CertificationRecord>,
    pub experience: Vec<ExperienceRecord>,
    pub tech_stack: Vec<TechStackRecord>,
    pub experience_skills: Vec<ExperienceSkillRecord>,
    pub failing: HashSet<&'static str>,
}

impl FixtureContentQuery {
    pub fn failing_everywhere() -> Self {
        Self {
            failing: [
                "find_profile",
                "list_projects",
                "find_project",
                "count_projects",
                "list_project_categories",
                "list_milestones",
                "list_active_specializations",
                "find_education",
                "list_certifications",
                "list_experience",
                "list_tech_stack",
                "list_experience_skills",
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, read: &'static str) -> Self {
        self.failing.insert(read);
        self
    }

    fn guard(&self, read: &'static str) -> Result<(), ContentQueryError> {
        if self.failing.contains(read) {
            return Err(ContentQueryError::DatabaseError(format!("{read} failed")));
        }
        Ok(())
    }

    fn newest_first(&self) -> Vec<ProjectRecord> {
        let mut projects = self.projects.clone();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects
    }
}

fn take_limit<T>(items: Vec<T>, limit: Option<u64>) -> Vec<T> {
    match limit {
        Some(limit) => items.into_iter().take(limit as usize).collect(),
        None => items,
    }
}

#[async_trait]
impl ContentQuery for FixtureContentQuery {
    async fn find_profile(&self) -> Result<Option<ProfileRecord>, ContentQueryError> {
        self.guard("find_profile")?;
        Ok(self.profile.clone())
    }

    async fn list_projects(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<ProjectRecord>, ContentQueryError> {
        self.guard("list_projects")?;
        Ok(take_limit(self.newest_first(), limit))
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<ProjectRecord>, ContentQueryError> {
        self.guard("find_project")?;
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn count_projects(&self) -> Result<u64, ContentQueryError> {
        self.guard("count_projects")?;
        Ok(self.projects.len() as u64)
    }

    async fn list_project_categories(&self) -> Result<Vec<String>, ContentQueryError> {
        self.guard("list_project_categories")?;
        Ok(self
            .projects
            .iter()
            .filter_map(|p| p.category.clone())
            .collect())
    }

    async fn list_milestones(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<MilestoneRecord>, ContentQueryError> {
        self.guard("list_milestones")?;
        Ok(take_limit(self.milestones.clone(), limit))
    }

    async fn list_active_specializations(
        &self,
        limit: u64,
    ) -> Result<Vec<SpecializationRecord>, ContentQueryError> {
        self.guard("list_active_specializations")?;
        let mut rows = self.specializations.clone();
        rows.sort_by_key(|s| s.sort_order);
        Ok(take_limit(rows, Some(limit)))
    }

    async fn find_education(&self) -> Result<Option<EducationRecord>, ContentQueryError> {
        self.guard("find_education")?;
        Ok(self.education.clone())
    }

    async fn list_certifications(
        &self,
        limit: u64,
    ) -> Result<Vec<CertificationRecord>, ContentQueryError> {
        self.guard("list_certifications")?;
        Ok(take_limit(self.certifications.clone(), Some(limit)))
    }

    async fn list_experience(&self) -> Result<Vec<ExperienceRecord>, ContentQueryError> {
        self.guard("list_experience")?;
        let mut rows = self.experience.clone();
        rows.sort_by_key(|e| e.sort_order);
        Ok(rows)
    }

    async fn list_tech_stack(&self) -> Result<Vec<TechStackRecord>, ContentQueryError> {
        self.guard("list_tech_stack")?;
        Ok(self.tech_stack.clone())
    }

    async fn list_experience_skills(
        &self,
    ) -> Result<Vec<ExperienceSkillRecord>, ContentQueryError> {
        self.guard("list_experience_skills")?;
        Ok(self.experience_skills.clone())
    }
}

// ============================================================
// Record builders
// ============================================================

pub fn sample_profile() -> ProfileRecord {
    ProfileRecord {
        name: Some("Jane Doe".into()),
        hero_title: Some("Full-stack Engineer".into()),
        hero_sub_headline: Some("I build calm software.".into()),
        about_summary: Some("Engineer who likes small, sharp tools.".into()),
        email: Some("jane@example.com".into()),
        phone_number: Some("+63 (917) 555-0101".into()),
        viber_number: Some("+63 917 555 0101".into()),
        location: Some("Cebu, PH".into()),
        github_url: Some("https://github.com/jane".into()),
        linkedin_url: Some("https://linkedin.com/in/jane".into()),
        ..Default::default()
    }
}

/// Project created `age_days` ago; smaller ages sort first.
pub fn sample_project(title: &str, category: &str, age_days: i64) -> ProjectRecord {
    ProjectRecord {
        id: Uuid::new_v4(),
        title: Some(title.into()),
        hook: None,
        description: Some(format!("{title} description")),
        thumbnail_url: None,
        project_type: Some("Personal Project".into()),
        category: Some(category.into()),
        is_featured: false,
        overview: None,
        goal: None,
        my_role: None,
        features: None,
        design_philosophy: None,
        impact_reflection: None,
        live_demo_url: None,
        github_repo_url: None,
        created_at: days_ago(age_days),
        skills: vec![],
    }
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

pub fn milestone(label: &str, value: &str) -> MilestoneRecord {
    MilestoneRecord {
        id: Uuid::new_v4(),
        label: Some(label.into()),
        value: Some(value.into()),
    }
}

pub fn skill(category: &str, name: &str) -> TechStackRecord {
    TechStackRecord {
        id: Uuid::new_v4(),
        category: Some(category.into()),
        skill_name: Some(name.into()),
    }
}

pub fn in_memory_snapshots() -> Arc<SlotStoreSnapshotCache> {
    Arc::new(SlotStoreSnapshotCache::new(Arc::new(InMemorySlotStore::new())))
}
