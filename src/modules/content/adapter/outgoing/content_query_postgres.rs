use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::content::adapter::outgoing::sea_orm_entity::{
    certifications, education, experience, experience_skills, milestones, profile,
    project_skills, projects, specializations, tech_stack,
};
use crate::content::application::ports::outgoing::{
    CertificationRecord, ContentQuery, ContentQueryError, EducationRecord, ExperienceRecord,
    ExperienceSkillRecord, MilestoneRecord, ProfileRecord, ProjectRecord, SpecializationRecord,
    TechStackRecord,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Skill names per project, resolved through `project_skills`.
    ///
    /// Two flat queries instead of a join so link order is preserved and
    /// both steps stay mockable.
    async fn skills_by_project(
        &self,
        project_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<String>>, ContentQueryError> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = project_skills::Entity::find()
            .filter(project_skills::Column::ProjectId.is_in(project_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let names = self
            .skill_names(links.iter().map(|l| l.skill_id).collect())
            .await?;

        let mut by_project: HashMap<Uuid, Vec<String>> = HashMap::new();
        for link in links {
            if let Some(name) = names.get(&link.skill_id) {
                by_project
                    .entry(link.project_id)
                    .or_default()
                    .push(name.clone());
            }
        }

        Ok(by_project)
    }

    async fn skill_names(
        &self,
        mut skill_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, String>, ContentQueryError> {
        skill_ids.sort();
        skill_ids.dedup();

        if skill_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let skills = tech_stack::Entity::find()
            .filter(tech_stack::Column::Id.is_in(skill_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(skills
            .into_iter()
            .filter_map(|s| s.skill_name.map(|name| (s.id, name)))
            .collect())
    }
}

#[async_trait]
impl ContentQuery for ContentQueryPostgres {
    async fn find_profile(&self) -> Result<Option<ProfileRecord>, ContentQueryError> {
        let model = profile::Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(profile_to_record))
    }

    async fn list_projects(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<ProjectRecord>, ContentQueryError> {
        let mut query = projects::Entity::find().order_by_desc(projects::Column::CreatedAt);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;

        let mut skills = self
            .skills_by_project(models.iter().map(|m| m.id).collect())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let project_skills = skills.remove(&m.id).unwrap_or_default();
                project_to_record(m, project_skills)
            })
            .collect())
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<ProjectRecord>, ContentQueryError> {
        let Some(model) = projects::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut skills = self.skills_by_project(vec![model.id]).await?;
        let project_skills = skills.remove(&model.id).unwrap_or_default();

        Ok(Some(project_to_record(model, project_skills)))
    }

    async fn count_projects(&self) -> Result<u64, ContentQueryError> {
        // Projected COUNT instead of `PaginatorTrait::count` so the mock
        // database can answer it with a plain row.
        let count = projects::Entity::find()
            .select_only()
            .column_as(Expr::col(projects::Column::Id).count(), "count")
            .into_tuple::<i64>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count.unwrap_or(0).max(0) as u64)
    }

    async fn list_project_categories(&self) -> Result<Vec<String>, ContentQueryError> {
        let rows = projects::Entity::find()
            .select_only()
            .column(projects::Column::Category)
            .filter(projects::Column::Category.is_not_null())
            .into_tuple::<Option<String>>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().flatten().collect())
    }

    async fn list_milestones(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<MilestoneRecord>, ContentQueryError> {
        let mut query = milestones::Entity::find();
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| MilestoneRecord {
                id: m.id,
                label: m.label,
                value: m.value,
            })
            .collect())
    }

    async fn list_active_specializations(
        &self,
        limit: u64,
    ) -> Result<Vec<SpecializationRecord>, ContentQueryError> {
        let models = specializations::Entity::find()
            .filter(specializations::Column::IsActive.eq(true))
            .order_by_asc(specializations::Column::SortOrder)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| SpecializationRecord {
                id: m.id,
                title: m.title,
                description: m.description,
                bullets: m.bullets,
                sort_order: m.sort_order,
            })
            .collect())
    }

    async fn find_education(&self) -> Result<Option<EducationRecord>, ContentQueryError> {
        let model = education::Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| EducationRecord {
            degree: m.degree,
            school: m.school,
            period: m.period,
            elective: m.elective,
        }))
    }

    async fn list_certifications(
        &self,
        limit: u64,
    ) -> Result<Vec<CertificationRecord>, ContentQueryError> {
        let models = certifications::Entity::find()
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| CertificationRecord {
                name: m.name,
                issuer: m.issuer,
                date_earned: m.date_earned,
                credential_url: m.credential_url,
            })
            .collect())
    }

    async fn list_experience(&self) -> Result<Vec<ExperienceRecord>, ContentQueryError> {
        let models = experience::Entity::find()
            .order_by_asc(experience::Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| ExperienceRecord {
                id: m.id,
                role: m.role,
                company: m.company,
                location: m.location,
                period: m.period,
                description: m.description,
                sort_order: m.sort_order,
                proof_url: m.proof_url,
            })
            .collect())
    }

    async fn list_tech_stack(&self) -> Result<Vec<TechStackRecord>, ContentQueryError> {
        let models = tech_stack::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| TechStackRecord {
                id: m.id,
                category: m.category,
                skill_name: m.skill_name,
            })
            .collect())
    }

    async fn list_experience_skills(
        &self,
    ) -> Result<Vec<ExperienceSkillRecord>, ContentQueryError> {
        let links = experience_skills::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let names = self
            .skill_names(links.iter().map(|l| l.skill_id).collect())
            .await?;

        Ok(links
            .into_iter()
            .map(|l| ExperienceSkillRecord {
                experience_id: l.experience_id,
                skill_name: names.get(&l.skill_id).cloned(),
            })
            .collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn profile_to_record(m: profile::Model) -> ProfileRecord {
    ProfileRecord {
        name: m.name,
        hero_title: m.hero_title,
        hero_sub_headline: m.hero_sub_headline,
        profile_image_url: m.profile_image_url,
        resume_download_url: m.resume_download_url,
        about_summary: m.about_summary,
        email: m.email,
        phone_number: m.phone_number,
        viber_number: m.viber_number,
        location: m.location,
        github_url: m.github_url,
        linkedin_url: m.linkedin_url,
        facebook_url: m.facebook_url,
        instagram_url: m.instagram_url,
        contact_title: m.contact_title,
        contact_subtitle: m.contact_subtitle,
        contact_intro: m.contact_intro,
    }
}

fn project_to_record(m: projects::Model, skills: Vec<String>) -> ProjectRecord {
    ProjectRecord {
        id: m.id,
        title: m.title,
        hook: m.hook,
        description: m.description,
        thumbnail_url: m.thumbnail_url,
        project_type: m.project_type,
        category: m.category,
        is_featured: m.is_featured,
        overview: m.overview,
        goal: m.goal,
        my_role: m.my_role,
        features: m.features,
        design_philosophy: m.design_philosophy,
        impact_reflection: m.impact_reflection,
        live_demo_url: m.live_demo_url,
        github_repo_url: m.github_repo_url,
        created_at: m.created_at.into(),
        skills,
    }
}

fn map_db_err(e: DbErr) -> ContentQueryError {
    ContentQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn project_model(id: Uuid, title: &str) -> projects::Model {
        projects::Model {
            id,
            title: Some(title.to_string()),
            hook: None,
            description: Some("desc".to_string()),
            thumbnail_url: None,
            project_type: Some("Personal Project".to_string()),
            category: Some("Web, Mobile".to_string()),
            is_featured: true,
            overview: Some("overview".to_string()),
            goal: None,
            my_role: None,
            features: Some(serde_json::json!(["Fast"])),
            design_philosophy: None,
            impact_reflection: None,
            live_demo_url: None,
            github_repo_url: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn skill_model(id: Uuid, name: &str) -> tech_stack::Model {
        tech_stack::Model {
            id,
            category: Some("Backend".to_string()),
            skill_name: Some(name.to_string()),
        }
    }

    // ========================================================================
    // Profile
    // ========================================================================

    #[tokio::test]
    async fn test_find_profile_maps_columns() {
        let model = profile::Model {
            id: Uuid::new_v4(),
            name: Some("Jane".to_string()),
            hero_title: Some("Engineer".to_string()),
            hero_sub_headline: None,
            profile_image_url: None,
            resume_download_url: None,
            about_summary: None,
            email: Some("jane@example.com".to_string()),
            phone_number: None,
            viber_number: None,
            location: None,
            github_url: None,
            linkedin_url: None,
            facebook_url: None,
            instagram_url: None,
            contact_title: None,
            contact_subtitle: None,
            contact_intro: None,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let profile = query.find_profile().await.unwrap().unwrap();

        assert_eq!(profile.name.as_deref(), Some("Jane"));
        assert_eq!(profile.email.as_deref(), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn test_find_profile_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profile::Model>::new()])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));

        assert_eq!(query.find_profile().await.unwrap(), None);
    }

    // ========================================================================
    // Projects
    // ========================================================================

    #[tokio::test]
    async fn test_list_projects_attaches_skills_in_link_order() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let rust = Uuid::new_v4();
        let actix = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                project_model(p1, "First"),
                project_model(p2, "Second"),
            ]])
            .append_query_results(vec![vec![
                project_skills::Model {
                    project_id: p1,
                    skill_id: actix,
                },
                project_skills::Model {
                    project_id: p1,
                    skill_id: rust,
                },
            ]])
            .append_query_results(vec![vec![
                skill_model(rust, "Rust"),
                skill_model(actix, "Actix"),
            ]])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let projects = query.list_projects(Some(8)).await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].skills, vec!["Actix", "Rust"]);
        assert!(projects[1].skills.is_empty());
    }

    #[tokio::test]
    async fn test_list_projects_empty_skips_skill_lookup() {
        // Only one result set queued: a second query would fail the mock.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));

        assert!(query.list_projects(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_project_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));

        assert_eq!(query.find_project(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_project_without_skills() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![project_model(id, "Solo")]])
            .append_query_results(vec![Vec::<project_skills::Model>::new()])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let project = query.find_project(id).await.unwrap().unwrap();

        assert_eq!(project.title.as_deref(), Some("Solo"));
        assert!(project.skills.is_empty());
    }

    #[tokio::test]
    async fn test_count_projects() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "count".to_string(),
                Value::BigInt(Some(12)),
            )])]])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));

        assert_eq!(query.count_projects().await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_list_project_categories() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                BTreeMap::from([(
                    "category".to_string(),
                    Value::String(Some(Box::new("Website".to_string()))),
                )]),
                BTreeMap::from([(
                    "category".to_string(),
                    Value::String(Some(Box::new("Mobile, Software".to_string()))),
                )]),
            ]])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));

        assert_eq!(
            query.list_project_categories().await.unwrap(),
            vec!["Website", "Mobile, Software"]
        );
    }

    // ========================================================================
    // About tables
    // ========================================================================

    #[tokio::test]
    async fn test_list_experience_skills_resolves_names() {
        let exp = Uuid::new_v4();
        let go = Uuid::new_v4();
        let missing = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                experience_skills::Model {
                    experience_id: exp,
                    skill_id: go,
                },
                experience_skills::Model {
                    experience_id: exp,
                    skill_id: missing,
                },
            ]])
            .append_query_results(vec![vec![skill_model(go, "Go")]])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let rows = query.list_experience_skills().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].skill_name.as_deref(), Some("Go"));
        assert_eq!(rows[1].skill_name, None);
    }

    #[tokio::test]
    async fn test_list_active_specializations_maps_bullets() {
        let model = specializations::Model {
            id: Uuid::new_v4(),
            title: Some("Backend".to_string()),
            description: None,
            bullets: Some(serde_json::json!(["APIs"])),
            sort_order: Some(1),
            is_active: true,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let rows = query.list_active_specializations(3).await.unwrap();

        assert_eq!(rows[0].bullets, Some(serde_json::json!(["APIs"])));
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".to_string())])
            .into_connection();

        let query = ContentQueryPostgres::new(Arc::new(db));
        let result = query.list_experience().await;

        assert!(matches!(result, Err(ContentQueryError::DatabaseError(_))));
    }
}
