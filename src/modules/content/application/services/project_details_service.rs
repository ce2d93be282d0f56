use async_trait::async_trait;
use tracing::{error, warn};
use uuid::Uuid;

use crate::content::application::{
    domain::{
        tag_parsing::{clean_skill_names, parse_feature_items},
        views::{DetailSections, ProjectDetailsView},
    },
    ports::incoming::use_cases::{GetProjectDetailsError, GetProjectDetailsUseCase},
    ports::outgoing::{ContentQuery, ProjectRecord},
};

#[derive(Clone)]
pub struct ProjectDetailsService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ProjectDetailsService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn detail_sections(
    record: &ProjectRecord,
    owner_name: &str,
    tech_stack: &[String],
    features: &[String],
) -> DetailSections {
    DetailSections {
        has_overview: is_filled(record.overview.as_deref())
            || is_filled(record.goal.as_deref())
            || is_filled(record.my_role.as_deref())
            || !owner_name.is_empty(),
        has_tools: !tech_stack.is_empty(),
        has_features: !features.is_empty(),
        has_design: is_filled(record.hook.as_deref())
            || is_filled(record.design_philosophy.as_deref()),
        has_result: is_filled(record.impact_reflection.as_deref()),
    }
}

#[async_trait]
impl<Q> GetProjectDetailsUseCase for ProjectDetailsService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<ProjectDetailsView, GetProjectDetailsError> {
        let (project, profile) =
            futures::join!(self.query.find_project(project_id), self.query.find_profile());

        let record = project
            .map_err(|e| {
                error!(%project_id, error = %e, "Project lookup failed");
                GetProjectDetailsError::QueryFailed(e.to_string())
            })?
            .ok_or(GetProjectDetailsError::NotFound)?;

        let owner_name = match profile {
            Ok(profile) => profile
                .and_then(|p| p.name)
                .map(|n| n.trim().to_string())
                .unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Owner name unavailable");
                String::new()
            }
        };

        let tech_stack = clean_skill_names(&record.skills);
        let features = parse_feature_items(record.features.as_ref());
        let sections = detail_sections(&record, &owner_name, &tech_stack, &features);

        Ok(ProjectDetailsView {
            id: record.id,
            title: record.title,
            hook: record.hook,
            description: record.description,
            thumbnail_url: record.thumbnail_url,
            overview: record.overview,
            goal: record.goal,
            my_role: record.my_role,
            design_philosophy: record.design_philosophy,
            impact_reflection: record.impact_reflection,
            live_demo_url: record.live_demo_url,
            github_repo_url: record.github_repo_url,
            tech_stack,
            features,
            owner_name,
            sections,
        })
    }
}
