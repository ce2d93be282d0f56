use async_trait::async_trait;
use std::sync::Arc;

use super::{read_or_default, take_pending};
use crate::content::application::{
    domain::{
        views::{ProjectCardView, WorksPageView},
        works_filter::{category_options, tech_stack_options, WorksFilter, PROJECT_TYPE_OPTIONS},
    },
    ports::incoming::use_cases::{GetWorksPageUseCase, WorksPageQuery},
    ports::outgoing::ContentQuery,
};
use crate::signal::application::{
    domain::entities::SignalChannel, ports::incoming::use_cases::TakePendingSelectionUseCase,
};

#[derive(Clone)]
pub struct WorksPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
    pending: Arc<dyn TakePendingSelectionUseCase + Send + Sync>,
}

impl<Q> WorksPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q, pending: Arc<dyn TakePendingSelectionUseCase + Send + Sync>) -> Self {
        Self { query, pending }
    }
}

#[async_trait]
impl<Q> GetWorksPageUseCase for WorksPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self, request: WorksPageQuery) -> WorksPageView {
        let visitor = request.visitor.as_ref();

        let (projects, pending_tech, pending_category) = futures::join!(
            self.query.list_projects(None),
            take_pending(&self.pending, visitor, SignalChannel::WorksTechFilter),
            take_pending(&self.pending, visitor, SignalChannel::WorksCategory),
        );

        let mut filter = WorksFilter::new(
            request.category.as_deref(),
            request.project_type.as_deref(),
            &request.tech,
        );
        // Tech first so a pending category, which clears tech, wins when both
        // are queued.
        if let Some(skill) = pending_tech {
            filter.apply_pending_tech(&skill);
        }
        if let Some(category) = pending_category {
            filter.apply_pending_category(&category);
        }

        let cards: Vec<ProjectCardView> = read_or_default("projects", projects)
            .iter()
            .map(ProjectCardView::from)
            .collect();

        WorksPageView {
            total_projects: cards.len(),
            categories: category_options(&cards),
            project_types: PROJECT_TYPE_OPTIONS.iter().map(|s| s.to_string()).collect(),
            tech_stack_options: tech_stack_options(&cards),
            applied: filter.applied(),
            projects: cards.into_iter().filter(|c| filter.matches(c)).collect(),
        }
    }
}
