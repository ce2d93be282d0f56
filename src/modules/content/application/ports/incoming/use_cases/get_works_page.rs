use async_trait::async_trait;

use crate::content::application::domain::views::WorksPageView;
use crate::signal::application::domain::entities::VisitorId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorksPageQuery {
    pub category: Option<String>,
    pub project_type: Option<String>,
    pub tech: Vec<String>,
    /// When set, pending tech/category selections of this visitor are
    /// consumed and applied on top of the explicit filters.
    pub visitor: Option<VisitorId>,
}

#[async_trait]
pub trait GetWorksPageUseCase: Send + Sync {
    async fn execute(&self, query: WorksPageQuery) -> WorksPageView;
}
