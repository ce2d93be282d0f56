use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::domain::views::ProjectDetailsView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectDetailsError {
    #[error("Project not found")]
    NotFound,
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectDetailsUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<ProjectDetailsView, GetProjectDetailsError>;
}
