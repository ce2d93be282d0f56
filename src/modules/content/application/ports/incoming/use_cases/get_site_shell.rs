use async_trait::async_trait;

use crate::content::application::domain::views::SiteShellView;

#[async_trait]
pub trait GetSiteShellUseCase: Send + Sync {
    async fn execute(&self) -> SiteShellView;
}
