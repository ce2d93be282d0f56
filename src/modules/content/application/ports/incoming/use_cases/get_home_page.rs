use async_trait::async_trait;

use crate::content::application::domain::views::HomePageView;

#[async_trait]
pub trait GetHomePageUseCase: Send + Sync {
    /// Never fails: unreadable parts come back empty.
    async fn execute(&self) -> HomePageView;
}
