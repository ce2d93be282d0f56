use async_trait::async_trait;

use crate::content::application::domain::views::ContactPageView;

#[async_trait]
pub trait GetContactPageUseCase: Send + Sync {
    async fn execute(&self) -> ContactPageView;
}
