use async_trait::async_trait;

use crate::content::application::domain::views::AboutPageView;
use crate::signal::application::domain::entities::VisitorId;

#[async_trait]
pub trait GetAboutPageUseCase: Send + Sync {
    /// `visitor` enables consuming a pending `about-section` selection.
    async fn execute(&self, visitor: Option<VisitorId>) -> AboutPageView;
}
