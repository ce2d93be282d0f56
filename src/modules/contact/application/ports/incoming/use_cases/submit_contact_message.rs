use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactSubmission;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Email relay is not configured")]
    EmailNotConfigured,

    #[error("Message could not be saved: {0}")]
    SaveFailed(String),

    #[error("Message saved but notification failed: {0}")]
    NotificationFailed(String),
}

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SubmitContactError>;
}
