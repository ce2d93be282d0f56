use async_trait::async_trait;

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNotice {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, notice: &ContactNotice) -> Result<(), ContactNotificationError>;
}
