use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Contact messages are insert-only.
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn save(&self, data: NewContactMessage) -> Result<Uuid, ContactMessageRepositoryError>;
}
