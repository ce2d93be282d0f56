use async_trait::async_trait;

use crate::signal::application::domain::entities::{SignalChannel, VisitorId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TakePendingSelectionError {
    #[error("Failed to read selection: {0}")]
    StorageFailed(String),
}

#[async_trait]
pub trait TakePendingSelectionUseCase: Send + Sync {
    /// Reads and clears the slot.
    async fn execute(
        &self,
        visitor: &VisitorId,
        channel: SignalChannel,
    ) -> Result<Option<String>, TakePendingSelectionError>;
}
