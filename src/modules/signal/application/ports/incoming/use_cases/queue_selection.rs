use async_trait::async_trait;

use crate::signal::application::domain::entities::{QueueOutcome, SignalChannel, VisitorId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum QueueSelectionError {
    #[error("Failed to store selection: {0}")]
    StorageFailed(String),
}

#[async_trait]
pub trait QueueSelectionUseCase: Send + Sync {
    /// Overwrites the slot with the trimmed value and notifies live
    /// subscribers once. Blank values are ignored.
    async fn execute(
        &self,
        visitor: VisitorId,
        channel: SignalChannel,
        value: &str,
    ) -> Result<QueueOutcome, QueueSelectionError>;
}
