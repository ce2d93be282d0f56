use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::contact::application::{
    domain::entities::ContactSubmission,
    ports::incoming::use_cases::{SubmitContactError, SubmitContactMessageUseCase},
    ports::outgoing::{ContactMessageRepository, NewContactMessage},
};
use crate::email::application::ports::outgoing::{ContactNotice, ContactNotifier};

/// Persists a submission, then notifies the site owner.
///
/// `notifier` is `None` when the email relay is not configured; such
/// submissions are refused before anything is written.
#[derive(Clone)]
pub struct SubmitContactMessageService {
    repository: Arc<dyn ContactMessageRepository + Send + Sync>,
    notifier: Option<Arc<dyn ContactNotifier + Send + Sync>>,
}

impl SubmitContactMessageService {
    pub fn new(
        repository: Arc<dyn ContactMessageRepository + Send + Sync>,
        notifier: Option<Arc<dyn ContactNotifier + Send + Sync>>,
    ) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for SubmitContactMessageService {
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SubmitContactError> {
        let Some(notifier) = &self.notifier else {
            warn!("Contact submission refused: email relay not configured");
            return Err(SubmitContactError::EmailNotConfigured);
        };

        let id = self
            .repository
            .save(NewContactMessage {
                name: submission.full_name().to_string(),
                email: submission.email().to_string(),
                subject: submission.subject().to_string(),
                message: submission.message().to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to save contact message");
                SubmitContactError::SaveFailed(e.to_string())
            })?;

        // No retry and no rollback: the row stays even if sending fails.
        notifier
            .notify(&ContactNotice {
                full_name: submission.full_name().to_string(),
                email: submission.email().to_string(),
                subject: submission.subject().to_string(),
                message: submission.message().to_string(),
            })
            .await
            .map_err(|e| {
                error!(message_id = %id, error = %e, "Contact notification failed");
                SubmitContactError::NotificationFailed(e.to_string())
            })?;

        info!(message_id = %id, "Contact message received");
        Ok(())
    }
}
