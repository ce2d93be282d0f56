use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::email::application::{
    domain::contact_template::contact_notification,
    ports::outgoing::{ContactNotice, ContactNotificationError, ContactNotifier, EmailRelay},
};

/// Sender and recipient of owner notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRouting {
    pub from: String,
    pub to: String,
}

#[derive(Clone)]
pub struct ContactNotificationService {
    relay: Arc<dyn EmailRelay + Send + Sync>,
    routing: MailRouting,
}

impl fmt::Debug for ContactNotificationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactNotificationService")
            .field("relay", &"<dyn EmailRelay>")
            .field("routing", &self.routing)
            .finish()
    }
}

impl ContactNotificationService {
    pub fn new(relay: Arc<dyn EmailRelay + Send + Sync>, routing: MailRouting) -> Self {
        Self { relay, routing }
    }
}

#[async_trait]
impl ContactNotifier for ContactNotificationService {
    async fn notify(&self, notice: &ContactNotice) -> Result<(), ContactNotificationError> {
        let email = contact_notification(notice, &self.routing.from, &self.routing.to);

        self.relay
            .send(&email)
            .await
            .map_err(|e| ContactNotificationError::EmailSendingFailed(e.to_string()))?;

        info!(subject = %email.subject, "Contact notification sent");
        Ok(())
    }
}
