use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::email::application::ports::outgoing::{EmailRelay, EmailRelayError, OutgoingEmail};

/// Keeps sent messages in memory. Used by tests and local runs without a relay.
#[derive(Clone, Default)]
pub struct MockEmailRelay {
    sent_emails: Arc<Mutex<Vec<OutgoingEmail>>>,
    failure: Option<String>,
}

impl MockEmailRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn get_sent_emails(&self) -> Vec<OutgoingEmail> {
        self.sent_emails
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailRelay for MockEmailRelay {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailRelayError> {
        if let Some(reason) = &self.failure {
            return Err(EmailRelayError::SendFailed(reason.clone()));
        }

        self.sent_emails
            .lock()
            .map_err(|e| EmailRelayError::SendFailed(e.to_string()))?
            .push(email.clone());
        Ok(())
    }
}
