use async_trait::async_trait;

/// A fully rendered message, ready for any relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailRelayError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Message could not be built: {0}")]
    InvalidMessage(String),

    #[error("Relay rejected the message: {0}")]
    SendFailed(String),
}

#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailRelayError>;
}
