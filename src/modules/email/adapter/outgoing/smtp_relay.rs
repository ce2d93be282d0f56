use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::email::application::ports::outgoing::{EmailRelay, EmailRelayError, OutgoingEmail};

/// Transport seam so message building can be tested without a server.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpRelay {
    mailer: Box<dyn Mailer>,
}

impl SmtpRelay {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// STARTTLS relay with credentials.
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
    ) -> Result<Self, EmailRelayError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailRelayError::SendFailed(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self {
            mailer: Box::new(transport),
        })
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            mailer: Box::new(transport),
        }
    }
}

fn mailbox(raw: &str) -> Result<Mailbox, EmailRelayError> {
    raw.parse()
        .map_err(|e| EmailRelayError::InvalidAddress(format!("{raw}: {e}")))
}

fn build_message(email: &OutgoingEmail) -> Result<Message, EmailRelayError> {
    let mut builder = Message::builder()
        .from(mailbox(&email.from)?)
        .to(mailbox(&email.to)?)
        .subject(email.subject.clone());

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(mailbox(reply_to)?);
    }

    builder
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))
        .map_err(|e| EmailRelayError::InvalidMessage(e.to_string()))
}

#[async_trait]
impl EmailRelay for SmtpRelay {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailRelayError> {
        let message = build_message(email)?;

        self.mailer
            .send(message)
            .await
            .map_err(EmailRelayError::SendFailed)
    }
}
