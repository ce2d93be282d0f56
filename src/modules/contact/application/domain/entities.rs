use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Field value as trimmed text. Missing or non-string values become empty.
fn safe_text(payload: &Value, field: &str) -> String {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactSubmissionError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("Invalid email address.")]
    InvalidEmail,
}

/// A contact form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    full_name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub fn new(
        full_name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactSubmissionError> {
        let (full_name, email, subject, message) =
            (full_name.trim(), email.trim(), subject.trim(), message.trim());

        if [full_name, email, subject, message]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(ContactSubmissionError::MissingFields);
        }

        if !is_valid_email(email) {
            return Err(ContactSubmissionError::InvalidEmail);
        }

        Ok(Self {
            full_name: full_name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }

    /// Reads `fullName`, `contactEmail`, `subject` and `message` from an
    /// arbitrary JSON document.
    pub fn from_payload(payload: &Value) -> Result<Self, ContactSubmissionError> {
        Self::new(
            &safe_text(payload, "fullName"),
            &safe_text(payload, "contactEmail"),
            &safe_text(payload, "subject"),
            &safe_text(payload, "message"),
        )
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
