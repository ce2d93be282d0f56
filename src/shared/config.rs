use std::env;
use tracing::warn;

use crate::email::application::services::MailRouting;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Which relay delivers contact notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelaySettings {
    Resend {
        api_key: String,
    },
    Smtp {
        server: String,
        username: String,
        password: String,
    },
    /// Plain SMTP without auth (Mailpit, MailHog, etc.)
    SmtpLocal {
        host: String,
        port: u16,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub relay: RelaySettings,
    pub routing: MailRouting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// `None` keeps slots and snapshots in process memory.
    pub redis_url: Option<String>,
    /// `None` when any email setting is missing. Startup continues; contact
    /// submissions are refused.
    pub email: Option<EmailConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through `lookup`, so tests need not touch the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let port_raw = require("PORT")?;
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw.clone(),
        })?;

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            host: require("HOST")?,
            port,
            redis_url: get("REDIS_URL"),
            email: email_config(&get)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn email_config<G>(get: &G) -> Result<Option<EmailConfig>, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let relay_kind = get("EMAIL_RELAY").unwrap_or_else(|| "resend".to_string());

    let relay = match relay_kind.to_lowercase().as_str() {
        "resend" => get("RESEND_API_KEY").map(|api_key| RelaySettings::Resend { api_key }),
        "smtp" => match (get("SMTP_SERVER"), get("SMTP_USERNAME"), get("SMTP_PASSWORD")) {
            (Some(server), Some(username), Some(password)) => Some(RelaySettings::Smtp {
                server,
                username,
                password,
            }),
            _ => None,
        },
        "smtp-local" => {
            let host = get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string());
            let port_raw = get("SMTP_PORT").unwrap_or_else(|| "1025".to_string());
            let port = port_raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "SMTP_PORT",
                value: port_raw.clone(),
            })?;
            Some(RelaySettings::SmtpLocal { host, port })
        }
        _ => {
            return Err(ConfigError::Invalid {
                name: "EMAIL_RELAY",
                value: relay_kind,
            })
        }
    };

    let routing = match (get("CONTACT_FROM_EMAIL"), get("CONTACT_TO_EMAIL")) {
        (Some(from), Some(to)) => Some(MailRouting { from, to }),
        _ => None,
    };

    match (relay, routing) {
        (Some(relay), Some(routing)) => Ok(Some(EmailConfig { relay, routing })),
        _ => {
            warn!(relay = %relay_kind, "Email settings incomplete, contact form is disabled");
            Ok(None)
        }
    }
}
