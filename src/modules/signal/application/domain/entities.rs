use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Cross-page selection channels.
///
/// Each channel owns one overwritable slot per visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SignalChannel {
    /// Skill tag to pre-select on the Works page.
    WorksTechFilter,
    /// Category to pre-select on the Works page.
    WorksCategory,
    /// Section to scroll to on the About page.
    AboutSection,
}

impl SignalChannel {
    pub const ALL: [SignalChannel; 3] = [
        SignalChannel::WorksTechFilter,
        SignalChannel::WorksCategory,
        SignalChannel::AboutSection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalChannel::WorksTechFilter => "works-tech-filter",
            SignalChannel::WorksCategory => "works-category",
            SignalChannel::AboutSection => "about-section",
        }
    }

    /// Fixed slot name, shared with the browser's local storage keys.
    pub fn storage_key(&self) -> &'static str {
        match self {
            SignalChannel::WorksTechFilter => "works_tech_filter_v1",
            SignalChannel::WorksCategory => "works_category_target_v1",
            SignalChannel::AboutSection => "about_section_target_v1",
        }
    }

    /// Event name pushed to live subscribers.
    pub fn event_name(&self) -> &'static str {
        match self {
            SignalChannel::WorksTechFilter => "works:apply-tech-filter",
            SignalChannel::WorksCategory => "works:apply-category",
            SignalChannel::AboutSection => "about:navigate-section",
        }
    }
}

impl fmt::Display for SignalChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown signal channel: {0}")]
pub struct UnknownChannel(pub String);

impl FromStr for SignalChannel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignalChannel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownChannel(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisitorIdError {
    #[error("Visitor id must not be empty")]
    Empty,
    #[error("Visitor id must be at most {max} characters")]
    TooLong { max: usize },
    #[error("Visitor id may only contain letters, digits, '-' and '_'")]
    InvalidCharacters,
}

/// Opaque id the browser generates once and keeps in local storage.
/// Slots are scoped by it so visitors never see each other's selections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VisitorId(String);

impl VisitorId {
    pub const MAX_LEN: usize = 64;

    pub fn parse(raw: &str) -> Result<Self, VisitorIdError> {
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(VisitorIdError::Empty);
        }
        if raw.len() > Self::MAX_LEN {
            return Err(VisitorIdError::TooLong { max: Self::MAX_LEN });
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(VisitorIdError::InvalidCharacters);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address of one single-value slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub visitor: VisitorId,
    pub channel: SignalChannel,
}

impl SlotKey {
    pub fn new(visitor: VisitorId, channel: SignalChannel) -> Self {
        Self { visitor, channel }
    }

    pub fn storage_key(&self) -> String {
        format!("signal:{}:{}", self.channel.storage_key(), self.visitor)
    }
}

/// Trimmed, non-blank selection value. Blank input yields `None`.
pub fn normalize_selection(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Broadcast to live subscribers after a value is queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionNotice {
    pub key: SlotKey,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOutcome {
    Queued {
        value: String,
        live_subscribers: usize,
    },
    /// Blank input; nothing was written and nobody was notified.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_round_trips_through_its_name() {
        for channel in SignalChannel::ALL {
            assert_eq!(channel.as_str().parse::<SignalChannel>(), Ok(channel));
        }
        assert!("works".parse::<SignalChannel>().is_err());
    }

    #[test]
    fn visitor_id_rules() {
        assert!(VisitorId::parse("v_123-abc").is_ok());
        assert_eq!(VisitorId::parse("  "), Err(VisitorIdError::Empty));
        assert_eq!(
            VisitorId::parse("has space"),
            Err(VisitorIdError::InvalidCharacters)
        );
        assert_eq!(
            VisitorId::parse(&"a".repeat(65)),
            Err(VisitorIdError::TooLong { max: 64 })
        );
    }

    #[test]
    fn slot_key_is_scoped_by_channel_and_visitor() {
        let visitor = VisitorId::parse("abc").unwrap();
        let key = SlotKey::new(visitor, SignalChannel::WorksCategory);

        assert_eq!(key.storage_key(), "signal:works_category_target_v1:abc");
    }

    #[test]
    fn selection_is_trimmed_and_blank_rejected() {
        assert_eq!(normalize_selection("  Rust "), Some("Rust".to_string()));
        assert_eq!(normalize_selection(" \t\n"), None);
    }
}
