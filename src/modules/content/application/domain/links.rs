use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkView {
    pub label: String,
    /// `None` renders as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl LinkView {
    pub fn new(label: &str, href: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            href: Some(href.into()),
        }
    }

    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: None,
        }
    }
}

/// `"UI/UX Design"` -> `"ui-ux-design"`
pub fn to_slug(value: &str) -> String {
    let lowered = value.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Link target or `None` when the source is blank.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn mailto_href(email: Option<&str>) -> Option<String> {
    non_blank(email).map(|e| format!("mailto:{e}"))
}

pub fn viber_href(number: Option<&str>) -> Option<String> {
    non_blank(number).map(|n| format!("viber://chat?number={}", urlencoding::encode(&n)))
}

/// Keeps digits and `+` only.
pub fn tel_href(number: Option<&str>) -> Option<String> {
    let normalized: String = number
        .unwrap_or_default()
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    (!normalized.is_empty()).then(|| format!("tel:{normalized}"))
}

/// Builds the link list, dropping entries without a target.
pub fn collect_links<'a, I>(candidates: I) -> Vec<LinkView>
where
    I: IntoIterator<Item = (&'a str, Option<String>)>,
{
    candidates
        .into_iter()
        .filter_map(|(label, href)| href.map(|h| LinkView::new(label, h)))
        .collect()
}
