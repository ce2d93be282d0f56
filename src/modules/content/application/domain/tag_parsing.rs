use serde_json::Value;

/// Parses a project's `category` column into display tags.
///
/// The column holds either a JSON array of strings or a comma separated
/// list. A value that looks like a JSON array but fails to parse is treated
/// as a comma separated list.
pub fn parse_tech_stack(value: Option<&str>) -> Vec<String> {
    let Some(raw) = value else {
        return Vec::new();
    };

    let trimmed = raw.trim();

    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
            return items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    split_categories(trimmed)
}

/// Comma split, trimmed, empties dropped.
pub fn split_categories(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims related skill names and drops blanks.
pub fn clean_skill_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parses the `features` column.
///
/// Accepts an array whose items are strings or objects carrying a `title`
/// (falling back to `description`), or a newline delimited string.
pub fn parse_feature_items(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(feature_item_text)
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(text)) => text
            .split('\n')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn feature_item_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.trim().to_string(),
        Value::Object(map) => map
            .get("title")
            .and_then(Value::as_str)
            .or_else(|| map.get("description").and_then(Value::as_str))
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Parses the `bullets` column of a specialization.
pub fn parse_bullets(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
