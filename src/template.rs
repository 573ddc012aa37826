//! Path templating for endpoint URLs
//!
//! Endpoint paths carry `:name` placeholders, e.g.
//! `/open-apis/im/v1/messages/:message_id/reply`. Each placeholder is
//! replaced with the percent-encoded value from the payload's path map.

use crate::error::{Error, Result};
use crate::types::StringMap;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching path placeholders: :name
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-zA-Z_][a-zA-Z0-9_]*)").unwrap());

/// Substitute every `:name` placeholder in `template`
///
/// Fails with [`Error::MissingPathParam`] on the first placeholder that has
/// no value in `params`. Extra entries in `params` are ignored.
pub fn render_path(template: &str, params: &StringMap) -> Result<String> {
    let mut result = String::with_capacity(template.len());
    let mut last = 0;

    for cap in PLACEHOLDER_REGEX.captures_iter(template) {
        let whole = cap.get(0).unwrap();
        let name = cap.get(1).unwrap().as_str();

        let value = params
            .get(name)
            .ok_or_else(|| Error::missing_path_param(name))?;

        result.push_str(&template[last..whole.start()]);
        result.push_str(&encode_segment(value));
        last = whole.end();
    }

    result.push_str(&template[last..]);
    Ok(result)
}

/// Check if a path contains placeholders
pub fn has_placeholders(path: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(path)
}

/// Extract all placeholder names from a path, in order
pub fn extract_placeholders(path: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(path)
        .map(|cap| cap.get(1).unwrap().as_str().to_string())
        .collect()
}

/// Percent-encode one path segment
fn encode_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
