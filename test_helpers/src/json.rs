//! Accessors for nested JSON style objects.

use serde_json::Value;

/// Follow `path` through nested objects.
///
/// Segments are matched literally, so keys containing dots such as
/// `"&.active"` are addressed as a single segment.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use test_helpers::json::at;
///
/// let style = json!({"&:hover": {"color": "red"}});
/// assert_eq!(at(&style, &["&:hover", "color"]), Some(&json!("red")));
/// assert_eq!(at(&style, &["&:focus"]), None);
/// ```
#[must_use]
pub fn at<'v>(value: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter()
        .try_fold(value, |current, segment| current.as_object()?.get(*segment))
}

/// Top-level keys of an object in iteration order; empty for non-objects.
#[must_use]
pub fn key_order(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
