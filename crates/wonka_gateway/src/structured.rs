//! Decoding completions into structured items.
//!
//! Decoding is two pure stages: [`strip_fence`] removes an optional Markdown
//! code fence, then [`parse_items`] reads the JSON. [`decode_items`] composes
//! both and falls back to a single placeholder item.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};
use wonka_core::{FailureKind, StructuredItem};
use wonka_error::{StructuredError, StructuredErrorKind};

/// Opening fence with its optional language tag.
static LEADING_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\A```[\w+.-]*[ \t]*\r?\n?").ok());

/// Closing fence at the very end of the text.
static TRAILING_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*```\z").ok());

/// Removes a leading Markdown code fence (with optional language tag) and a
/// trailing fence, each if present, and trims whitespace.
///
/// The two fences are removed independently, so a reply cut off before its
/// closing fence still yields its body. Text without fences is returned
/// trimmed and otherwise untouched.
///
/// # Examples
///
/// ```
/// use wonka_gateway::strip_fence;
///
/// assert_eq!(strip_fence("```json\n[1, 2]\n```"), "[1, 2]");
/// assert_eq!(strip_fence("```json\n[1, 2]"), "[1, 2]");
/// assert_eq!(strip_fence("  [1, 2] "), "[1, 2]");
/// ```
pub fn strip_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(opening) = LEADING_FENCE.as_ref().and_then(|re| re.find(body)) {
        body = &body[opening.end()..];
    }
    if let Some(closing) = TRAILING_FENCE.as_ref().and_then(|re| re.find(body)) {
        body = &body[..closing.start()];
    }

    body.trim()
}

/// Parses a JSON list of `{title, description}` objects.
///
/// A single top-level object is read as a one-item list. Numbers and booleans
/// are rendered as strings, a missing description becomes empty and unknown
/// fields are ignored.
///
/// # Errors
///
/// Fails on invalid JSON, on anything other than objects, on an empty list
/// and on an item without a non-blank title.
///
/// # Examples
///
/// ```
/// use wonka_gateway::parse_items;
///
/// let items = parse_items(r#"[{"title": "Escape Lab", "description": "Puzzle rooms"}]"#).unwrap();
/// assert_eq!(items[0].title(), "Escape Lab");
///
/// assert!(parse_items("Sure, here are some ideas").is_err());
/// ```
pub fn parse_items(text: &str) -> Result<Vec<StructuredItem>, StructuredError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| StructuredError::new(StructuredErrorKind::InvalidJson(e.to_string())))?;

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(_) => vec![value],
        other => {
            return Err(StructuredError::new(StructuredErrorKind::UnexpectedShape(
                json_type(&other).to_string(),
            )));
        }
    };

    if entries.is_empty() {
        return Err(StructuredError::new(StructuredErrorKind::EmptyList));
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(fields) => item_from_fields(index, fields),
            other => Err(StructuredError::new(StructuredErrorKind::UnexpectedShape(
                format!("{} at index {}", json_type(other), index),
            ))),
        })
        .collect()
}

/// Decodes a completion into items, substituting a placeholder on failure.
///
/// The result is never empty. The placeholder's description carries the raw
/// completion verbatim.
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn decode_items(raw: &str) -> Vec<StructuredItem> {
    match parse_items(strip_fence(raw)) {
        Ok(items) => {
            debug!(count = items.len(), "Decoded structured items");
            items
        }
        Err(e) => {
            warn!(error = %e.kind, "Completion is not a valid item list");
            vec![StructuredItem::placeholder(
                FailureKind::MalformedStructuredOutput,
                raw,
            )]
        }
    }
}

fn item_from_fields(
    index: usize,
    fields: &Map<String, Value>,
) -> Result<StructuredItem, StructuredError> {
    let title = fields
        .get("title")
        .and_then(scalar_text)
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| StructuredError::new(StructuredErrorKind::MissingTitle(index)))?;

    let description = fields
        .get("description")
        .and_then(scalar_text)
        .unwrap_or_default();

    Ok(StructuredItem::new(title, description))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
