//! Normalized generation results.

use crate::StructuredItem;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Prefix that marks a failure rendered as inline text.
pub const ERROR_MARKER: &str = "⚠️ AI error";

/// Why a call did not produce the requested content.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum FailureKind {
    /// The provider declined to generate; do not retry automatically
    #[strum(to_string = "policy rejection")]
    PolicyRejected,
    /// Network, authentication, rate limit or malformed vendor payload
    #[strum(to_string = "transport failure")]
    Transport,
    /// The completion was not a valid list of items
    #[strum(to_string = "malformed structured output")]
    MalformedStructuredOutput,
    /// No usable credential was supplied
    #[strum(to_string = "invalid credential")]
    InvalidCredential,
    /// Empty prompt or unknown provider
    #[strum(to_string = "invalid request")]
    InvalidRequest,
}

impl FailureKind {
    /// Title used for placeholder items of this kind.
    pub fn placeholder_title(&self) -> &'static str {
        match self {
            FailureKind::PolicyRejected => "Blocked by provider",
            FailureKind::Transport => "AI error",
            FailureKind::MalformedStructuredOutput => "Malformed output",
            FailureKind::InvalidCredential => "Missing API key",
            FailureKind::InvalidRequest => "Invalid request",
        }
    }

    /// Recovers the kind from a placeholder title.
    pub fn from_placeholder_title(title: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.placeholder_title() == title)
    }
}

/// A typed failure returned in text mode.
///
/// `Display` renders the inline error string shown to the operator.
///
/// # Examples
///
/// ```
/// use wonka_core::{Failure, FailureKind, ERROR_MARKER};
///
/// let failure = Failure::new(FailureKind::Transport, "connection refused");
/// let text = failure.to_string();
/// assert!(text.starts_with(ERROR_MARKER));
/// assert!(text.contains("connection refused"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Failure {
    /// Failure category
    kind: FailureKind,
    /// Diagnostic detail; the vendor reason code for policy rejections
    detail: String,
}

impl Failure {
    /// Creates a new failure.
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", ERROR_MARKER, self.kind, self.detail)
    }
}

/// Outcome of one gateway call. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum GenerationResult {
    /// Raw completion text
    Text(String),
    /// Decoded items, or a single placeholder
    StructuredList(Vec<StructuredItem>),
    /// Typed failure (text mode only)
    Failure(Failure),
}

impl GenerationResult {
    /// Returns the items when this is a `StructuredList` result.
    pub fn items(&self) -> Option<&[StructuredItem]> {
        match self {
            GenerationResult::StructuredList(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the failure when this is a `Failure` result.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            GenerationResult::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Returns the failure kind, looking through placeholder lists.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            GenerationResult::Text(_) => None,
            GenerationResult::Failure(failure) => Some(*failure.kind()),
            GenerationResult::StructuredList(items) => match items.as_slice() {
                [only] => only.placeholder_kind(),
                _ => None,
            },
        }
    }

    /// Renders the result as plain text for display or export.
    pub fn to_plain_text(&self) -> String {
        match self {
            GenerationResult::Text(text) => text.clone(),
            GenerationResult::Failure(failure) => failure.to_string(),
            GenerationResult::StructuredList(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    format!("{}. {}\n{}", index + 1, item.title(), item.description())
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_titles_are_distinct() {
        for kind in FailureKind::iter() {
            assert_eq!(
                FailureKind::from_placeholder_title(kind.placeholder_title()),
                Some(kind)
            );
        }
    }

    #[test]
    fn test_failure_kind_through_placeholder() {
        let result = GenerationResult::StructuredList(vec![StructuredItem::placeholder(
            FailureKind::PolicyRejected,
            "SAFETY",
        )]);
        assert_eq!(result.failure_kind(), Some(FailureKind::PolicyRejected));
    }

    #[test]
    fn test_real_items_have_no_failure_kind() {
        let result = GenerationResult::StructuredList(vec![
            StructuredItem::new("Robot Cook-off", "Teams build snack robots"),
            StructuredItem::new("Escape Lab", "Puzzle rooms"),
        ]);
        assert_eq!(result.failure_kind(), None);
        assert_eq!(result.items().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_plain_text_numbers_items() {
        let result = GenerationResult::StructuredList(vec![
            StructuredItem::new("A", "d1"),
            StructuredItem::new("B", "d2"),
        ]);
        assert_eq!(result.to_plain_text(), "1. A\nd1\n\n2. B\nd2");
    }

    #[test]
    fn test_failure_renders_marker() {
        let result =
            GenerationResult::Failure(Failure::new(FailureKind::PolicyRejected, "SAFETY"));
        assert_eq!(
            result.to_plain_text(),
            "⚠️ AI error (policy rejection): SAFETY"
        );
    }
}
