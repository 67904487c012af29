//! Structured output items.

use crate::FailureKind;
use serde::{Deserialize, Serialize};

/// One entry of a structured list: a concept title and its description.
///
/// Placeholder items stand in for a list that could not be produced; their
/// title is the failure label of a [`FailureKind`] and their description
/// carries the diagnostic detail (for malformed output, the raw text).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct StructuredItem {
    /// Short title, never empty
    title: String,
    /// Free-form description
    description: String,
}

impl StructuredItem {
    /// Creates a new item.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Creates a placeholder item describing a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use wonka_core::{FailureKind, StructuredItem};
    ///
    /// let item = StructuredItem::placeholder(FailureKind::MalformedStructuredOutput, "Sure!");
    /// assert_eq!(item.placeholder_kind(), Some(FailureKind::MalformedStructuredOutput));
    /// assert!(item.description().contains("Sure!"));
    /// ```
    pub fn placeholder(kind: FailureKind, detail: impl AsRef<str>) -> Self {
        let detail = detail.as_ref();
        let description = match kind {
            FailureKind::MalformedStructuredOutput => format!(
                "The response could not be read as a list of ideas. Raw response:\n{}",
                detail
            ),
            _ => detail.to_string(),
        };
        Self {
            title: kind.placeholder_title().to_string(),
            description,
        }
    }

    /// Returns the failure kind when this item is a placeholder.
    pub fn placeholder_kind(&self) -> Option<FailureKind> {
        FailureKind::from_placeholder_title(&self.title)
    }

    /// Returns true when this item is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder_kind().is_some()
    }
}

impl std::fmt::Display for StructuredItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{}: {}", self.title, self.description)
        }
    }
}
