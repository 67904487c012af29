//! Provider selection types.

use serde::{Deserialize, Serialize};

/// Built-in provider names.
///
/// The gateway registry is keyed by plain strings, so callers may register
/// additional providers; these are the ones shipped with the workspace.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use wonka_core::ProviderKind;
///
/// assert_eq!(ProviderKind::from_str("Gemini").unwrap(), ProviderKind::Gemini);
/// assert_eq!(ProviderKind::OpenAi.to_string(), "openai");
/// ```
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
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderKind {
    /// Google Gemini
    Gemini,
    /// OpenAI
    OpenAi,
    /// Groq (OpenAI-compatible)
    Groq,
    /// xAI Grok (OpenAI-compatible)
    Grok,
    /// Anthropic Claude
    Anthropic,
}

/// Identifies the provider, credential and model for one call.
///
/// The credential is never printed by `Debug`.
///
/// # Examples
///
/// ```
/// use wonka_core::{ProviderDescriptor, ProviderKind};
///
/// let descriptor = ProviderDescriptor::new(ProviderKind::Groq, "gsk-secret", "llama3-70b-8192");
/// assert_eq!(descriptor.name(), "groq");
/// assert!(!format!("{:?}", descriptor).contains("gsk-secret"));
/// ```
#[derive(Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ProviderDescriptor {
    /// Registry key of the provider
    name: String,
    /// API key sent to the vendor
    credential: String,
    /// Endpoint override; `None` uses the provider default
    #[builder(default)]
    base_url: Option<String>,
    /// Model identifier
    model: String,
}

impl ProviderDescriptor {
    /// Creates a descriptor for a built-in provider with its default endpoint.
    pub fn new(
        kind: ProviderKind,
        credential: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: kind.to_string(),
            credential: credential.into(),
            base_url: None,
            model: model.into(),
        }
    }

    /// Returns a builder for constructing a ProviderDescriptor.
    pub fn builder() -> ProviderDescriptorBuilder {
        ProviderDescriptorBuilder::default()
    }

    /// Returns a copy pointing at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Returns true when the credential is empty or whitespace.
    pub fn has_blank_credential(&self) -> bool {
        self.credential.trim().is_empty()
    }
}

impl std::fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("credential", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}
