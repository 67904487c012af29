//! Trait definitions for the Wonka provider gateway.

use async_trait::async_trait;
use wonka_core::{Message, ProviderDescriptor};
use wonka_error::ProviderResult;

/// A vendor text-generation API.
///
/// Implementations translate the provider-neutral conversation into the
/// vendor's request shape and pull the single completion text out of its
/// response. They carry no per-call state: credentials, endpoint overrides
/// and model identifiers arrive with every call.
#[async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Sends the conversation and returns the raw completion text.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, non-success statuses,
    /// unparseable payloads and policy rejections.
    async fn invoke(
        &self,
        descriptor: &ProviderDescriptor,
        messages: &[Message],
    ) -> ProviderResult<String>;

    /// Lists the generation-capable model identifiers visible to a credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is rejected or the listing fails.
    async fn list_models(
        &self,
        credential: &str,
        base_url: Option<&str>,
    ) -> ProviderResult<Vec<String>>;

    /// Returns the provider name, used for logging.
    fn provider_name(&self) -> &str;
}
