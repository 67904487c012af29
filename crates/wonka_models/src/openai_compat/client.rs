//! Generic client for OpenAI-compatible APIs.

use crate::http::{decode, endpoint, ensure_success, sort_descending, transport_error};
use crate::openai_compat::conversions;
use crate::openai_compat::dto::{ChatResponse, ModelList};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use wonka_core::{Message, ProviderDescriptor};
use wonka_error::ProviderResult;
use wonka_interface::TextGenerationProvider;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const GROK_BASE_URL: &str = "https://api.x.ai/v1";

/// Provider for any OpenAI-compatible chat completions API.
///
/// The official OpenAI listing mixes chat, audio and image models, so when
/// `chat_models_only` is set and no endpoint override is given, only ids
/// containing `gpt` or `o1` are returned. Overridden endpoints and the other
/// vendors return their whole listing.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleProvider {
    client: Client,
    base_url: String,
    provider_name: &'static str,
    chat_models_only: bool,
}

impl OpenAICompatibleProvider {
    /// Creates a provider for an arbitrary OpenAI-compatible endpoint.
    ///
    /// # Arguments
    ///
    /// * `provider_name` - Name of the provider (for logging/tracing)
    /// * `base_url` - Base URL, e.g. `https://api.openai.com/v1`
    pub fn new(provider_name: &'static str, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(provider = provider_name, url = %base_url, "Created OpenAI-compatible provider");

        Self {
            client: Client::new(),
            base_url,
            provider_name,
            chat_models_only: false,
        }
    }

    /// OpenAI itself.
    pub fn openai() -> Self {
        let mut provider = Self::new("openai", OPENAI_BASE_URL);
        provider.chat_models_only = true;
        provider
    }

    /// Groq.
    pub fn groq() -> Self {
        Self::new("groq", GROQ_BASE_URL)
    }

    /// xAI Grok.
    pub fn grok() -> Self {
        Self::new("grok", GROK_BASE_URL)
    }

    /// Replaces the default endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the default endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TextGenerationProvider for OpenAICompatibleProvider {
    #[instrument(
        skip(self, descriptor, messages),
        fields(provider = self.provider_name, model = %descriptor.model())
    )]
    async fn invoke(
        &self,
        descriptor: &ProviderDescriptor,
        messages: &[Message],
    ) -> ProviderResult<String> {
        let chat_request = conversions::to_chat_request(messages, descriptor.model())?;
        let base_url = descriptor.base_url().as_deref().unwrap_or(&self.base_url);

        debug!(
            provider = self.provider_name,
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(endpoint(base_url, "chat/completions"))
            .bearer_auth(descriptor.credential())
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| transport_error(self.provider_name, e))?;

        let response = ensure_success(self.provider_name, response).await?;
        let chat_response: ChatResponse = decode(self.provider_name, response).await?;

        debug!(
            provider = self.provider_name,
            choices = chat_response.choices.len(),
            "Received response"
        );

        conversions::from_chat_response(&chat_response)
    }

    #[instrument(skip(self, credential), fields(provider = self.provider_name))]
    async fn list_models(
        &self,
        credential: &str,
        base_url: Option<&str>,
    ) -> ProviderResult<Vec<String>> {
        let response = self
            .client
            .get(endpoint(base_url.unwrap_or(&self.base_url), "models"))
            .bearer_auth(credential)
            .send()
            .await
            .map_err(|e| transport_error(self.provider_name, e))?;

        let response = ensure_success(self.provider_name, response).await?;
        let list: ModelList = decode(self.provider_name, response).await?;

        let chat_only = self.chat_models_only && base_url.is_none();
        let models = sort_descending(conversions::model_ids(list, chat_only));
        debug!(provider = self.provider_name, count = models.len(), "Listed models");

        Ok(models)
    }

    fn provider_name(&self) -> &str {
        self.provider_name
    }
}
