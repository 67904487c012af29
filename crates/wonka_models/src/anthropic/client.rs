//! Anthropic HTTP client.

use crate::anthropic::types::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use crate::http::{decode, endpoint, ensure_success, transport_error};
use crate::transcript::{render_transcript, split_system};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use wonka_core::{Message, ProviderDescriptor};
use wonka_error::{ProviderError, ProviderErrorKind, ProviderResult};
use wonka_interface::TextGenerationProvider;

const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Stop reason reported when the model declines to answer.
const REFUSAL: &str = "refusal";

/// Known model identifiers, newest first.
pub const DEFAULT_ANTHROPIC_MODELS: &[&str] = &[
    "claude-3-5-sonnet-latest",
    "claude-3-5-sonnet-20241022",
    "claude-3-5-sonnet-20240620",
    "claude-3-opus-20240229",
    "claude-3-sonnet-20240229",
    "claude-3-haiku-20240307",
];

/// Anthropic Messages API provider.
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    max_tokens: u32,
    known_models: Vec<String>,
}

impl Default for AnthropicProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AnthropicProvider {
    /// Creates a provider with the default endpoint, token limit and roster.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: ANTHROPIC_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            known_models: DEFAULT_ANTHROPIC_MODELS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }

    /// Replaces the default endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the `max_tokens` sent with every request.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Replaces the model roster returned by `list_models`.
    pub fn with_known_models(mut self, known_models: Vec<String>) -> Self {
        self.known_models = known_models;
        self
    }

    /// Builds the vendor request: system field plus one flattened user turn.
    pub fn to_request(&self, messages: &[Message], model: &str) -> ProviderResult<AnthropicRequest> {
        let (system, conversation) = split_system(messages);

        AnthropicRequest::builder()
            .model(model)
            .max_tokens(self.max_tokens)
            .system(system)
            .messages(vec![AnthropicMessage::user_text(render_transcript(
                conversation,
            ))])
            .build()
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::InvalidRequest(format!(
                    "Failed to build request: {}",
                    e
                )))
            })
    }
}

/// Pulls the completion text out of a response, surfacing refusals.
fn from_response(response: &AnthropicResponse) -> ProviderResult<String> {
    if response.stop_reason().as_deref() == Some(REFUSAL) {
        return Err(ProviderError::new(ProviderErrorKind::PolicyRejected {
            reason: REFUSAL.to_string(),
        }));
    }
    Ok(response.text())
}

#[async_trait]
impl TextGenerationProvider for AnthropicProvider {
    #[instrument(skip(self, descriptor, messages), fields(model = %descriptor.model()))]
    async fn invoke(
        &self,
        descriptor: &ProviderDescriptor,
        messages: &[Message],
    ) -> ProviderResult<String> {
        let request = self.to_request(messages, descriptor.model())?;
        let base_url = descriptor.base_url().as_deref().unwrap_or(&self.base_url);

        debug!(
            has_system = request.system().is_some(),
            max_tokens = self.max_tokens,
            "Sending request"
        );

        let response = self
            .client
            .post(endpoint(base_url, "v1/messages"))
            .header("x-api-key", descriptor.credential())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error("anthropic", e))?;

        let response = ensure_success("anthropic", response).await?;
        let response: AnthropicResponse = decode("anthropic", response).await?;

        debug!(
            blocks = response.content().len(),
            stop_reason = ?response.stop_reason(),
            "Received response"
        );

        from_response(&response)
    }

    async fn list_models(
        &self,
        _credential: &str,
        _base_url: Option<&str>,
    ) -> ProviderResult<Vec<String>> {
        debug!(count = self.known_models.len(), "Returning configured Anthropic roster");
        Ok(self.known_models.clone())
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }
}
