//! Gemini HTTP client.

use crate::gemini::conversions;
use crate::gemini::dto::{GenerateContentResponse, ListModelsResponse};
use crate::http::{decode, endpoint, ensure_success, sort_descending, transport_error};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};
use wonka_core::{Message, ProviderDescriptor};
use wonka_error::ProviderResult;
use wonka_interface::TextGenerationProvider;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";
const LIST_PAGE_SIZE: &str = "100";
const MAX_LIST_PAGES: usize = 50;

/// Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    base_url: String,
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiProvider {
    /// Creates a provider with the default endpoint.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Replaces the default endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl TextGenerationProvider for GeminiProvider {
    #[instrument(skip(self, descriptor, messages), fields(model = %descriptor.model()))]
    async fn invoke(
        &self,
        descriptor: &ProviderDescriptor,
        messages: &[Message],
    ) -> ProviderResult<String> {
        let request = conversions::to_request(messages);
        let base_url = descriptor.base_url().as_deref().unwrap_or(&self.base_url);
        let model = descriptor
            .model()
            .strip_prefix("models/")
            .unwrap_or(descriptor.model());

        debug!(message_count = messages.len(), "Sending request");

        let response = self
            .client
            .post(endpoint(
                base_url,
                &format!("models/{}:generateContent", model),
            ))
            .header(API_KEY_HEADER, descriptor.credential())
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error("gemini", e))?;

        let response = ensure_success("gemini", response).await?;
        let response: GenerateContentResponse = decode("gemini", response).await?;

        debug!(candidates = response.candidates.len(), "Received response");

        conversions::from_response(&response)
    }

    #[instrument(skip(self, credential))]
    async fn list_models(
        &self,
        credential: &str,
        base_url: Option<&str>,
    ) -> ProviderResult<Vec<String>> {
        let url = endpoint(base_url.unwrap_or(&self.base_url), "models");
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();

        for _ in 0..MAX_LIST_PAGES {
            let mut query = vec![("pageSize", LIST_PAGE_SIZE.to_string())];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let response = self
                .client
                .get(&url)
                .header(API_KEY_HEADER, credential)
                .query(&query)
                .send()
                .await
                .map_err(|e| transport_error("gemini", e))?;

            let response = ensure_success("gemini", response).await?;
            let page: ListModelsResponse = decode("gemini", response).await?;

            models.extend(conversions::generative_model_ids(page.models));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) if !seen_tokens.insert(token.clone()) => {
                    warn!(token = %token, "Model listing repeated a page token");
                    break;
                }
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        let models = sort_descending(models);
        debug!(count = models.len(), "Listed models");
        Ok(models)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}
