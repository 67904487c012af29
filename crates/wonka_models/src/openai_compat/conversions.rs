//! Type conversions between Wonka and OpenAI formats.

use crate::openai_compat::dto::{ChatMessage, ChatRequest, ChatResponse, ModelList};
use wonka_core::Message;
use wonka_error::{ProviderError, ProviderErrorKind, ProviderResult};

/// Finish reason reported when the vendor's moderation withheld the answer.
const CONTENT_FILTER: &str = "content_filter";

/// Converts the outbound conversation to an OpenAI chat request.
pub fn to_chat_request(messages: &[Message], model: &str) -> ProviderResult<ChatRequest> {
    let messages: Vec<ChatMessage> = messages
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().to_string(),
            content: msg.content().clone(),
        })
        .collect();

    ChatRequest::builder()
        .model(model)
        .messages(messages)
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::InvalidRequest(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Pulls the completion text out of a chat response.
pub fn from_chat_response(response: &ChatResponse) -> ProviderResult<String> {
    let choice = response.choices.first().ok_or_else(|| {
        ProviderError::new(ProviderErrorKind::ResponseParsing(
            "No choices in response".to_string(),
        ))
    })?;

    let content = choice.message.content.clone().unwrap_or_default();

    if content.is_empty() && choice.finish_reason.as_deref() == Some(CONTENT_FILTER) {
        return Err(ProviderError::new(ProviderErrorKind::PolicyRejected {
            reason: CONTENT_FILTER.to_string(),
        }));
    }

    Ok(content)
}

/// Extracts model identifiers, keeping only chat models when asked.
pub fn model_ids(list: ModelList, chat_only: bool) -> Vec<String> {
    list.data
        .into_iter()
        .map(|m| m.id)
        .filter(|id| !chat_only || id.contains("gpt") || id.contains("o1"))
        .collect()
}
