//! Type conversions between Wonka and Gemini formats.

use crate::gemini::dto::{
    GeminiModel, GenerateContentRequest, GenerateContentResponse, Part, RequestContent,
};
use crate::transcript::render_transcript;
use wonka_core::Message;
use wonka_error::{ProviderError, ProviderErrorKind, ProviderResult};

/// Finish reasons that mean the candidate was withheld on policy grounds.
const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

const GENERATE_CONTENT: &str = "generateContent";

/// Flattens the conversation into a single-part request.
pub fn to_request(messages: &[Message]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user".to_string(),
            parts: vec![Part {
                text: Some(render_transcript(messages)),
            }],
        }],
    }
}

/// Pulls the completion text out of a response, classifying blocked output.
pub fn from_response(response: &GenerateContentResponse) -> ProviderResult<String> {
    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
            .unwrap_or_else(|| "unspecified".to_string());
        return Err(ProviderError::new(ProviderErrorKind::PolicyRejected {
            reason,
        }));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    let blocked = candidate
        .finish_reason
        .as_deref()
        .filter(|r| text.is_empty() && BLOCKING_FINISH_REASONS.contains(r));
    if let Some(reason) = blocked {
        return Err(ProviderError::new(ProviderErrorKind::PolicyRejected {
            reason: reason.to_string(),
        }));
    }

    Ok(text)
}

/// Keeps content-generating models and strips the `models/` prefix.
pub fn generative_model_ids(models: Vec<GeminiModel>) -> Vec<String> {
    models
        .into_iter()
        .filter(|m| {
            m.supported_generation_methods
                .iter()
                .any(|method| method == GENERATE_CONTENT)
        })
        .map(|m| {
            m.name
                .strip_prefix("models/")
                .map(str::to_string)
                .unwrap_or(m.name)
        })
        .collect()
}
