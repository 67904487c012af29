//! Vendor text-generation integrations.
//!
//! One [`TextGenerationProvider`](wonka_interface::TextGenerationProvider)
//! implementation per vendor family:
//!
//! - [`OpenAICompatibleProvider`]: OpenAI, Groq and xAI Grok (message array)
//! - [`AnthropicProvider`]: separate system field plus one concatenated prompt
//! - [`GeminiProvider`]: one concatenated prompt blob

mod anthropic;
mod gemini;
mod http;
mod openai_compat;
mod transcript;

pub use anthropic::{
    AnthropicContentBlock, AnthropicMessage, AnthropicProvider, AnthropicRequest,
    AnthropicResponse, DEFAULT_ANTHROPIC_MODELS,
};
pub use gemini::{GeminiProvider, GenerateContentRequest, GenerateContentResponse};
pub use openai_compat::{ChatMessage, ChatRequest, ChatResponse, OpenAICompatibleProvider};
pub use transcript::{render_transcript, split_system};
