//! Anthropic Messages API.
//!
//! Anthropic keeps system instructions in a dedicated field; the rest of the
//! conversation is flattened into one user message. There is no public
//! listing endpoint, so the model roster is a configured list.

mod client;
mod types;

pub use client::{AnthropicProvider, DEFAULT_ANTHROPIC_MODELS};
pub use types::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse};
