//! OpenAI-compatible chat completions.
//!
//! Shared by OpenAI, Groq and xAI Grok, which all accept the same message
//! array and expose a `/models` listing.

mod client;
mod conversions;
mod dto;

pub use client::OpenAICompatibleProvider;
pub use dto::{ChatMessage, ChatRequest, ChatResponse};
