//! Google Gemini `generateContent` API.
//!
//! The conversation is sent as one flattened prompt blob. A response with no
//! candidates means the prompt was blocked, which is reported as a policy
//! rejection rather than a transport error.

mod client;
mod conversions;
mod dto;

pub use client::GeminiProvider;
pub use dto::{GenerateContentRequest, GenerateContentResponse};
