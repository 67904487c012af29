//! Provider invocation gateway.
//!
//! The [`Gateway`] composes a provider-neutral request into a conversation,
//! dispatches it to the registered [`TextGenerationProvider`] for the
//! descriptor's name, and normalizes whatever comes back into a
//! [`GenerationResult`]. Provider errors never escape: text mode turns them
//! into a typed failure, structured mode into a single placeholder item.
//!
//! # Example
//!
//! ```no_run
//! use wonka_core::{GenerationRequest, ProviderDescriptor, ProviderKind};
//! use wonka_gateway::{Gateway, GatewayConfig};
//!
//! # async fn run() {
//! let gateway = Gateway::from_config(&GatewayConfig::default());
//! let descriptor = ProviderDescriptor::new(ProviderKind::Groq, "gsk-...", "llama3-70b-8192");
//! let request = GenerationRequest::builder()
//!     .system_instructions("You plan team-building events.")
//!     .user_prompt("Give me 3 ideas for a chocolate factory offsite")
//!     .structured_output(true)
//!     .build()
//!     .expect("valid request");
//!
//! let result = gateway.generate(&descriptor, &request).await;
//! println!("{}", result.to_plain_text());
//! # }
//! ```
//!
//! [`TextGenerationProvider`]: wonka_interface::TextGenerationProvider
//! [`GenerationResult`]: wonka_core::GenerationResult

mod config;
mod gateway;
mod registry;
mod retention;
mod structured;

pub use config::{AnthropicSettings, GatewayConfig, HistorySettings};
pub use gateway::{ENTER_API_KEY, Gateway};
pub use registry::ProviderRegistry;
pub use retention::HistoryRetention;
pub use structured::{decode_items, parse_items, strip_fence};
