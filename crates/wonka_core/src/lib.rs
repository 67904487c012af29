//! Core data types for the Wonka provider gateway.
//!
//! Everything here is created per call and owned by the caller; nothing in
//! this crate holds state between gateway invocations.

mod item;
mod message;
mod provider;
mod request;
mod result;
mod role;

pub use item::StructuredItem;
pub use message::{Message, MessageBuilder};
pub use provider::{ProviderDescriptor, ProviderDescriptorBuilder, ProviderKind};
pub use request::{GenerationRequest, GenerationRequestBuilder, STRUCTURED_OUTPUT_INSTRUCTION};
pub use result::{ERROR_MARKER, Failure, FailureKind, GenerationResult};
pub use role::Role;
