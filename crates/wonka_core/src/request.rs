//! Logical generation requests.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Fragment appended to the final user message when structured output is
/// requested.
pub const STRUCTURED_OUTPUT_INSTRUCTION: &str = "\n\nIMPORTANT: respond with nothing but a JSON array of objects. \
Each object must have exactly two string fields: \"title\" and \"description\". \
Do not add any text before or after the array and do not wrap it in Markdown code fences.";

/// A provider-independent request for one completion.
///
/// `history` is chronological and replayed to the provider on every call.
///
/// # Examples
///
/// ```
/// use wonka_core::{GenerationRequest, Message};
///
/// let request = GenerationRequest::builder()
///     .system_instructions("Be terse.")
///     .history(vec![Message::user("Hi"), Message::assistant("Hello")])
///     .user_prompt("Give 2 ideas")
///     .structured_output(true)
///     .build()
///     .expect("valid request");
///
/// assert!(*request.structured_output());
/// assert_eq!(request.history().len(), 2);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Instructions sent as the system entry; may be empty
    #[builder(default)]
    #[serde(default)]
    system_instructions: String,
    /// Prior turns, oldest first
    #[builder(default)]
    #[serde(default)]
    history: Vec<Message>,
    /// The new user prompt
    user_prompt: String,
    /// Ask for a JSON list of title/description items
    #[builder(default)]
    #[serde(default)]
    structured_output: bool,
}

impl GenerationRequest {
    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Creates a plain-text request with no system instructions or history.
    pub fn text(user_prompt: impl Into<String>) -> Self {
        Self {
            system_instructions: String::new(),
            history: Vec::new(),
            user_prompt: user_prompt.into(),
            structured_output: false,
        }
    }

    /// Builds the outbound conversation for the given slice of history.
    ///
    /// The system entry is omitted when the instructions are blank. The user
    /// prompt is always last, with the structured output instruction appended
    /// when requested.
    pub fn compose_with(&self, history: &[Message]) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 2);

        if !self.system_instructions.trim().is_empty() {
            messages.push(Message::system(self.system_instructions.clone()));
        }

        messages.extend_from_slice(history);

        let mut prompt = Message::user(self.user_prompt.clone());
        if self.structured_output {
            prompt.append(STRUCTURED_OUTPUT_INSTRUCTION);
        }
        messages.push(prompt);

        messages
    }

    /// Builds the outbound conversation replaying the full history.
    pub fn compose(&self) -> Vec<Message> {
        self.compose_with(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn test_compose_orders_system_history_prompt() {
        let request = GenerationRequest::builder()
            .system_instructions("Be terse.")
            .history(vec![Message::user("first"), Message::assistant("reply")])
            .user_prompt("second")
            .build()
            .expect("valid request");

        let messages = request.compose();
        let roles: Vec<Role> = messages.iter().map(|m| *m.role()).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(messages[0].content(), "Be terse.");
        assert_eq!(messages[3].content(), "second");
    }

    #[test]
    fn test_compose_skips_blank_system() {
        let request = GenerationRequest::builder()
            .system_instructions("   ")
            .user_prompt("hello")
            .build()
            .expect("valid request");

        let messages = request.compose();
        assert_eq!(messages.len(), 1);
        assert_eq!(*messages[0].role(), Role::User);
    }

    #[test]
    fn test_compose_appends_structured_instruction() {
        let request = GenerationRequest::builder()
            .user_prompt("Give 2 ideas")
            .structured_output(true)
            .build()
            .expect("valid request");

        let messages = request.compose();
        let last = messages.last().expect("prompt present");
        assert!(last.content().starts_with("Give 2 ideas"));
        assert!(last.content().ends_with(STRUCTURED_OUTPUT_INSTRUCTION));
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"user_prompt": "hi"}"#).expect("valid json");
        assert_eq!(request, GenerationRequest::text("hi"));
    }
}
