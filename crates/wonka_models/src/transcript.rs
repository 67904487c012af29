//! Flattening a conversation for vendors without native role separation.

use wonka_core::{Message, Role};

/// Splits leading system entries from the rest of the conversation.
///
/// Multiple system entries are joined with a blank line. Returns `None` when
/// there is no system text.
///
/// # Examples
///
/// ```
/// use wonka_core::Message;
/// use wonka_models::split_system;
///
/// let messages = vec![Message::system("Be terse."), Message::user("Hi")];
/// let (system, rest) = split_system(&messages);
/// assert_eq!(system.as_deref(), Some("Be terse."));
/// assert_eq!(rest.len(), 1);
/// ```
pub fn split_system(messages: &[Message]) -> (Option<String>, &[Message]) {
    let split = messages
        .iter()
        .position(|m| *m.role() != Role::System)
        .unwrap_or(messages.len());
    let (system, rest) = messages.split_at(split);

    let system = system
        .iter()
        .map(|m| m.content().as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    if system.trim().is_empty() {
        (None, rest)
    } else {
        (Some(system), rest)
    }
}

/// Renders a conversation as one prompt string.
///
/// Leading system entries are emitted verbatim, other turns are labelled
/// `User:`, `Assistant:` or `System:`, and entries are separated by blank
/// lines. A conversation
/// consisting of a single user turn is returned verbatim.
///
/// # Examples
///
/// ```
/// use wonka_core::Message;
/// use wonka_models::render_transcript;
///
/// assert_eq!(render_transcript(&[Message::user("Hi")]), "Hi");
///
/// let blob = render_transcript(&[
///     Message::system("Be terse."),
///     Message::user("Hi"),
///     Message::assistant("Hello"),
///     Message::user("Ideas?"),
/// ]);
/// assert_eq!(blob, "Be terse.\n\nUser: Hi\n\nAssistant: Hello\n\nUser: Ideas?");
/// ```
pub fn render_transcript(messages: &[Message]) -> String {
    let turns = messages
        .iter()
        .filter(|m| *m.role() != Role::System)
        .count();
    let preamble = messages
        .iter()
        .take_while(|m| *m.role() == Role::System)
        .count();

    messages
        .iter()
        .enumerate()
        .map(|(index, m)| match m.role() {
            Role::System if index < preamble => m.content().clone(),
            Role::System => format!("System: {}", m.content()),
            Role::User if turns == 1 => m.content().clone(),
            Role::User => format!("User: {}", m.content()),
            Role::Assistant => format!("Assistant: {}", m.content()),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
