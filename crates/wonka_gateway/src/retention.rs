//! Bounding how much conversation history is replayed per call.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wonka_core::Message;

/// How much of the history to send with each request.
///
/// Bounded policies drop the oldest entries first and never split an entry.
///
/// In TOML, `"full"`, `{ last_turns = 8 }` or `{ max_chars = 20000 }`.
///
/// # Examples
///
/// ```
/// use wonka_core::Message;
/// use wonka_gateway::HistoryRetention;
///
/// let history = vec![
///     Message::user("one"),
///     Message::assistant("two"),
///     Message::user("three"),
/// ];
///
/// assert_eq!(HistoryRetention::Full.apply(&history).len(), 3);
/// assert_eq!(HistoryRetention::LastTurns(2).apply(&history)[0].content(), "two");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryRetention {
    /// Replay every entry (default)
    #[default]
    Full,
    /// Replay at most this many of the newest entries
    LastTurns(usize),
    /// Replay the newest entries whose combined length fits in this many characters
    MaxChars(usize),
}

impl HistoryRetention {
    /// Returns the retained, chronologically ordered suffix of `history`.
    pub fn apply<'a>(&self, history: &'a [Message]) -> &'a [Message] {
        let retained = match *self {
            HistoryRetention::Full => history,
            HistoryRetention::LastTurns(turns) => {
                &history[history.len().saturating_sub(turns)..]
            }
            HistoryRetention::MaxChars(max_chars) => {
                let mut total = 0;
                let mut start = history.len();
                for (index, message) in history.iter().enumerate().rev() {
                    total += message.content().chars().count();
                    if total > max_chars {
                        break;
                    }
                    start = index;
                }
                &history[start..]
            }
        };

        if retained.len() < history.len() {
            debug!(
                policy = ?self,
                dropped = history.len() - retained.len(),
                kept = retained.len(),
                "Trimmed conversation history"
            );
        }

        retained
    }
}
