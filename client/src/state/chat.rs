//! Chat transcript state for the AI chatbot page.
//!
//! DESIGN
//! ======
//! The transcript is append-only: messages are never reordered or edited
//! after creation. One send may be outstanding at a time
//! (`Idle -> Sending -> Idle`); a second send while awaiting is a no-op,
//! not a queued retry.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Fallback text appended when the answer request fails. The failure is
/// swallowed here; downstream consumers only ever see this message.
pub const FALLBACK_ANSWER: &str = "Sorry, I encountered an error. Please try again.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat message. Immutable once appended.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Creation time, milliseconds since Unix epoch.
    pub timestamp_ms: i64,
}

/// Identity allocator for messages. Monotonic counter, never reused.
#[derive(Clone, Debug, Default)]
struct MessageIds {
    next: u64,
}

impl MessageIds {
    fn next_id(&mut self, suffix: &str) -> String {
        self.next += 1;
        format!("msg-{}-{suffix}", self.next)
    }
}

/// Ordered history of one chat conversation.
#[derive(Clone, Debug, Default)]
pub struct ChatTranscriptState {
    pub messages: Vec<ChatMessage>,
    awaiting_reply: bool,
    ids: MessageIds,
}

impl ChatTranscriptState {
    /// Start a send: append the user message synchronously and mark the
    /// transcript awaiting. Returns `false` (no mutation) for
    /// blank/whitespace text or while a reply is already outstanding.
    pub fn begin_send(&mut self, text: &str, now_ms: i64) -> bool {
        if text.trim().is_empty() || self.awaiting_reply {
            return false;
        }
        let id = self.ids.next_id("user");
        self.messages
            .push(ChatMessage { id, sender: Sender::User, text: text.to_owned(), timestamp_ms: now_ms });
        self.awaiting_reply = true;
        true
    }

    /// Append the assistant's answer and return to idle.
    pub fn resolve_answer(&mut self, answer: &str, now_ms: i64) {
        let id = self.ids.next_id("assistant");
        self.messages
            .push(ChatMessage { id, sender: Sender::Assistant, text: answer.to_owned(), timestamp_ms: now_ms });
        self.awaiting_reply = false;
    }

    /// Append the fixed fallback message and return to idle.
    pub fn resolve_failure(&mut self, now_ms: i64) {
        let id = self.ids.next_id("error");
        self.messages.push(ChatMessage {
            id,
            sender: Sender::Assistant,
            text: FALLBACK_ANSWER.to_owned(),
            timestamp_ms: now_ms,
        });
        self.awaiting_reply = false;
    }

    /// True strictly between the user-message append and the assistant
    /// (or fallback) append.
    #[must_use]
    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }
}
