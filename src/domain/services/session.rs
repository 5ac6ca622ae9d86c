//! Chat session seam
//!
//! The session owns the authoritative message list and status. The view only
//! reads them and forwards user intents back through this trait.

use crate::domain::models::{Message, OutgoingMessage, Part, SessionStatus, TokenUsage};

/// Authoritative chat state plus the actions the view may request
pub trait ChatSession {
    fn messages(&self) -> &[Message];
    fn status(&self) -> SessionStatus;
    fn error(&self) -> Option<&str>;

    /// Start one user turn
    fn send(&mut self, input: OutgoingMessage);
    /// Ask for the in-flight turn to be cancelled
    fn stop(&mut self);
    /// Redo the last assistant turn
    fn regenerate(&mut self);
    /// Recover after an error
    fn reload(&mut self);
    /// Replace the whole list (only used to implement delete)
    fn replace_messages(&mut self, messages: Vec<Message>);
}

/// Chunk delivered to `SessionEvents::on_data`
#[derive(Debug, Clone, PartialEq)]
pub enum StreamChunk {
    Part(Part),
    TextDelta(String),
}

/// Summary delivered to `SessionEvents::on_finish`
#[derive(Debug, Clone, PartialEq)]
pub struct FinishSummary {
    pub message_id: String,
    pub usage: Option<TokenUsage>,
}

/// Lifecycle callbacks, invoked synchronously while the session applies
/// stream events
pub trait SessionEvents {
    fn on_data(&self, _chunk: &StreamChunk) {}
    fn on_error(&self, _error: &str) {}
    fn on_finish(&self, _summary: &FinishSummary) {}
}

/// Events that only log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEvents;

impl SessionEvents for TracingEvents {
    fn on_data(&self, chunk: &StreamChunk) {
        match chunk {
            StreamChunk::Part(part) => crate::shared::logging::log_stream_part(part.kind()),
            StreamChunk::TextDelta(delta) => crate::shared::logging::log_stream_delta(delta.len()),
        }
    }

    fn on_error(&self, error: &str) {
        crate::shared::logging::log_stream_error(error);
    }

    fn on_finish(&self, summary: &FinishSummary) {
        crate::shared::logging::log_stream_finish(
            &summary.message_id,
            summary.usage.map(|u| u.total_tokens),
        );
    }
}

/// What changed in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    /// The message list changed; `revision` increases on every mutation
    Messages { revision: u64 },
    Status(SessionStatus),
}

/// Subscriber to session changes
pub trait SessionObserver {
    fn on_change(&mut self, change: &SessionChange);
}

/// Remove exactly the message with `id`, keeping every other message in order.
///
/// Returns `false` and leaves the session untouched when no message has that id.
pub fn delete_message<S: ChatSession + ?Sized>(session: &mut S, id: &str) -> bool {
    if !session.messages().iter().any(|m| m.id == id) {
        crate::shared::logging::log_delete(id, false);
        return false;
    }

    let remaining: Vec<Message> = session
        .messages()
        .iter()
        .filter(|m| m.id != id)
        .cloned()
        .collect();
    session.replace_messages(remaining);
    crate::shared::logging::log_delete(id, true);
    true
}


#[cfg(test)]
mod tests {
    use super::testing::FakeSession;
    use super::*;

    #[test]
    fn test_delete_removes_only_target_and_keeps_order() {
        let mut session = FakeSession::with_messages(&["m1", "m2", "m3"]);

        assert!(delete_message(&mut session, "m2"));
        assert_eq!(session.ids(), vec!["m1", "m3"]);
        assert_eq!(session.replace_calls, 1);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut session = FakeSession::with_messages(&["m1", "m2"]);

        assert!(!delete_message(&mut session, "nope"));
        assert_eq!(session.ids(), vec!["m1", "m2"]);
        assert_eq!(session.replace_calls, 0);
    }

    #[test]
    fn test_tracing_events_do_not_panic() {
        let events = TracingEvents;
        events.on_data(&StreamChunk::TextDelta("abc".to_string()));
        events.on_data(&StreamChunk::Part(Part::Unknown));
        events.on_error("network timeout");
        events.on_finish(&FinishSummary {
            message_id: "a1".to_string(),
            usage: Some(TokenUsage::total(3)),
        });
    }
}
