//! In-memory chat session
//!
//! Holds the authoritative list and status for the page. It does no I/O:
//! `send`, `regenerate` and `reload` queue a [`TurnRequest`] for whatever
//! drives the stream, and that driver feeds [`StreamEvent`]s back through
//! [`MemorySession::apply`].

use chrono::Utc;
use uuid::Uuid;

use crate::domain::models::{
    Message, MessageMetadata, OutgoingMessage, Part, Role, SessionStatus, TokenUsage,
};
use crate::domain::services::session::{
    ChatSession, FinishSummary, SessionChange, SessionEvents, SessionObserver, StreamChunk,
    TracingEvents,
};

/// One assistant turn waiting to be streamed
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRequest {
    pub turn: u64,
    pub prompt: String,
    pub history: Vec<Message>,
}

/// Incremental update for the current turn
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Start,
    Part(Part),
    TextDelta(String),
    Finish { usage: Option<TokenUsage> },
    Error(String),
}

pub struct MemorySession {
    messages: Vec<Message>,
    status: SessionStatus,
    error: Option<String>,
    revision: u64,
    current_turn: u64,
    streaming_id: Option<String>,
    pending_turn: Option<TurnRequest>,
    observers: Vec<Box<dyn SessionObserver>>,
    events: Box<dyn SessionEvents>,
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MemorySession {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            status: SessionStatus::Ready,
            error: None,
            revision: 0,
            current_turn: 0,
            streaming_id: None,
            pending_turn: None,
            observers: Vec::new(),
            events: Box::new(TracingEvents),
        }
    }

    pub fn with_events(mut self, events: impl SessionEvents + 'static) -> Self {
        self.events = Box::new(events);
        self
    }

    /// Register an observer notified synchronously on every change. The page
    /// itself subscribes through the Dioxus signal holding the session (see
    /// `use_chat_session`); this is the hook for non-reactive consumers.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Increases on every mutation of the message list
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn current_turn(&self) -> u64 {
        self.current_turn
    }

    /// Hand the queued turn to the stream driver
    pub fn take_pending_turn(&mut self) -> Option<TurnRequest> {
        self.pending_turn.take()
    }

    /// Apply a stream event for `turn`. Events from a stale turn, or arriving
    /// when no turn is in flight, are dropped and `false` is returned.
    pub fn apply(&mut self, turn: u64, event: StreamEvent) -> bool {
        if turn != self.current_turn || !self.status.is_in_flight() {
            tracing::debug!(
                turn = turn,
                current_turn = self.current_turn,
                status = self.status.as_str(),
                "Dropping stale stream event"
            );
            return false;
        }

        match event {
            StreamEvent::Start => {
                if self.streaming_id.is_none() {
                    self.ensure_assistant();
                    self.touch_messages();
                }
            }
            StreamEvent::Part(part) => {
                self.events.on_data(&StreamChunk::Part(part.clone()));
                if let Some(message) = self.ensure_assistant() {
                    message.parts.push(part);
                }
                self.touch_messages();
            }
            StreamEvent::TextDelta(delta) => {
                self.events.on_data(&StreamChunk::TextDelta(delta.clone()));
                if let Some(message) = self.ensure_assistant() {
                    match message.parts.last_mut() {
                        Some(Part::Text { text }) => text.push_str(&delta),
                        _ => message.parts.push(Part::text(delta)),
                    }
                }
                self.touch_messages();
            }
            StreamEvent::Finish { usage } => {
                let message_id = self.streaming_id.take();
                if let Some(id) = &message_id {
                    if let Some(message) = self.messages.iter_mut().find(|m| &m.id == id) {
                        message.metadata = Some(MessageMetadata {
                            created_at: Some(Utc::now()),
                            total_usage: usage,
                        });
                    }
                    self.touch_messages();
                }
                self.set_status(SessionStatus::Ready);
                self.events.on_finish(&FinishSummary {
                    message_id: message_id.unwrap_or_default(),
                    usage,
                });
            }
            StreamEvent::Error(error) => {
                self.streaming_id = None;
                self.events.on_error(&error);
                self.error = Some(error);
                self.set_status(SessionStatus::Error);
            }
        }
        true
    }

    /// Assistant message receiving the current stream, created on first use.
    /// Leaves the revision alone: the calling event bumps it once.
    fn ensure_assistant(&mut self) -> Option<&mut Message> {
        if self.streaming_id.is_none() {
            let id = Uuid::new_v4().to_string();
            let mut message = Message::new(id.clone(), Role::Assistant, Vec::new());
            message.created_at = Some(Utc::now());
            self.messages.push(message);
            self.streaming_id = Some(id);
            self.set_status(SessionStatus::Streaming);
        }

        let id = self.streaming_id.as_deref()?;
        self.messages.iter_mut().rev().find(|m| m.id == id)
    }

    fn begin_turn(&mut self, prompt: String) {
        self.current_turn += 1;
        self.streaming_id = None;
        self.error = None;
        self.pending_turn = Some(TurnRequest {
            turn: self.current_turn,
            prompt,
            history: self.messages.clone(),
        });
        self.set_status(SessionStatus::Submitted);
    }

    /// Text of the last user message, dropping any assistant replies after it
    fn rewind_to_last_user(&mut self) -> Option<String> {
        let last_user = self.messages.iter().rposition(Message::is_user)?;
        if last_user + 1 < self.messages.len() {
            self.messages.truncate(last_user + 1);
            self.touch_messages();
        }

        let prompt = self.messages[last_user]
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n");
        Some(prompt)
    }

    fn touch_messages(&mut self) {
        self.revision += 1;
        self.notify(SessionChange::Messages {
            revision: self.revision,
        });
    }

    fn set_status(&mut self, status: SessionStatus) {
        if self.status == status {
            return;
        }
        self.status = status;
        self.notify(SessionChange::Status(status));
    }

    fn notify(&mut self, change: SessionChange) {
        for observer in self.observers.iter_mut() {
            observer.on_change(&change);
        }
    }
}

impl ChatSession for MemorySession {
    fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn status(&self) -> SessionStatus {
        self.status
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn send(&mut self, input: OutgoingMessage) {
        if self.status.is_in_flight() {
            tracing::warn!(status = self.status.as_str(), "Ignoring send while a turn is in flight");
            return;
        }

        let mut parts = vec![Part::text(input.text.clone())];
        parts.extend(input.attachments.into_iter().map(|attachment| Part::File {
            media_type: Some(attachment.media_type),
            url: Some(attachment.url),
            filename: Some(attachment.name),
        }));

        let mut message = Message::new(Uuid::new_v4().to_string(), Role::User, parts);
        message.created_at = Some(Utc::now());
        self.messages.push(message);
        self.touch_messages();
        self.begin_turn(input.text);
    }

    fn stop(&mut self) {
        if !self.status.is_in_flight() {
            return;
        }
        // invalidate the running turn so late events are dropped
        self.current_turn += 1;
        self.streaming_id = None;
        self.pending_turn = None;
        self.set_status(SessionStatus::Ready);
    }

    fn regenerate(&mut self) {
        if self.status.is_in_flight() {
            return;
        }
        match self.rewind_to_last_user() {
            Some(prompt) => self.begin_turn(prompt),
            None => tracing::debug!("Nothing to regenerate"),
        }
    }

    fn reload(&mut self) {
        if self.status.is_in_flight() {
            return;
        }
        self.error = None;
        match self.rewind_to_last_user() {
            Some(prompt) => self.begin_turn(prompt),
            None => self.set_status(SessionStatus::Ready),
        }
    }

    fn replace_messages(&mut self, messages: Vec<Message>) {
        let keeps_stream_target = self
            .streaming_id
            .as_ref()
            .is_some_and(|id| messages.iter().any(|m| &m.id == id));
        if !keeps_stream_target {
            self.streaming_id = None;
        }
        self.messages = messages;
        self.touch_messages();
    }
}
