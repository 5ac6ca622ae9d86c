//! Chat session hook
//!
//! Binds a [`MemorySession`] into a Dioxus signal. Components subscribe by
//! reading the signal; actions go through [`ChatSessionHandle`], which also
//! drives the scripted stream for any turn the session queues.

use dioxus::prelude::*;

use crate::domain::models::{Message, OutgoingMessage, StatusGates};
use crate::domain::services::{
    delete_message, ChatSession, MemorySession, StreamStatusController,
};
use crate::shared::services::echo_stream;

/// Handle to the page's chat session
#[derive(Clone, Copy, PartialEq)]
pub struct ChatSessionHandle {
    pub session: Signal<MemorySession>,
    pub stream_delay_ms: u32,
}

impl ChatSessionHandle {
    /// Status controller for the current render
    pub fn status_controller(&self) -> StreamStatusController {
        StreamStatusController::new(self.session.read().status())
    }

    pub fn gates(&self) -> StatusGates {
        self.status_controller().gates()
    }

    pub fn error(&self) -> Option<String> {
        self.session.read().error().map(str::to_string)
    }

    pub fn send(&mut self, input: OutgoingMessage) {
        self.session.write().send(input);
        self.drive();
    }

    pub fn stop(&mut self) {
        let controller = self.status_controller();
        controller.stop(&mut *self.session.write());
    }

    pub fn regenerate(&mut self) {
        let controller = self.status_controller();
        if controller.regenerate(&mut *self.session.write()) {
            self.drive();
        }
    }

    pub fn reload(&mut self) {
        let controller = self.status_controller();
        if controller.reload(&mut *self.session.write()) {
            self.drive();
        }
    }

    pub fn delete(&mut self, id: &str) {
        delete_message(&mut *self.session.write(), id);
    }

    /// Start streaming the queued turn, if any
    pub fn drive(&mut self) {
        let Some(turn) = self.session.write().take_pending_turn() else {
            return;
        };
        let events = echo_stream::script_for(&turn);
        tracing::debug!(turn = turn.turn, events = events.len(), "Driving scripted turn");

        #[cfg(target_arch = "wasm32")]
        {
            let mut session = self.session;
            let delay = self.stream_delay_ms;
            spawn(async move {
                for event in events {
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                    if !session.write().apply(turn.turn, event) {
                        break;
                    }
                }
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            echo_stream::play_now(&mut *self.session.write(), turn.turn, events);
        }
    }
}

/// Hook creating the page's chat session, seeded with `initial_messages`
pub fn use_chat_session(initial_messages: Vec<Message>, stream_delay_ms: u32) -> ChatSessionHandle {
    let session = use_signal(move || MemorySession::new(initial_messages));

    ChatSessionHandle {
        session,
        stream_delay_ms,
    }
}
