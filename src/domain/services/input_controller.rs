//! Pending input ownership and submission

use crate::domain::models::{Attachment, OutgoingMessage, PendingInput};
use crate::domain::services::session::ChatSession;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Text was blank; nothing was forwarded
    Ignored,
}

/// Owns the draft text and attachments until they are sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputController {
    pending: PendingInput,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &PendingInput {
        &self.pending
    }

    pub fn text(&self) -> &str {
        &self.pending.text
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.pending.attachments
    }

    pub fn picker_generation(&self) -> u32 {
        self.pending.picker_generation
    }

    /// Replace the draft text as typed, no trimming
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.pending.text = text.into();
    }

    /// Replace the attachment set wholesale
    pub fn set_attachments(&mut self, attachments: Vec<Attachment>) {
        self.pending.attachments = attachments;
    }

    /// Forward the draft to the session and reset it.
    ///
    /// Blank text is ignored even when attachments are present.
    pub fn submit<S: ChatSession + ?Sized>(&mut self, session: &mut S) -> SubmitOutcome {
        if self.pending.is_blank() {
            crate::shared::logging::log_submit_ignored(self.pending.attachments.len());
            return SubmitOutcome::Ignored;
        }

        let outgoing = OutgoingMessage {
            text: self.pending.text.clone(),
            attachments: std::mem::take(&mut self.pending.attachments),
        };
        crate::shared::logging::log_submit(outgoing.text.len(), outgoing.attachments.len());
        session.send(outgoing);
        self.pending.reset();
        SubmitOutcome::Sent
    }
}
