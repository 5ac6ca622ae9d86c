//! Pending input hook
//!
//! Wraps the [`InputController`] in a signal and bridges the browser file
//! picker, which hands back data URLs ready to send.

use dioxus::document;
use dioxus::prelude::*;

use crate::domain::models::Attachment;
use crate::domain::services::{InputController, SubmitOutcome};
use crate::shared::errors::{AppError, Result};
use crate::shared::hooks::ChatSessionHandle;

#[derive(Clone, Copy, PartialEq)]
pub struct PendingInputHandle {
    pub controller: Signal<InputController>,
}

impl PendingInputHandle {
    pub fn text(&self) -> String {
        self.controller.read().text().to_string()
    }

    pub fn attachments(&self) -> Vec<Attachment> {
        self.controller.read().attachments().to_vec()
    }

    pub fn picker_generation(&self) -> u32 {
        self.controller.read().picker_generation()
    }

    pub fn set_text(&mut self, text: String) {
        self.controller.write().set_text(text);
    }

    pub fn set_attachments(&mut self, attachments: Vec<Attachment>) {
        self.controller.write().set_attachments(attachments);
    }

    /// Submit through the session, then start the stream for the new turn
    pub fn submit(&mut self, chat: &mut ChatSessionHandle) -> SubmitOutcome {
        let outcome = self.controller.write().submit(&mut *chat.session.write());
        if outcome == SubmitOutcome::Sent {
            chat.drive();
        }
        outcome
    }
}

pub fn use_pending_input() -> PendingInputHandle {
    let controller = use_signal(InputController::new);
    PendingInputHandle { controller }
}

/// Read the files currently selected in `<input type="file" id=input_id>` as data URLs
pub async fn read_picked_files(input_id: &str) -> Result<Vec<Attachment>> {
    let script = format!(
        r#"
        const input = document.getElementById({id});
        const files = input && input.files ? Array.from(input.files) : [];
        const read = (file) => new Promise((resolve, reject) => {{
            const reader = new FileReader();
            reader.onload = () => resolve({{ name: file.name, mediaType: file.type, url: reader.result }});
            reader.onerror = () => reject(reader.error);
            reader.readAsDataURL(file);
        }});
        dioxus.send(await Promise.all(files.map(read)));
        "#,
        id = serde_json::to_string(input_id)?
    );

    let mut eval = document::eval(&script);
    eval.recv::<Vec<Attachment>>()
        .await
        .map_err(|e| AppError::Eval(format!("{:?}", e)))
}
