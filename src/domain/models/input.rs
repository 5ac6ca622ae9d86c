use serde::{Deserialize, Serialize};

/// File picked by the user, already converted into a transmissible data URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    #[serde(default)]
    pub media_type: String,
    pub url: String,
}

/// Local, unsent draft owned by the input controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingInput {
    pub text: String,
    pub attachments: Vec<Attachment>,
    /// Bumped on every reset; the file input is keyed on it so it remounts empty
    pub picker_generation: u32,
}

impl PendingInput {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.attachments.clear();
        self.picker_generation = self.picker_generation.wrapping_add(1);
    }
}

/// Payload handed to `ChatSession::send`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}
