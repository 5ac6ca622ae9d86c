use serde::{Deserialize, Serialize};

/// Client-visible lifecycle stage of the current (or last) chat turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Ready,
    Submitted,
    Streaming,
    Error,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Ready => "ready",
            SessionStatus::Submitted => "submitted",
            SessionStatus::Streaming => "streaming",
            SessionStatus::Error => "error",
        }
    }

    /// A turn is in flight (waiting for the first chunk or receiving chunks)
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SessionStatus::Submitted | SessionStatus::Streaming)
    }
}

/// Control gates derived from a status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusGates {
    pub can_send: bool,
    pub can_stop: bool,
    pub can_regenerate: bool,
    pub show_loading: bool,
    pub show_error: bool,
}
