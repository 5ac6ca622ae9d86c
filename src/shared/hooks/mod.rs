// Custom Dioxus hooks
pub mod use_chat_session;
pub mod use_pending_input;

pub use use_chat_session::{use_chat_session, ChatSessionHandle};
pub use use_pending_input::{read_picked_files, use_pending_input, PendingInputHandle};
