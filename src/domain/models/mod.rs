// Domain models (chat entities)
// Pure Rust, no framework dependencies

pub mod message;
pub mod status;
pub mod input;

pub use message::{Message, MessageMetadata, Part, Role, TokenUsage};
pub use status::{SessionStatus, StatusGates};
pub use input::{Attachment, OutgoingMessage, PendingInput};
