// View controllers and the session seam
// Framework-agnostic, 100% testable

pub mod session;
pub mod part_renderer;
pub mod message_view;
pub mod status_controller;
pub mod input_controller;
pub mod scroll_controller;
pub mod memory_session;

pub use session::{
    delete_message, ChatSession, FinishSummary, SessionChange, SessionEvents, SessionObserver,
    StreamChunk, TracingEvents,
};
pub use part_renderer::{render_part, render_part_with_alt, render_parts, DisplayNode};
pub use message_view::{resolve_timestamp, MessageView, TimestampSource};
pub use status_controller::{gates_for, StreamStatusController};
pub use input_controller::{InputController, SubmitOutcome};
pub use scroll_controller::{ScrollBehavior, ScrollController, ScrollViewport};
pub use memory_session::{MemorySession, StreamEvent, TurnRequest};
