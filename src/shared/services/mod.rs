// Shared services
// Scripted responder used by the page in place of a model backend
pub mod echo_stream;

pub use echo_stream::{play_now, script_for};
