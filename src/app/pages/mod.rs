pub mod chat;

pub use chat::{App, ChatPage};
