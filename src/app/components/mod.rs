pub mod button;
pub mod common;
pub mod delete_button;
pub mod part_view;
pub mod message_item;
pub mod chat_messages;
pub mod status_banner;
pub mod chat_input;

pub use button::{Button, ButtonVariant};
pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use delete_button::DeleteButton;
pub use part_view::PartView;
pub use message_item::MessageItem;
pub use chat_messages::{ChatMessages, SentinelViewport};
pub use status_banner::StatusBanner;
pub use chat_input::ChatInput;
