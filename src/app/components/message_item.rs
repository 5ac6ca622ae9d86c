//! Message rendering component
//!
//! Displays one message of the conversation: its parts in order, a timestamp,
//! token usage when the session reported it, and a delete affordance.

use chrono::Utc;
use dioxus::prelude::*;

use crate::app::components::{DeleteButton, PartView};
use crate::config::ChatUiConfig;
use crate::domain::models::Message;
use crate::domain::services::{MessageView, TimestampSource};

/// Renders a single message in the conversation
#[component]
pub fn MessageItem(message: Message, on_delete: EventHandler<String>) -> Element {
    let config = use_context::<ChatUiConfig>();
    let view = MessageView::compose_with_alt(&message, Utc::now(), &config.default_image_alt);
    let time_str = view.formatted_time(&config.timestamp_format);
    // render-time fallback: mark it so it can be styled as provisional
    let time_class = if view.timestamp_source == TimestampSource::RenderTime {
        "c-chat-bubble__timestamp c-chat-bubble__timestamp--provisional"
    } else {
        "c-chat-bubble__timestamp"
    };
    let role_modifier = if view.is_user() { "user" } else { "assistant" };
    let role = view.role.as_str();
    let id = view.id.clone();

    rsx! {
        li {
            class: "c-chat-message c-chat-message--{role_modifier} animate-fade-in",
            "data-role": "{role}",
            div { class: "c-chat-bubble c-chat-bubble--{role_modifier}",
                div { class: "c-chat-bubble__content",
                    for (index, node) in view.nodes.into_iter().enumerate() {
                        PartView { key: "{index}", node }
                    }
                }
                div { class: "c-chat-bubble__footer",
                    span { class: "{time_class}", "{time_str}" }
                    if let Some(usage) = view.usage_text {
                        span { class: "c-chat-bubble__usage", "{usage}" }
                    }
                    DeleteButton {
                        on_confirm: move |_| on_delete.call(id.clone()),
                        confirm_text: "Delete message?",
                    }
                }
            }
        }
    }
}
