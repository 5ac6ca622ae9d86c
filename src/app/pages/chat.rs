use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{ChatInput, ChatMessages, StatusBanner};
use crate::config::ChatUiConfig;
use crate::domain::models::Message;
use crate::shared::hooks::{use_chat_session, use_pending_input};

/// Root component: mounts the chat page with the launcher's config, or defaults
#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = try_use_context::<ChatUiConfig>();
    use_context_provider(move || config.unwrap_or_default());

    use_effect(|| {
        tracing::info!("Chat view initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        ChatPage {}
    }
}

#[component]
pub fn ChatPage(#[props(default)] initial_messages: Vec<Message>) -> Element {
    let config = use_context::<ChatUiConfig>();
    let chat = use_chat_session(initial_messages, config.stream_delay_ms);
    let draft = use_pending_input();

    rsx! {
        main { class: "chat-page",
            ChatMessages { chat }
            StatusBanner { chat }
            ChatInput { chat, draft }
        }
    }
}
