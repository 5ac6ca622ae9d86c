use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{EmptyState, MessageItem};
use crate::config::ChatUiConfig;
use crate::domain::services::{ChatSession, ScrollBehavior, ScrollController, ScrollViewport};
use crate::shared::hooks::ChatSessionHandle;

/// Scrolls a sentinel element into view through a browser script
pub struct SentinelViewport {
    element_id: String,
}

impl SentinelViewport {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl ScrollViewport for SentinelViewport {
    fn scroll_to_bottom(&self, behavior: ScrollBehavior) {
        let id = match serde_json::to_string(&self.element_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Cannot encode sentinel id: {}", e);
                return;
            }
        };
        let script = format!(
            r#"
            requestAnimationFrame(() => {{
                const end = document.getElementById({id});
                if (end) {{
                    end.scrollIntoView({{ behavior: '{behavior}', block: 'end' }});
                }}
            }});
            "#,
            id = id,
            behavior = behavior.as_str()
        );
        spawn(async move {
            if let Err(e) = document::eval(&script).await {
                tracing::debug!("Scroll script failed: {:?}", e);
            }
        });
    }
}

#[component]
pub fn ChatMessages(chat: ChatSessionHandle) -> Element {
    let config = use_context::<ChatUiConfig>();
    let end_id = config.messages_end_id.clone();
    let mut scroll = use_signal(move || ScrollController::new(SentinelViewport::new(end_id)));

    // Auto-scroll to bottom after every message-list change
    use_effect(move || {
        let revision = chat.session.read().revision();
        scroll.write().observe(revision);
    });

    let session = chat.session.read();
    crate::shared::logging::log_render(session.messages().len(), session.revision());
    let messages = session.messages().to_vec();
    drop(session);

    let mut chat = chat;

    rsx! {
        ul { class: "chat-messages",
            if messages.is_empty() {
                EmptyState {
                    icon: "💬".to_string(),
                    title: "Start a conversation".to_string(),
                    description: "Send a message to begin chatting".to_string(),
                }
            } else {
                for message in messages {
                    MessageItem {
                        key: "{message.id}",
                        message: message.clone(),
                        on_delete: move |id: String| chat.delete(&id),
                    }
                }
            }
            li { id: "{config.messages_end_id}", class: "chat-messages__end" }
        }
    }
}
