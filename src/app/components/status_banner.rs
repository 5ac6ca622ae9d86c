//! Loading indicator and error banner driven by the session status

use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, ErrorMessage, LoadingText};
use crate::config::ChatUiConfig;
use crate::shared::hooks::ChatSessionHandle;

#[component]
pub fn StatusBanner(chat: ChatSessionHandle) -> Element {
    let config = use_context::<ChatUiConfig>();
    let gates = chat.gates();
    let error = chat.error();
    let mut chat = chat;

    rsx! {
        // Stop lives in the input row, which shows it whenever `can_stop` holds
        if gates.show_loading {
            div { class: "c-status-banner c-status-banner--loading",
                LoadingText { message: config.loading_text.clone() }
            }
        }
        if gates.show_error {
            div { class: "c-status-banner c-status-banner--error",
                ErrorMessage {
                    message: config.error_banner_text.clone(),
                    detail: error,
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| chat.reload(),
                    "Retry"
                }
            }
        }
    }
}
