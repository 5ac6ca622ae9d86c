//! Chat input component: draft text, file attachments and turn controls

use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant};
use crate::config::ChatUiConfig;
use crate::domain::services::SubmitOutcome;
use crate::shared::hooks::{read_picked_files, ChatSessionHandle, PendingInputHandle};

#[component]
pub fn ChatInput(chat: ChatSessionHandle, draft: PendingInputHandle) -> Element {
    let config = use_context::<ChatUiConfig>();
    let gates = chat.gates();
    let mut chat = chat;
    let mut draft = draft;
    let mut is_composing = use_signal(|| false);

    let text = draft.text();
    let attachment_count = draft.attachments().len();
    let generation = draft.picker_generation();
    let file_input_id = config.file_input_id.clone();

    let mut submit = move || {
        if !gates.can_send {
            return;
        }
        if draft.submit(&mut chat) == SubmitOutcome::Ignored {
            tracing::debug!("Blank message not sent");
        }
    };

    // Enter sends, Shift+Enter inserts a newline
    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) && !is_composing() {
            evt.prevent_default();
            submit();
        }
    };

    rsx! {
        form {
            class: "chat-input",
            onsubmit: move |evt| {
                evt.prevent_default();
                submit();
            },

            textarea {
                id: "chat-input",
                class: "chat-input__textarea",
                value: "{text}",
                placeholder: "{config.input_placeholder}",
                disabled: !gates.can_send,
                rows: "1",
                oninput: move |evt| draft.set_text(evt.value()),
                onkeydown: handle_keydown,
                oncompositionstart: move |_| is_composing.set(true),
                oncompositionend: move |_| is_composing.set(false),
            }

            div { class: "chat-input__actions-row",
                div { class: "chat-input__left-actions",
                    // keyed on the reset generation so the widget remounts empty after a send
                    for picker in std::iter::once(generation) {
                        input {
                            key: "{picker}",
                            id: "{file_input_id}",
                            class: "chat-input__file",
                            r#type: "file",
                            multiple: true,
                            disabled: !gates.can_send,
                            onchange: {
                                let id = file_input_id.clone();
                                move |_evt: Event<FormData>| {
                                    let id = id.clone();
                                    spawn(async move {
                                        match read_picked_files(&id).await {
                                            Ok(files) => draft.set_attachments(files),
                                            Err(e) => tracing::error!("Failed to read picked files: {}", e),
                                        }
                                    });
                                }
                            },
                        }
                    }
                    if attachment_count > 0 {
                        span { class: "chat-input__attachment-count",
                            "{attachment_count} file(s)"
                        }
                    }
                }

                div { class: "chat-input__right-actions",
                    if gates.can_stop {
                        Button {
                            variant: ButtonVariant::Secondary,
                            title: "Stop".to_string(),
                            onclick: move |_| chat.stop(),
                            "Stop"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: !gates.can_regenerate,
                        onclick: move |_| chat.regenerate(),
                        "Regenerate"
                    }
                    button {
                        class: "c-button c-button--primary",
                        r#type: "submit",
                        disabled: !gates.can_send || text.trim().is_empty(),
                        "Send"
                    }
                }
            }
        }
    }
}
