use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String, #[props(default)] detail: Option<String>) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
            if let Some(detail) = detail {
                p { class: "c-error__detail", "{detail}" }
            }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(
    icon: String,
    title: String,
    description: String,
    action_text: Option<String>,
    action_handler: Option<EventHandler>,
) -> Element {
    rsx! {
        li { class: "empty-state",
            div { class: "empty-state__icon", "{icon}" }
            h2 { class: "empty-state__title", "{title}" }
            p { class: "empty-state__description", "{description}" }
            if let (Some(text), Some(handler)) = (action_text, action_handler) {
                button {
                    onclick: move |_| handler.call(()),
                    class: "c-button c-button--primary",
                    "{text}"
                }
            }
        }
    }
}
