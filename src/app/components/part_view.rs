//! Markup for rendered message parts

use dioxus::prelude::*;

use crate::domain::services::DisplayNode;

#[component]
pub fn PartView(node: DisplayNode) -> Element {
    match node {
        DisplayNode::Text { content } => rsx! {
            div { class: "c-part c-part--text u-whitespace-pre-wrap", "{content}" }
        },
        DisplayNode::Reasoning { content } => rsx! {
            pre { class: "c-part c-part--reasoning", "{content}" }
        },
        DisplayNode::Image { src, alt } => rsx! {
            img { class: "c-part c-part--image", src: "{src}", alt: "{alt}" }
        },
        DisplayNode::Link { href, label } => rsx! {
            a {
                class: "c-part c-part--link",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{label}"
            }
        },
        DisplayNode::Label { content } => rsx! {
            span { class: "c-part c-part--label", "{content}" }
        },
    }
}
