use dioxus::prelude::*;

use crate::state::{ChatMessage, Sender};

#[component]
pub fn MessageEl(msg: ChatMessage) -> Element {
    let class = msg.sender.css_class();
    match msg.sender {
        Sender::Assistant => {
            let el = crate::md2rsx::markdown_to_rsx(&msg.text)?;
            rsx! {
                div { class: "message {class}",
                    div { class: "message-content", {el} }
                }
            }
        }
        _ => rsx! {
            div { class: "message {class}",
                div { class: "message-content", "{msg.text}" }
            }
        },
    }
}

/// Shown in place of the answer while a query is pending.
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message assistant loading",
            div { class: "message-content",
                div { class: "typing-indicator",
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
