//! Chat page for one collection.
//!
//! Loads the collection's metadata whenever the route's name changes, seeds
//! the transcript with a welcome (or error) line, then sends each message to
//! the query endpoint one at a time.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    api::ApiHandle,
    state::{ChatSession, chat},
    ui::{
        chat_input::ChatInput,
        message::{MessageEl, TypingIndicator},
    },
};

#[component]
pub fn Chat(rag_name: String) -> Element {
    let api = use_context::<ApiHandle>();
    let session: Signal<ChatSession> = use_signal(ChatSession::default);
    let mut bottom: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let load_api = api.clone();
    let on_send = use_callback(move |text: String| {
        let api = api.clone();
        spawn(async move {
            chat::send(&*api, &session, &text).await;
        });
    });

    use_effect(use_reactive!(|rag_name| {
        let api = load_api.clone();
        spawn(async move {
            chat::load(&*api, &session, &rag_name).await;
        });
    }));

    // Keep the newest message in view.
    use_effect(move || {
        let s = session.read();
        let _ = (s.transcript().len(), s.is_sending());
        if let Some(el) = bottom() {
            spawn(async move {
                let _ = el.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    let s = session.read().clone();
    let summary = s
        .info()
        .map(|info| (info.model_name.clone(), info.document_count()));

    rsx! {
        div { class: "chat-container",
            div { class: "chat-header",
                h2 { "{rag_name}" }
                if let Some((model, count)) = summary {
                    div { class: "rag-info",
                        span { "Model: {model}" }
                        span { "Documents: {count}" }
                    }
                }
            }
            div { class: "chat-messages",
                for (i, msg) in s.transcript().iter().enumerate() {
                    MessageEl { key: "{i}", msg: msg.clone() }
                }
                if s.is_sending() {
                    TypingIndicator {}
                }
                div { onmounted: move |e: MountedEvent| bottom.set(Some(e.data())) }
            }
            ChatInput { disabled: !s.can_send(), on_send }
        }
    }
}
