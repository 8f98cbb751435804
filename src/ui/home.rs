//! Collection list page.
//!
//! Fetches every collection on entry and renders one card per collection with
//! links to chat and a two-step delete. A successful delete re-fetches the
//! whole list; a failed one leaves the cards as they were and shows the error.

use dioxus::prelude::*;

use crate::{
    Route,
    api::{ApiHandle, Collection},
    state::{ListPhase, ListState, StateCell, list},
};

#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiHandle>();
    let state: Signal<ListState> = use_signal(ListState::default);

    let list_api = api.clone();
    let _ = use_resource(move || {
        let api = list_api.clone();
        async move {
            list::refresh(&*api, &state).await;
        }
    });

    // Owned by the page: the cards unmount while the list reloads.
    let on_confirm = use_callback(move |_: ()| {
        let api = api.clone();
        spawn(async move {
            list::delete_confirmed(&*api, &state).await;
        });
    });

    let ListState {
        phase,
        notice,
        confirming,
    } = state.read().clone();

    let body = match phase {
        ListPhase::Loading => rsx! {
            div { class: "loading", "Loading RAG systems..." }
        },
        ListPhase::Failed(msg) => rsx! {
            div { class: "error-message", "{msg}" }
        },
        ListPhase::Ready(rags) if rags.is_empty() => rsx! {
            div { class: "empty-state",
                p { "No RAG systems found." }
                p { "Get started by creating your first RAG system." }
                Link { class: "create-button", to: Route::Create {}, "Create RAG" }
            }
        },
        ListPhase::Ready(rags) => rsx! {
            div { class: "rag-list",
                for rag in rags {
                    {
                        let key = rag.name.clone();
                        let confirming = confirming.as_deref() == Some(key.as_str());
                        rsx! {
                            RagCard { key: "{key}", rag, confirming, state, on_confirm }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "home-container",
            div { class: "header-actions",
                h2 { "Available RAG Systems" }
                Link { class: "create-button", to: Route::Create {}, "Create New RAG" }
            }
            if let Some(notice) = notice {
                div { class: "error-message", "{notice}" }
            }
            {body}
        }
    }
}

#[component]
fn RagCard(
    rag: Collection,
    confirming: bool,
    state: Signal<ListState>,
    on_confirm: Callback,
) -> Element {
    let count = rag.document_count();
    let created = rag.created_label();
    let name = rag.name.clone();

    rsx! {
        div { class: "rag-card",
            div { class: "rag-info",
                h3 { "{rag.name}" }
                p { "Model: {rag.model_name}" }
                p { "Documents: {count}" }
                p { class: "rag-date", "Created: {created}" }
            }
            div { class: "rag-actions",
                Link {
                    class: "chat-button",
                    to: Route::Chat { rag_name: rag.name.clone() },
                    "Chat"
                }
                if confirming {
                    span { class: "confirm-prompt", "Delete \"{rag.name}\"?" }
                    button {
                        class: "confirm-button",
                        onclick: move |_| on_confirm.call(()),
                        "Confirm"
                    }
                    button {
                        class: "cancel-button",
                        onclick: move |_| state.mutate(ListState::cancel_delete),
                        "Cancel"
                    }
                } else {
                    button {
                        class: "delete-button",
                        onclick: move |_| state.mutate(|s| s.request_delete(&name)),
                        "Delete"
                    }
                }
            }
        }
    }
}
