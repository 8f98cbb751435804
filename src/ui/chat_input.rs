use std::rc::Rc;

use dioxus::prelude::*;

/// Message box for the chat page. Sends on the button or Ctrl+Enter.
#[component]
pub fn ChatInput(disabled: bool, on_send: Callback<String, ()>) -> Element {
    let mut text = use_signal(|| "".to_string());
    let set_text = move |e: Event<FormData>| {
        if disabled {
            return;
        }
        text.set(e.value());
    };
    let mut _send = move || {
        if disabled || text.read().trim().is_empty() {
            return;
        }
        on_send(text.cloned());
        text.set("".to_string());
    };
    let send = move |_e: Event<MouseData>| {
        _send();
    };
    let blank = text.read().trim().is_empty();
    let button_disabled = if disabled || blank { Some(true) } else { None };
    let disabled = if disabled { Some(true) } else { None };
    rsx! {
        div { class: "chat-input-form",
            textarea {
                placeholder: "Ask a question...",
                disabled,
                oninput: set_text,
                onkeypress: move |e: Event<KeyboardData>| {
                    let k: Rc<KeyboardData> = e.data;
                    if k.code() == Code::Enter && k.modifiers().ctrl() {
                        _send();
                    }
                },
                value: text,
            }
            button { onclick: send, disabled: button_disabled, "Send" }
        }
    }
}
