// Copyright © 2025 Nipun Kumar

use std::rc::Rc;

use dioxus::prelude::*;

/// Single-line prompt box with a send button.
///
/// The text stays editable while a reply is pending; only sending is gated.
/// `on_send` reports whether the text was accepted, and the box is cleared
/// only then.
#[component]
pub fn ChatInput(busy: bool, on_send: Callback<String, bool>) -> Element {
    let mut text = use_signal(|| "".to_string());
    let set_text = move |e: Event<FormData>| {
        text.set(e.value());
    };
    let mut _send = move || {
        if busy {
            return;
        }
        if on_send.call(text.cloned()) {
            text.set("".to_string());
        }
    };
    let send = move |_e: Event<MouseData>| {
        _send();
    };
    let disabled = if busy { Some(true) } else { None };
    rsx! {
        div { class: "chat-input",
            input {
                r#type: "text",
                placeholder: "Ask MAX anything...",
                oninput: set_text,
                onkeypress: move |e: Event<KeyboardData>| {
                    let k: Rc<KeyboardData> = e.data;
                    let code = k.code();
                    if (code == Code::Enter || code == Code::NumpadEnter) && !k.modifiers().shift() {
                        _send();
                    }
                },
                value: text,
            }
            button { class: "send", onclick: send, disabled, "➤" }
        }
    }
}
