// Copyright © 2025 Nipun Kumar

//! Main chat screen.
//!
//! Owns the [`Conversation`] for as long as the screen is mounted. A submit
//! records the user turn synchronously, then a spawned task waits on the model
//! and records the reply (or the apology) when it resolves.

use dioxus::prelude::*;

use crate::{
    app_settings::AppSettings,
    conversation::{Conversation, request_reply},
    llm::LlmClient,
    time_utils::{self, TimeOfDay},
    ui::{
        chat_input::ChatInput,
        message::{MessageEl, ThinkingEl},
    },
};

const CHAT_END_ID: &str = "chat-end";

const SCROLL_TO_END: &str =
    r#"document.getElementById("chat-end")?.scrollIntoView({ behavior: "smooth" });"#;

#[component]
pub fn Chatbot() -> Element {
    let client = use_hook(|| {
        let settings = consume_context::<AppSettings>();
        LlmClient::from_settings(&settings)
    });
    let mut conversation =
        use_signal(|| Conversation::new(TimeOfDay::at(&time_utils::now())));

    // Keep the newest turn in view after every change.
    use_effect(move || {
        let _ = conversation.read().turns().len();
        let _ = document::eval(SCROLL_TO_END);
    });

    let on_send = move |text: String| -> bool {
        let now = time_utils::now();
        let Some(pending) = conversation.write().begin_submit(&text, &now) else {
            return false;
        };
        let client = client.clone();
        spawn(async move {
            let outcome = request_reply(&client, &pending).await;
            conversation.write().finish(outcome);
        });
        true
    };

    let header_time = time_utils::format_time(&time_utils::now());
    let busy = conversation.read().is_awaiting();

    rsx! {
        div { class: "content chat",
            div { class: "chat-header",
                h1 { "MAX" }
                div { class: "clock", "🕒 {header_time}" }
            }
            div { class: "chat-container",
                for (i , turn) in conversation.read().turns().iter().enumerate() {
                    MessageEl { key: "{i}", turn: turn.clone() }
                }
                if busy {
                    ThinkingEl {}
                }
                div { id: CHAT_END_ID }
            }
            ChatInput { busy, on_send }
        }
    }
}
