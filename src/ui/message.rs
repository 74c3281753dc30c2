use dioxus::prelude::*;

use crate::conversation::{ChatTurn, Role};

#[component]
pub fn MessageEl(turn: ChatTurn) -> Element {
    // User turns sit on the right, assistant turns on the left.
    let (row, class) = match turn.role {
        Role::User => ("message-row right", "message human-message"),
        Role::Assistant => ("message-row left", "message ai-message"),
    };
    let el = crate::md2rsx::markdown_to_rsx(&turn.content)?;
    rsx! {
        div { class: row,
            div { class, {el} }
        }
    }
}

#[component]
pub fn ThinkingEl() -> Element {
    rsx! {
        div { class: "message-row left",
            div { class: "message ai-message thinking", "MAX is thinking..." }
        }
    }
}
