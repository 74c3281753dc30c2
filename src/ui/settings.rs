// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::{
    app_settings::AppSettings,
    preferences::Preferences,
    theme::{toggle_theme, use_theme},
};

#[allow(non_snake_case)]
#[component]
pub fn Settings() -> Element {
    let mut prefs = use_signal(|| {
        let settings = consume_context::<AppSettings>();
        Preferences::new(settings.api_key)
    });
    let theme = use_theme();
    // Edits stay on this screen; the chat keeps the key it started with.
    let handle_key_change = move |e: Event<FormData>| {
        prefs.write().set_api_key_text(e.value());
    };
    let dark = theme().is_dark();

    rsx! {
        div { class: "content settings",
            h1 { "Settings" }
            div { class: "card",
                div { class: "card-row",
                    div {
                        h3 { "Dark Mode" }
                        p { class: "hint", "Toggle dark mode" }
                    }
                    button {
                        class: "icon-button",
                        onclick: move |_| toggle_theme(theme),
                        if dark {
                            "☀"
                        } else {
                            "☾"
                        }
                    }
                }
            }
            div { class: "card",
                h3 { "API Settings" }
                input {
                    r#type: "password",
                    placeholder: "Enter Gemini API Key",
                    value: prefs.read().api_key_text().to_string(),
                    oninput: handle_key_change,
                }
                p { class: "hint", "API key is stored in environment variables" }
            }
        }
    }
}
