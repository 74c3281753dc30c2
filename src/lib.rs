use dioxus::prelude::*;

pub mod app_settings;
pub mod conversation;
pub mod error;
pub mod llm;
mod md2rsx;
pub mod preferences;
pub mod theme;
pub mod time_utils;
mod ui;

use ui::chatbot::Chatbot;
use ui::settings::Settings;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let theme = theme::provide_theme();
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: theme().root_class(),
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Chatbot {},
    #[route("/settings")]
    Settings {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout: the active screen above a bottom navigation bar.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
        nav { class: "bottom-nav",
            Link { to: Route::Chatbot {}, "Chat" }
            Link { to: Route::Settings {}, "Settings" }
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Chatbot {}, "Go To Chat" }
    }
}
