//! Color theme shared by every screen.
//!
//! [`App`](crate::App) owns a `Signal<Theme>` and provides it as context. The
//! only place the theme becomes visible is the class list of the app root
//! element, so toggling never touches the document directly.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class applied to the app root.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "app",
            Theme::Dark => "app dark",
        }
    }
}

pub fn provide_theme() -> Signal<Theme> {
    use_context_provider(|| Signal::new(Theme::default()))
}

pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

pub fn toggle_theme(mut theme: Signal<Theme>) {
    let next = theme().toggled();
    theme.set(next);
}
