//! Local state of the settings screen.
//!
//! The key text is illustrative only: it is seeded from configuration, edited
//! in memory and dropped with the screen. It is never stored or sent anywhere.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    api_key_text: String,
}

impl Preferences {
    pub fn new(api_key_text: impl Into<String>) -> Self {
        Self {
            api_key_text: api_key_text.into(),
        }
    }

    pub fn api_key_text(&self) -> &str {
        &self.api_key_text
    }

    /// Replaces the text verbatim. Any string is accepted.
    pub fn set_api_key_text(&mut self, text: impl Into<String>) {
        self.api_key_text = text.into();
    }
}
