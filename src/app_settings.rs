// Copyright © 2025 Nipun Kumar

//! Runtime configuration for the model provider.
//!
//! Settings are read once at startup and injected into the component tree as
//! context. Nothing here is ever written back to disk.

/// Base URL of Google's OpenAI-compatible Gemini endpoint.
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const API_URL_VAR: &str = "GEMINI_API_URL";
const MODEL_VAR: &str = "GEMINI_MODEL";

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: GEMINI_API_URL.to_string(),
            api_key: "".to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AppSettings {
    /// Builds settings from the process environment.
    ///
    /// The API key falls back to the value present at build time, which is the
    /// only source available when running in a browser.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_url: get(API_URL_VAR).unwrap_or(defaults.api_url),
            api_key: get(API_KEY_VAR)
                .or_else(|| option_env!("GEMINI_API_KEY").map(|s| s.to_string()))
                .unwrap_or(defaults.api_key),
            model: get(MODEL_VAR).unwrap_or(defaults.model),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_url.is_empty() && !self.model.is_empty()
    }

    pub fn get_api_url(&self) -> String {
        self.api_url.trim_end_matches('/').to_string()
    }

    pub fn get_api_key(&self) -> Option<String> {
        if self.api_key.is_empty() {
            None
        } else {
            Some(self.api_key.clone())
        }
    }
}
