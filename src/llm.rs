// Copyright © 2025 Nipun Kumar

//! Client for the generative-language model.
//!
//! Gemini is reached through its OpenAI-compatible chat-completions endpoint,
//! one non-streaming request per prompt.

use async_trait::async_trait;
use dioxus::logger::tracing::debug;
use serde::{Deserialize, Serialize};

use crate::app_settings::AppSettings;
use crate::error::{LlmError, Result};

/// --- REQUEST SIDE ---

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    User { content: String },
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<Message>,
    pub stream: bool,
}

/// --- RESPONSE SIDE ---

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice. An absent or empty first choice is an error.
    pub fn into_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

/// Anything that can turn a prompt into a completion.
#[async_trait(?Send)]
pub trait ModelClient {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            settings.get_api_url(),
            settings.api_key.clone(),
            settings.model.clone(),
        )
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }

    pub fn build_request<'a>(&'a self, prompt: &str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![Message::User {
                content: prompt.to_string(),
            }],
            stream: false,
        }
    }
}

#[async_trait(?Send)]
impl ModelClient for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }
        let url = self.completions_url();
        debug!("POST {url} model={}", self.model);
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.build_request(prompt))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(LlmError::Status { status, body });
        }

        let body: ChatResponse = res.json().await?;
        body.into_text()
    }
}
