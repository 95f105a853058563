use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Narrator, SYSTEM_PROMPT};
use crate::config::Config;
use crate::errors::LedgerError;

const TEMPERATURE: f32 = 0.7;
const TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Chat-completions client for any OpenAI-compatible endpoint.
pub(crate) struct ChatNarrator {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl ChatNarrator {
    pub(crate) fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            model: config.model.clone(),
        })
    }
}

impl Narrator for ChatNarrator {
    fn generate(&self, prompt: &str) -> Result<String> {
        let key = self.api_key.as_deref().ok_or(LedgerError::MissingApiKey)?;
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: Some(SYSTEM_PROMPT.into()),
                },
                ChatMessage {
                    role: "user".into(),
                    content: Some(prompt.into()),
                },
            ],
            temperature: TEMPERATURE,
        };

        tracing::info!(model = %self.model, url = %self.api_url, "requesting narrative feedback");
        let response: ChatResponse = self
            .client
            .post(&self.api_url)
            .bearer_auth(key)
            .json(&request)
            .send()
            .with_context(|| format!("Request to {} failed", self.api_url))?
            .error_for_status()
            .context("Model endpoint returned an error")?
            .json()
            .context("Malformed completion response")?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .context("Completion response contained no text")
    }
}
