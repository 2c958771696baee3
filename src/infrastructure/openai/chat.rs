// src/infrastructure/openai/chat.rs
use super::OpenAiConfig;
use crate::application::{ApplicationResult, error::ApplicationError};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Minimal client for the chat completions endpoint shared by the analyzer
/// and the summarizer.
pub(super) struct ChatCompletions {
    client: Client,
    config: OpenAiConfig,
}

/// Sampling settings of one completion call.
#[derive(Debug, Clone, Copy)]
pub(super) struct Sampling {
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletions {
    pub(super) fn new(client: Client, config: OpenAiConfig) -> Self {
        let mut config = config;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { client, config }
    }

    pub(super) fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    pub(super) async fn complete(
        &self,
        system: &str,
        user: &str,
        sampling: Sampling,
    ) -> ApplicationResult<String> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ApplicationError::upstream(format!("llm request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                model = %self.config.model,
                "llm returned an error status"
            );
            return Err(ApplicationError::upstream(format!(
                "llm returned status {}",
                status.as_u16()
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::upstream(format!("llm reply unreadable: {err}")))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ApplicationError::upstream("llm reply had no content"))
    }
}
