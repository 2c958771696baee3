// src/infrastructure/openai/analyzer.rs
use super::chat::{ChatCompletions, Sampling};
use super::prompts::{ANALYSIS_SYSTEM_PROMPT, REFINE_SYSTEM_PROMPT, refine_user_prompt};
use crate::application::{
    ApplicationResult, dto::QueryAnalysisDto, error::ApplicationError,
    ports::query_analyzer::QueryAnalyzer,
};
use crate::domain::{analysis::QueryAnalysis, search::SearchQuery};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.7,
        }
    }
}

/// [`QueryAnalyzer`] backed by the OpenAI chat completions API.
pub struct OpenAiQueryAnalyzer {
    chat: ChatCompletions,
}

impl OpenAiQueryAnalyzer {
    pub fn new(client: Client, config: OpenAiConfig) -> Self {
        Self {
            chat: ChatCompletions::new(client, config),
        }
    }

    fn sampling(&self) -> Sampling {
        Sampling {
            temperature: self.chat.config().temperature,
            max_tokens: None,
        }
    }
}

/// Parse the JSON object in an analysis reply. Models sometimes wrap it in
/// prose or a fenced code block, so the outermost `{...}` is used.
pub fn parse_analysis_reply(reply: &str) -> ApplicationResult<QueryAnalysis> {
    let start = reply.find('{');
    let end = reply.rfind('}');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &reply[start..=end],
        _ => return Err(ApplicationError::upstream("llm reply contained no json object")),
    };

    let dto: QueryAnalysisDto = serde_json::from_str(json).map_err(|err| {
        ApplicationError::upstream(format!("llm reply is not an analysis: {err}"))
    })?;
    dto.into_domain()
        .map_err(|err| ApplicationError::upstream(format!("llm analysis rejected: {err}")))
}

fn clean_refined_query(reply: &str) -> String {
    reply
        .trim()
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
        .trim_matches('`')
        .trim_matches('"')
        .trim()
        .to_string()
}

#[async_trait]
impl QueryAnalyzer for OpenAiQueryAnalyzer {
    async fn analyze(&self, query: &SearchQuery) -> ApplicationResult<QueryAnalysis> {
        let reply = self
            .chat
            .complete(ANALYSIS_SYSTEM_PROMPT, query.as_str(), self.sampling())
            .await?;
        parse_analysis_reply(&reply)
    }

    async fn refine(&self, base_query: &SearchQuery, feedback: &str) -> ApplicationResult<String> {
        let prompt = refine_user_prompt(base_query.as_str(), feedback);
        let reply = self
            .chat
            .complete(REFINE_SYSTEM_PROMPT, &prompt, self.sampling())
            .await?;
        Ok(clean_refined_query(&reply))
    }
}
