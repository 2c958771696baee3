use super::chat::{ChatCompletions, Sampling};
use super::prompts::{SUMMARY_SYSTEM_PROMPT, summary_user_prompt};
use super::OpenAiConfig;
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::summarizer::Summarizer,
};
use crate::domain::article::Article;
use async_trait::async_trait;
use reqwest::Client;

const SUMMARY_SAMPLING: Sampling = Sampling {
    temperature: 0.3,
    max_tokens: Some(2000),
};

/// [`Summarizer`] that asks the chat model for a statistics-focused digest.
pub struct OpenAiSummarizer {
    chat: ChatCompletions,
}

impl OpenAiSummarizer {
    pub fn new(client: Client, config: OpenAiConfig) -> Self {
        Self {
            chat: ChatCompletions::new(client, config),
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, article: &Article) -> ApplicationResult<String> {
        if article.abstract_text.trim().is_empty() {
            return Err(ApplicationError::validation(format!(
                "article {} has no abstract to summarize",
                article.pubmed_id
            )));
        }
        let prompt = summary_user_prompt(&article.title, &article.abstract_text);
        let reply = self
            .chat
            .complete(SUMMARY_SYSTEM_PROMPT, &prompt, SUMMARY_SAMPLING)
            .await?;
        Ok(reply.trim().to_string())
    }
}
