use crate::application::ApplicationResult;
use crate::domain::article::Article;
use async_trait::async_trait;

/// Produces a short statistical digest of an article's abstract.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, article: &Article) -> ApplicationResult<String>;
}
