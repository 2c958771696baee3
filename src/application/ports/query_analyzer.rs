use crate::application::ApplicationResult;
use crate::domain::{analysis::QueryAnalysis, search::SearchQuery};
use async_trait::async_trait;

#[async_trait]
pub trait QueryAnalyzer: Send + Sync {
    async fn analyze(&self, query: &SearchQuery) -> ApplicationResult<QueryAnalysis>;

    /// Rewrite `base_query` so it addresses `feedback`, keeping PubMed syntax.
    async fn refine(&self, base_query: &SearchQuery, feedback: &str) -> ApplicationResult<String>;
}
