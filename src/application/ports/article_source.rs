use crate::application::ApplicationResult;
use crate::domain::{
    article::{Article, PubmedId},
    search::{MaxResults, SearchQuery},
};
use async_trait::async_trait;

/// Bibliographic database the backend searches (PubMed in production).
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Identifiers of the best matches, at most `max_results` of them.
    async fn search_ids(
        &self,
        query: &SearchQuery,
        max_results: MaxResults,
    ) -> ApplicationResult<Vec<PubmedId>>;

    /// Full records for `ids`, in the same order.
    async fn fetch_details(&self, ids: &[PubmedId]) -> ApplicationResult<Vec<Article>>;
}
