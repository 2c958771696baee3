// tests/support/mocks/backend.rs
use async_trait::async_trait;
use litreview::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{article_source::ArticleSource, query_analyzer::QueryAnalyzer, summarizer::Summarizer},
};
use litreview::domain::{
    analysis::QueryAnalysis,
    article::{Article, PubmedId},
    search::{MaxResults, SearchQuery},
};
use std::sync::Mutex;

/// In-memory article database. `search_ids` returns every stored article
/// (up to the cap) whose title contains the query, case-insensitively.
#[derive(Default)]
pub struct StubArticleSource {
    articles: Vec<Article>,
    fail_with: Option<String>,
    searched: Mutex<Vec<(String, u32)>>,
}

impl StubArticleSource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            ..Self::default()
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn searched(&self) -> Vec<(String, u32)> {
        self.searched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleSource for StubArticleSource {
    async fn search_ids(
        &self,
        query: &SearchQuery,
        max_results: MaxResults,
    ) -> ApplicationResult<Vec<PubmedId>> {
        self.searched
            .lock()
            .unwrap()
            .push((query.as_str().to_string(), max_results.get()));
        if let Some(message) = &self.fail_with {
            return Err(ApplicationError::upstream(message.clone()));
        }
        let needle = query.as_str().to_lowercase();
        Ok(self
            .articles
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&needle))
            .take(max_results.get() as usize)
            .map(|a| a.pubmed_id.clone())
            .collect())
    }

    async fn fetch_details(&self, ids: &[PubmedId]) -> ApplicationResult<Vec<Article>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.articles.iter().find(|a| &a.pubmed_id == id).cloned())
            .collect())
    }
}

pub struct StubAnalyzer {
    queries: Vec<String>,
}

impl StubAnalyzer {
    pub fn new(queries: &[&str]) -> Self {
        Self {
            queries: queries.iter().map(|q| q.to_string()).collect(),
        }
    }
}

#[async_trait]
impl QueryAnalyzer for StubAnalyzer {
    async fn analyze(&self, query: &SearchQuery) -> ApplicationResult<QueryAnalysis> {
        QueryAnalysis::new(
            query.as_str().split_whitespace().map(str::to_string).collect(),
            vec!["Neoplasms".into()],
            self.queries.clone(),
            "stub strategy",
        )
        .map_err(|err| ApplicationError::upstream(err.to_string()))
    }

    async fn refine(&self, base_query: &SearchQuery, feedback: &str) -> ApplicationResult<String> {
        Ok(format!("{} AND {}", base_query, feedback))
    }
}

/// Summarizes every article as `summary of <pmid>` unless its PMID is
/// listed as failing.
#[derive(Default)]
pub struct StubSummarizer {
    failing: Vec<String>,
    seen: Mutex<Vec<String>>,
}

impl StubSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(ids: &[&str]) -> Self {
        Self {
            failing: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, article: &Article) -> ApplicationResult<String> {
        let id = article.pubmed_id.as_str().to_string();
        self.seen.lock().unwrap().push(id.clone());
        if self.failing.contains(&id) {
            return Err(ApplicationError::upstream("llm returned status 500"));
        }
        Ok(format!("summary of {id}"))
    }
}
