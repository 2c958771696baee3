use super::LiteratureQueryService;
use crate::{
    application::{
        dto::{ArticleDto, SearchRequestDto},
        error::ApplicationResult,
    },
    domain::{
        article::{Article, mentions_statistics},
        search::{MaxResults, SearchQuery},
    },
};

pub struct SearchArticlesQuery {
    pub query: String,
    pub max_results: i64,
    pub filter_stats: bool,
}

impl From<SearchRequestDto> for SearchArticlesQuery {
    fn from(request: SearchRequestDto) -> Self {
        Self {
            query: request.query,
            max_results: request.max_results,
            filter_stats: request.filter_stats,
        }
    }
}

impl LiteratureQueryService {
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let search_query = SearchQuery::new(&query.query)?;
        let max_results = MaxResults::new(query.max_results)?;

        let ids = self.source.search_ids(&search_query, max_results).await?;
        if ids.is_empty() {
            tracing::info!(query = %search_query, "no matching articles");
            return Ok(Vec::new());
        }

        let mut articles = self.source.fetch_details(&ids).await?;
        let fetched = articles.len();
        if query.filter_stats {
            articles.retain(|article| mentions_statistics(&article.abstract_text));
        }

        self.summarize(&mut articles).await;

        tracing::info!(
            query = %search_query,
            fetched,
            returned = articles.len(),
            filter_stats = query.filter_stats,
            "literature search finished"
        );

        Ok(articles.into_iter().map(Into::into).collect())
    }

    /// Fill in summaries where the summarizer succeeds. A failed summary
    /// leaves the article without one; it never fails the search.
    async fn summarize(&self, articles: &mut [Article]) {
        let Some(summarizer) = &self.summarizer else {
            return;
        };
        for article in articles.iter_mut() {
            if article.abstract_text.trim().is_empty() {
                continue;
            }
            match summarizer.summarize(article).await {
                Ok(summary) if !summary.trim().is_empty() => article.summary = Some(summary),
                Ok(_) => {}
                Err(err) => tracing::warn!(
                    pubmed_id = %article.pubmed_id,
                    error = %err,
                    "summarization failed"
                ),
            }
        }
    }
}
