// src/application/client/search.rs
use super::request::{LoadingGuard, RequestState, TracksRequests, lock};
use crate::application::{
    ApplicationResult,
    dto::{ArticleDto, SearchRequestDto},
    ports::{LiteratureApiPort, NotificationSinkPort, notifications::Notice},
};
use crate::domain::{
    article::ArticleSet,
    search::{MaxResults, SearchOptions, SearchQuery},
};
use std::sync::{Arc, Mutex};

pub const EMPTY_QUERY_NOTICE: &str = "Please enter a search query";
pub const NO_RESULTS_NOTICE: &str = "No results found";
pub const SEARCH_FAILED_NOTICE: &str = "Error fetching results";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank; nothing was sent.
    Rejected,
    /// The article list was replaced with `count` results.
    Completed { count: usize },
    /// The request failed; the previous article list is kept.
    Failed,
    /// A newer search was issued before this one returned.
    Superseded,
}

#[derive(Default)]
struct SearchState {
    query: String,
    options: SearchOptions,
    articles: ArticleSet,
    requests: RequestState,
}

impl TracksRequests for SearchState {
    fn requests(&mut self) -> &mut RequestState {
        &mut self.requests
    }
}

/// Owns the search form state and the current article list.
pub struct SearchController {
    api: Arc<LiteratureApiPort>,
    notifier: Arc<NotificationSinkPort>,
    state: Mutex<SearchState>,
}

impl SearchController {
    pub fn new(api: Arc<LiteratureApiPort>, notifier: Arc<NotificationSinkPort>) -> Self {
        Self {
            api,
            notifier,
            state: Mutex::new(SearchState::default()),
        }
    }

    pub fn set_query(&self, text: impl Into<String>) {
        lock(&self.state).query = text.into();
    }

    pub fn set_max_results(&self, value: i64) {
        lock(&self.state).options.max_results = MaxResults::clamped(value);
    }

    pub fn set_filter_stats(&self, enabled: bool) {
        lock(&self.state).options.filter_statistical_studies = enabled;
    }

    pub fn query(&self) -> String {
        lock(&self.state).query.clone()
    }

    pub fn options(&self) -> SearchOptions {
        lock(&self.state).options
    }

    pub fn articles(&self) -> ArticleSet {
        lock(&self.state).articles.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).requests.is_loading()
    }

    pub async fn search(&self) -> SearchOutcome {
        let (raw_query, options) = {
            let state = lock(&self.state);
            (state.query.clone(), state.options)
        };

        let Ok(query) = SearchQuery::new(&raw_query) else {
            tracing::debug!("search rejected: empty query");
            self.notifier.notify(Notice::warning(EMPTY_QUERY_NOTICE));
            return SearchOutcome::Rejected;
        };

        let guard = LoadingGuard::begin(&self.state);
        let request = SearchRequestDto {
            // The form value goes out as typed; only blankness is checked locally.
            query: raw_query,
            max_results: i64::from(options.max_results.get()),
            filter_stats: options.filter_statistical_studies,
        };
        tracing::info!(
            query = %query,
            max_results = request.max_results,
            filter_stats = request.filter_stats,
            generation = guard.generation(),
            "searching literature"
        );

        let result = self
            .api
            .search(&request)
            .await
            .and_then(into_article_set);

        let mut state = lock(&self.state);
        if !state.requests.is_current(guard.generation()) {
            tracing::debug!(
                generation = guard.generation(),
                "discarding superseded search response"
            );
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(articles) => {
                let count = articles.len();
                state.articles = articles;
                drop(state);
                tracing::info!(count, "search completed");
                if count == 0 {
                    self.notifier.notify(Notice::info(NO_RESULTS_NOTICE));
                }
                SearchOutcome::Completed { count }
            }
            Err(err) => {
                drop(state);
                tracing::warn!(error = %err, "search failed");
                self.notifier
                    .notify(Notice::error(SEARCH_FAILED_NOTICE, err.user_message()));
                SearchOutcome::Failed
            }
        }
    }
}

fn into_article_set(items: Vec<ArticleDto>) -> ApplicationResult<ArticleSet> {
    let articles = items
        .into_iter()
        .map(ArticleDto::into_domain)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ArticleSet::new(articles)?)
}
