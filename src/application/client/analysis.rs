// src/application/client/analysis.rs
use super::request::{LoadingGuard, RequestState, TracksRequests, lock};
use crate::application::{
    ApplicationResult,
    dto::AnalyzeQueryRequestDto,
    error::ApplicationError,
    ports::{LiteratureApiPort, NotificationSinkPort, notifications::Notice},
};
use crate::domain::{analysis::QueryAnalysis, search::SearchQuery};
use std::sync::{Arc, Mutex};

pub const EMPTY_QUERY_NOTICE: &str = "Please enter a query first";
pub const ANALYSIS_FAILED_NOTICE: &str = "Error analyzing query";

/// Receives the confirmed PubMed query, typically to populate the search
/// form of a [`SearchController`](super::SearchController).
pub type QuerySelectCallback = Box<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Rejected,
    /// Analysis stored; `selected` is the default candidate.
    Completed { selected: String },
    /// Transport failure or malformed response; previous analysis kept.
    Failed,
    Superseded,
}

#[derive(Default)]
struct AnalysisState {
    analysis: Option<QueryAnalysis>,
    selected: Option<String>,
    requests: RequestState,
}

impl TracksRequests for AnalysisState {
    fn requests(&mut self) -> &mut RequestState {
        &mut self.requests
    }
}

pub struct QueryAnalysisController {
    api: Arc<LiteratureApiPort>,
    notifier: Arc<NotificationSinkPort>,
    on_query_select: QuerySelectCallback,
    state: Mutex<AnalysisState>,
}

impl QueryAnalysisController {
    pub fn new(
        api: Arc<LiteratureApiPort>,
        notifier: Arc<NotificationSinkPort>,
        on_query_select: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            api,
            notifier,
            on_query_select: Box::new(on_query_select),
            state: Mutex::new(AnalysisState::default()),
        }
    }

    pub fn analysis(&self) -> Option<QueryAnalysis> {
        lock(&self.state).analysis.clone()
    }

    pub fn selected_query(&self) -> Option<String> {
        lock(&self.state).selected.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).requests.is_loading()
    }

    pub async fn analyze(&self, query: &str) -> AnalysisOutcome {
        let Ok(parsed) = SearchQuery::new(query) else {
            tracing::debug!("analysis rejected: empty query");
            self.notifier.notify(Notice::warning(EMPTY_QUERY_NOTICE));
            return AnalysisOutcome::Rejected;
        };

        let guard = LoadingGuard::begin(&self.state);
        tracing::info!(query = %parsed, generation = guard.generation(), "analyzing query");

        let request = AnalyzeQueryRequestDto {
            query: query.to_string(),
        };
        let result = self
            .api
            .analyze_query(&request)
            .await
            .and_then(|dto| dto.into_domain().map_err(ApplicationError::from));

        let mut state = lock(&self.state);
        if !state.requests.is_current(guard.generation()) {
            tracing::debug!(
                generation = guard.generation(),
                "discarding superseded analysis response"
            );
            return AnalysisOutcome::Superseded;
        }

        match result {
            Ok(analysis) => {
                let selected = analysis.default_selection().to_string();
                tracing::info!(
                    candidates = analysis.pubmed_queries().len(),
                    keywords = analysis.keywords().len(),
                    "query analysis stored"
                );
                state.analysis = Some(analysis);
                state.selected = Some(selected.clone());
                AnalysisOutcome::Completed { selected }
            }
            Err(err) => {
                drop(state);
                if err.is_malformed_response() {
                    tracing::warn!(error = %err, "rejecting malformed analysis response");
                } else {
                    tracing::warn!(error = %err, "query analysis failed");
                }
                self.notifier
                    .notify(Notice::error(ANALYSIS_FAILED_NOTICE, err.user_message()));
                AnalysisOutcome::Failed
            }
        }
    }

    /// Make `candidate` the active query. It must be one of the candidates
    /// of the current analysis; otherwise the selection is left unchanged.
    pub fn select_query(&self, candidate: &str) -> ApplicationResult<()> {
        let mut state = lock(&self.state);
        let is_member = state
            .analysis
            .as_ref()
            .is_some_and(|analysis| analysis.contains_query(candidate));
        if !is_member {
            return Err(ApplicationError::validation(format!(
                "'{candidate}' is not one of the suggested queries"
            )));
        }
        state.selected = Some(candidate.to_string());
        Ok(())
    }

    /// Hand the active selection to the callback. Returns the query that was
    /// handed over, or `None` when nothing is selected.
    pub fn confirm_selection(&self) -> Option<String> {
        let selected = lock(&self.state).selected.clone()?;
        tracing::debug!(query = %selected, "confirming selected query");
        (self.on_query_select)(&selected);
        Some(selected)
    }
}
