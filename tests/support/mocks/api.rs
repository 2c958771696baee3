// tests/support/mocks/api.rs
use async_trait::async_trait;
use litreview::application::{
    ApplicationResult,
    dto::{
        AnalyzeQueryRequestDto, ArticleDto, QueryAnalysisDto, RefineQueryRequestDto,
        RefinedQueryDto, SearchRequestDto,
    },
    error::ApplicationError,
    ports::literature_api::LiteratureApi,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;

type Scripted<T> = (ApplicationResult<T>, Option<oneshot::Receiver<()>>);

/// Backend fake answering from queued responses. A response may be gated:
/// the call then waits until the paired sender fires (or is dropped).
#[derive(Default)]
pub struct ScriptedApi {
    search_responses: Mutex<VecDeque<Scripted<Vec<ArticleDto>>>>,
    analysis_responses: Mutex<VecDeque<Scripted<QueryAnalysisDto>>>,
    search_requests: Mutex<Vec<SearchRequestDto>>,
    analyze_requests: Mutex<Vec<AnalyzeQueryRequestDto>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_search(&self, response: ApplicationResult<Vec<ArticleDto>>) {
        self.search_responses.lock().unwrap().push_back((response, None));
    }

    pub fn push_search_gated(
        &self,
        response: ApplicationResult<Vec<ArticleDto>>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.search_responses
            .lock()
            .unwrap()
            .push_back((response, Some(rx)));
        tx
    }

    pub fn push_analysis(&self, response: ApplicationResult<QueryAnalysisDto>) {
        self.analysis_responses
            .lock()
            .unwrap()
            .push_back((response, None));
    }

    pub fn push_analysis_gated(
        &self,
        response: ApplicationResult<QueryAnalysisDto>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.analysis_responses
            .lock()
            .unwrap()
            .push_back((response, Some(rx)));
        tx
    }

    pub fn search_requests(&self) -> Vec<SearchRequestDto> {
        self.search_requests.lock().unwrap().clone()
    }

    pub fn analyze_requests(&self) -> Vec<AnalyzeQueryRequestDto> {
        self.analyze_requests.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.search_requests.lock().unwrap().len()
    }

    pub fn analyze_calls(&self) -> usize {
        self.analyze_requests.lock().unwrap().len()
    }
}

async fn release<T>(scripted: Option<Scripted<T>>, what: &str) -> ApplicationResult<T> {
    let Some((response, gate)) = scripted else {
        return Err(ApplicationError::transport(format!("no scripted {what} response")));
    };
    if let Some(gate) = gate {
        let _ = gate.await;
    }
    response
}

#[async_trait]
impl LiteratureApi for ScriptedApi {
    async fn search(&self, request: &SearchRequestDto) -> ApplicationResult<Vec<ArticleDto>> {
        self.search_requests.lock().unwrap().push(request.clone());
        let next = self.search_responses.lock().unwrap().pop_front();
        release(next, "search").await
    }

    async fn analyze_query(
        &self,
        request: &AnalyzeQueryRequestDto,
    ) -> ApplicationResult<QueryAnalysisDto> {
        self.analyze_requests.lock().unwrap().push(request.clone());
        let next = self.analysis_responses.lock().unwrap().pop_front();
        release(next, "analysis").await
    }

    async fn refine_query(
        &self,
        request: &RefineQueryRequestDto,
    ) -> ApplicationResult<RefinedQueryDto> {
        Ok(RefinedQueryDto {
            query: format!("({}) AND refined", request.base_query),
        })
    }
}
