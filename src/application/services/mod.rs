use std::sync::Arc;

use crate::application::{
    ports::{ArticleSourcePort, QueryAnalyzerPort, SummarizerPort},
    queries::{analysis::QueryAnalysisService, literature::LiteratureQueryService},
};

/// Backend services shared by the HTTP handlers.
pub struct ApplicationServices {
    pub literature_queries: Arc<LiteratureQueryService>,
    pub analysis_queries: Arc<QueryAnalysisService>,
}

impl ApplicationServices {
    /// Search results carry summaries only when `summarizer` is given.
    pub fn new(
        source: Arc<ArticleSourcePort>,
        analyzer: Arc<QueryAnalyzerPort>,
        summarizer: Option<Arc<SummarizerPort>>,
    ) -> Self {
        let literature = LiteratureQueryService::new(source);
        let literature = match summarizer {
            Some(summarizer) => literature.with_summarizer(summarizer),
            None => literature,
        };
        Self {
            literature_queries: Arc::new(literature),
            analysis_queries: Arc::new(QueryAnalysisService::new(analyzer)),
        }
    }
}
